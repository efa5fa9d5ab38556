//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! responses; the payload shape (`errorCode`, `message`, `path`) is what
//! clients see in every failure body.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::request_context::RequestContext;

/// Response header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    #[serde(rename = "INVALID_REQUEST")]
    InvalidRequest,
    /// No caller identity was supplied and no fallback is configured.
    #[serde(rename = "MISSING_MEMBER_ID")]
    MissingIdentity,
    /// The record does not exist or belongs to another member.
    #[serde(rename = "UNAUTHORIZED_GRI_ACCESS")]
    UnauthorizedAccess,
    /// No disclosure matches the requested code for the caller.
    #[serde(rename = "GRI_NOT_FOUND")]
    NotFound,
    /// The caller already holds a disclosure for the requested code.
    #[serde(rename = "DUPLICATE_GRI_DISCLOSURE")]
    DuplicateDisclosure,
    /// A backing dependency is unreachable.
    #[serde(rename = "SERVICE_UNAVAILABLE")]
    ServiceUnavailable,
    /// An unexpected error occurred inside the domain.
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

/// Domain error payload.
///
/// `path` and `trace_id` are captured from the surrounding request scope when
/// the error is constructed; outside a request both are empty.
///
/// # Examples
/// ```
/// use gri_service::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("no disclosure for code 401-1");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.path(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    #[serde(rename = "errorCode")]
    code: ErrorCode,
    message: String,
    #[serde(default)]
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl Error {
    /// Create a new error bound to the current request scope, if any.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: RequestContext::current_path().unwrap_or_default(),
            trace_id: RequestContext::current_trace_id().map(|id| id.to_string()),
            details: None,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Request path the error was raised for.
    pub fn path(&self) -> &str {
        self.path.as_str()
    }

    /// Correlation identifier, when raised inside a traced request.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Supplementary error details for adapters.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Attach a trace identifier to the error.
    #[must_use]
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Override the request path recorded on the error.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Attach structured details to the error.
    ///
    /// # Examples
    /// ```
    /// use gri_service::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::invalid_request("bad")
    ///     .with_details(json!({ "field": "griCode" }));
    /// assert!(err.details().is_some());
    /// ```
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::MissingIdentity`].
    pub fn missing_identity(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingIdentity, message)
    }

    /// Convenience constructor for [`ErrorCode::UnauthorizedAccess`].
    pub fn unauthorized_access(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UnauthorizedAccess, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::DuplicateDisclosure`].
    pub fn duplicate_disclosure(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DuplicateDisclosure, message)
    }

    /// Convenience constructor for [`ErrorCode::ServiceUnavailable`].
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
