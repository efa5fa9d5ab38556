//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic and do not derive `ToSchema`; the
//! wrappers here mirror their wire shape for documentation only.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "INVALID_REQUEST")]
    InvalidRequest,
    /// No `X-MEMBER-ID` header and no fallback configured.
    #[schema(rename = "MISSING_MEMBER_ID")]
    MissingIdentity,
    /// The disclosure does not exist or belongs to another member.
    #[schema(rename = "UNAUTHORIZED_GRI_ACCESS")]
    UnauthorizedAccess,
    /// No disclosure for the requested GRI code.
    #[schema(rename = "GRI_NOT_FOUND")]
    NotFound,
    /// The caller already holds a disclosure for the GRI code.
    #[schema(rename = "DUPLICATE_GRI_DISCLOSURE")]
    DuplicateDisclosure,
    /// The database is unreachable.
    #[schema(rename = "SERVICE_UNAVAILABLE")]
    ServiceUnavailable,
    /// Unexpected server failure; the message is redacted.
    #[schema(rename = "INTERNAL_ERROR")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(rename = "errorCode", example = "GRI_NOT_FOUND")]
    code: ErrorCodeSchema,
    /// Human-readable message.
    #[schema(example = "no disclosure found for GRI code 401-1")]
    message: String,
    /// Request path that produced the error.
    #[schema(example = "/api/v1/gri/401-1")]
    path: String,
    /// Correlation identifier, mirrored in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary details such as the offending field.
    details: Option<serde_json::Value>,
}
