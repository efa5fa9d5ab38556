//! Correlation identifier that follows a request through logs and errors.
//!
//! The active identifier lives in the task-local [`RequestContext`]; it is
//! not inherited by spawned tasks, so wrap spawned work in
//! [`RequestContext::scope`] to carry it along.

use uuid::Uuid;

use super::request_context::RequestContext;

/// Per-request trace identifier.
///
/// # Examples
/// ```
/// use gri_service::TraceId;
///
/// let id: TraceId = "00000000-0000-0000-0000-000000000000".parse().expect("uuid");
/// assert_eq!(id.to_string(), "00000000-0000-0000-0000-000000000000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Generate a new random trace identifier.
    #[must_use]
    #[rustfmt::skip]
    pub fn generate() -> Self { Self(Uuid::new_v4()) }

    /// Construct a trace identifier from an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the trace identifier of the request in scope, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        RequestContext::current_trace_id()
    }

    /// Access the inner UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for TraceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}
