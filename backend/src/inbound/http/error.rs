//! Rendering of domain errors as HTTP responses.
//!
//! Status codes are decided here and nowhere else. Bodies are the serialized
//! [`Error`]; internal failures lose their message and details on the way
//! out but keep `path` and `traceId` for correlation.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Result type returned by every handler.
pub type ApiResult<T> = Result<T, Error>;

const REDACTED_MESSAGE: &str = "Internal server error";

fn http_status(code: ErrorCode) -> StatusCode {
    use ErrorCode as C;
    match code {
        C::InvalidRequest => StatusCode::BAD_REQUEST,
        C::MissingIdentity => StatusCode::UNAUTHORIZED,
        C::UnauthorizedAccess => StatusCode::FORBIDDEN,
        C::NotFound => StatusCode::NOT_FOUND,
        C::DuplicateDisclosure => StatusCode::CONFLICT,
        C::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        C::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// The body clients are allowed to see for `err`.
fn client_view(err: &Error) -> Error {
    if err.code() != ErrorCode::InternalError {
        return err.clone();
    }
    error!(
        message = %err.message(),
        path = %err.path(),
        trace_id = err.trace_id().unwrap_or_default(),
        "internal error redacted"
    );
    let redacted = Error::internal(REDACTED_MESSAGE).with_path(err.path());
    match err.trace_id() {
        Some(trace_id) => redacted.with_trace_id(trace_id),
        None => redacted,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        http_status(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        if let Some(trace_id) = self.trace_id() {
            response.insert_header((TRACE_ID_HEADER, trace_id.to_owned()));
        }
        response.json(client_view(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "framework error surfaced as internal error");
        Error::internal(REDACTED_MESSAGE)
    }
}
