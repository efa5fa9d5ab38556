//! Shared validation helpers for inbound HTTP adapters.

use actix_web::{HttpRequest, error::JsonPayloadError};
use serde_json::json;

use crate::domain::{DisclosureId, DisclosureValidationError, Error, GriCode};

/// Validation error codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    InvalidId,
    InvalidGriCode,
    InvalidField,
    MalformedBody,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::InvalidId => "invalid_id",
            Self::InvalidGriCode => "invalid_gri_code",
            Self::InvalidField => "invalid_field",
            Self::MalformedBody => "malformed_body",
        }
    }
}

fn field_error(field: &str, value: &str, code: ValidationCode, message: String) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field,
        "value": value,
        "code": code.as_str(),
    }))
}

/// Parse a disclosure id path segment.
pub(crate) fn parse_disclosure_id(raw: &str) -> Result<DisclosureId, Error> {
    raw.parse().map_err(|err: DisclosureValidationError| {
        field_error("id", raw, ValidationCode::InvalidId, err.to_string())
    })
}

/// Parse a GRI code from a request body field.
pub(crate) fn parse_gri_code(raw: String) -> Result<GriCode, Error> {
    GriCode::new(raw.clone()).map_err(|err| {
        field_error(
            "griCode",
            &raw,
            ValidationCode::InvalidGriCode,
            err.to_string(),
        )
    })
}

/// Resolve a GRI code used as a lookup key.
///
/// No record can hold a code that fails validation, so such a lookup is a
/// miss rather than a bad request.
pub(crate) fn lookup_gri_code(raw: String) -> Result<GriCode, Error> {
    GriCode::new(raw.clone())
        .map_err(|_| Error::not_found(format!("no disclosure found for GRI code {raw}")))
}

/// Map a body-level validation failure onto the offending field.
pub(crate) fn invalid_field(err: &DisclosureValidationError) -> Error {
    let field = match err {
        DisclosureValidationError::LabelTooLong { field, .. } => *field,
        DisclosureValidationError::EmptyCode | DisclosureValidationError::CodeTooLong { .. } => {
            "griCode"
        }
        DisclosureValidationError::InvalidId => "id",
    };
    Error::invalid_request(err.to_string()).with_details(json!({
        "field": field,
        "code": ValidationCode::InvalidField.as_str(),
    }))
}

/// `JsonConfig` error handler rendering body failures as `INVALID_REQUEST`.
///
/// # Examples
/// ```
/// use actix_web::web;
/// use gri_service::inbound::http::validation::json_error_handler;
///
/// let _config = web::JsonConfig::default().error_handler(json_error_handler);
/// ```
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        JsonPayloadError::ContentType => "request body must be application/json".to_owned(),
        JsonPayloadError::Deserialize(inner) => format!("request body is invalid: {inner}"),
        other => format!("request body could not be read: {other}"),
    };
    Error::invalid_request(message)
        .with_path(req.path())
        .with_details(json!({ "code": ValidationCode::MalformedBody.as_str() }))
        .into()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::domain::ErrorCode;

    #[rstest]
    #[case("12", 12)]
    #[case("9223372036854775807", i64::MAX)]
    fn parses_valid_ids(#[case] raw: &str, #[case] expected: i64) {
        assert_eq!(parse_disclosure_id(raw).expect("valid").get(), expected);
    }

    #[rstest]
    #[case("0", 0)]
    #[case("-1", -1)]
    fn non_positive_ids_are_well_formed(#[case] raw: &str, #[case] expected: i64) {
        assert_eq!(parse_disclosure_id(raw).expect("well formed").get(), expected);
    }

    #[rstest]
    #[case("abc")]
    #[case("1.0")]
    #[case("")]
    fn rejects_invalid_ids_with_field_details(#[case] raw: &str) {
        let err = parse_disclosure_id(raw).expect_err("invalid");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        let details = err.details().expect("details");
        assert_eq!(details["field"], "id");
        assert_eq!(details["value"], raw);
        assert_eq!(details["code"], "invalid_id");
    }

    #[rstest]
    fn rejects_overlong_codes() {
        let err = parse_gri_code("403-10-extra".to_owned()).expect_err("too long");
        assert_eq!(err.details().expect("details")["code"], "invalid_gri_code");
    }

    #[rstest]
    #[case("")]
    #[case("403-10-extra")]
    fn unstorable_lookup_codes_are_not_found(#[case] raw: &str) {
        let err = lookup_gri_code(raw.to_owned()).expect_err("no such record");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert!(err.details().is_none());
    }

    #[rstest]
    fn label_errors_name_their_field() {
        let err = invalid_field(&DisclosureValidationError::LabelTooLong {
            field: "category",
            max: 255,
        });
        assert_eq!(err.details().expect("details")["field"], "category");
    }
}
