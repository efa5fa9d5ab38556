//! Caller identity taken from the trusted `X-MEMBER-ID` header.
//!
//! The header is not authenticated; an upstream gateway is expected to set
//! it. A missing or blank header is rejected unless an [`IdentityConfig`]
//! with a fallback member is registered as app data.

use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::{Ready, ready};
use serde_json::json;
use tracing::warn;

use crate::domain::{Error, MemberId};

/// Request header carrying the caller's member id.
pub const MEMBER_ID_HEADER: &str = "X-MEMBER-ID";

/// Identity policy registered with `App::app_data`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use gri_service::domain::MemberId;
/// use gri_service::inbound::http::identity::IdentityConfig;
///
/// let fallback = MemberId::new(1);
/// let _app = App::new().app_data(IdentityConfig::with_fallback(fallback));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityConfig {
    fallback: Option<MemberId>,
}

impl IdentityConfig {
    /// Reject requests without an identity header.
    #[must_use]
    pub fn strict() -> Self {
        Self::default()
    }

    /// Substitute `member` when the identity header is missing.
    #[must_use]
    pub fn with_fallback(member: MemberId) -> Self {
        Self {
            fallback: Some(member),
        }
    }

    /// Build from an optional fallback.
    #[must_use]
    pub fn new(fallback: Option<MemberId>) -> Self {
        Self { fallback }
    }

    #[must_use]
    pub fn fallback(&self) -> Option<MemberId> {
        self.fallback
    }
}

/// Extracted caller identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberIdentity(MemberId);

impl MemberIdentity {
    #[must_use]
    pub fn member_id(self) -> MemberId {
        self.0
    }
}

fn invalid_header(value: &str, reason: impl std::fmt::Display) -> Error {
    Error::invalid_request(format!("{MEMBER_ID_HEADER} header is invalid: {reason}")).with_details(
        json!({
            "field": MEMBER_ID_HEADER,
            "value": value,
            "code": "invalid_member_id",
        }),
    )
}

fn resolve(req: &HttpRequest) -> Result<MemberIdentity, Error> {
    let raw = match req.headers().get(MEMBER_ID_HEADER) {
        Some(value) => Some(
            value
                .to_str()
                .map_err(|_| invalid_header("", "not visible ASCII"))?,
        ),
        None => None,
    };

    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => value
            .parse::<MemberId>()
            .map(MemberIdentity)
            .map_err(|err| invalid_header(value, err)),
        None => {
            let config = req
                .app_data::<IdentityConfig>()
                .copied()
                .unwrap_or_default();
            match config.fallback() {
                Some(member) => {
                    warn!(
                        member_id = %member,
                        path = %req.path(),
                        "identity header missing; using configured fallback member"
                    );
                    Ok(MemberIdentity(member))
                }
                None => Err(Error::missing_identity(format!(
                    "{MEMBER_ID_HEADER} header is required"
                ))),
            }
        }
    }
}

impl FromRequest for MemberIdentity {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(resolve(req))
    }
}
