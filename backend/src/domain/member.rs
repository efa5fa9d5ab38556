//! Member identity primitive.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors returned when parsing a [`MemberId`] from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MemberIdValidationError {
    #[error("member id must not be empty")]
    Empty,
    #[error("member id must be a 64-bit integer")]
    NotANumber,
}

/// Identifier of the member owning disclosures.
///
/// The value is trusted as supplied by the gateway; any 64-bit integer is a
/// member id, including zero and negatives.
///
/// # Examples
/// ```
/// use gri_service::domain::MemberId;
///
/// let id: MemberId = " 42 ".parse().expect("valid member id");
/// assert_eq!(id.get(), 42);
/// assert_eq!("0".parse::<MemberId>(), Ok(MemberId::new(0)));
/// assert!("abc".parse::<MemberId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(i64);

impl MemberId {
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    #[must_use]
    pub fn get(self) -> i64 {
        self.0
    }
}

impl FromStr for MemberId {
    type Err = MemberIdValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MemberIdValidationError::Empty);
        }
        trimmed
            .parse::<i64>()
            .map(Self)
            .map_err(|_| MemberIdValidationError::NotANumber)
    }
}

impl From<i64> for MemberId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<MemberId> for i64 {
    fn from(value: MemberId) -> Self {
        value.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
