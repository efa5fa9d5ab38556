//! GRI disclosure records.
//!
//! A disclosure is one reporting line item a member fills in against a GRI
//! indicator code. The `(member, code)` pair is unique; only `content` changes
//! after creation.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::MemberId;

/// Maximum stored length of a GRI code.
pub const GRI_CODE_MAX: usize = 10;
/// Maximum stored length of the indicator and category labels.
pub const LABEL_MAX: usize = 255;

/// Validation errors raised while building disclosure values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DisclosureValidationError {
    #[error("griCode must not be empty")]
    EmptyCode,
    #[error("griCode must be at most {max} characters")]
    CodeTooLong { max: usize },
    #[error("{field} must be at most {max} characters")]
    LabelTooLong { field: &'static str, max: usize },
    #[error("disclosure id must be a 64-bit integer")]
    InvalidId,
}

/// Server-assigned disclosure identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisclosureId(i64);

impl DisclosureId {
    /// Wrap a stored identifier.
    #[must_use]
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    #[must_use]
    pub fn get(self) -> i64 {
        self.0
    }
}

impl FromStr for DisclosureId {
    type Err = DisclosureValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| DisclosureValidationError::InvalidId)
    }
}

impl fmt::Display for DisclosureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// GRI indicator code such as `401-1`.
///
/// # Examples
/// ```
/// use gri_service::domain::GriCode;
///
/// let code = GriCode::new("401-1").expect("valid code");
/// assert_eq!(code.as_ref(), "401-1");
/// assert!(GriCode::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GriCode(String);

impl GriCode {
    /// Validate and construct a code.
    pub fn new(code: impl Into<String>) -> Result<Self, DisclosureValidationError> {
        let code = code.into();
        if code.is_empty() {
            return Err(DisclosureValidationError::EmptyCode);
        }
        if code.chars().count() > GRI_CODE_MAX {
            return Err(DisclosureValidationError::CodeTooLong { max: GRI_CODE_MAX });
        }
        Ok(Self(code))
    }
}

impl AsRef<str> for GriCode {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for GriCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for GriCode {
    type Error = DisclosureValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<GriCode> for String {
    fn from(value: GriCode) -> Self {
        value.0
    }
}

/// Caller-supplied fields for a new disclosure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisclosureDraft {
    pub gri_code: GriCode,
    pub indicator: String,
    pub category: Option<String>,
    pub content: Option<String>,
}

impl DisclosureDraft {
    /// Build a draft, enforcing the stored label lengths.
    pub fn new(
        gri_code: GriCode,
        indicator: impl Into<String>,
        category: Option<String>,
        content: Option<String>,
    ) -> Result<Self, DisclosureValidationError> {
        let indicator = indicator.into();
        check_label("indicator", &indicator)?;
        if let Some(category) = category.as_deref() {
            check_label("category", category)?;
        }
        Ok(Self {
            gri_code,
            indicator,
            category,
            content,
        })
    }
}

fn check_label(field: &'static str, value: &str) -> Result<(), DisclosureValidationError> {
    if value.chars().count() > LABEL_MAX {
        return Err(DisclosureValidationError::LabelTooLong {
            field,
            max: LABEL_MAX,
        });
    }
    Ok(())
}

/// A stored disclosure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disclosure {
    pub id: DisclosureId,
    pub member_id: MemberId,
    pub gri_code: GriCode,
    pub indicator: String,
    pub category: Option<String>,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Disclosure {
    /// Whether `member` owns this record.
    #[must_use]
    pub fn is_owned_by(&self, member: MemberId) -> bool {
        self.member_id == member
    }

    /// A disclosure counts as complete once its content has text other than
    /// ASCII spaces and control characters. Other Unicode whitespace, such as
    /// U+3000, counts as text.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.content
            .as_deref()
            .is_some_and(|content| !content.trim_matches(|c: char| c <= ' ').is_empty())
    }
}
