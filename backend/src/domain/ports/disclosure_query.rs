//! Driving port for disclosure reads scoped to the caller.

use async_trait::async_trait;

use crate::domain::{Disclosure, Error, GriCode, MemberId};

/// Driving port for reading a member's disclosures.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DisclosureQuery: Send + Sync {
    /// All disclosures owned by `member`, oldest first.
    async fn list(&self, member: MemberId) -> Result<Vec<Disclosure>, Error>;

    /// The disclosure `member` holds for `code`, or `GRI_NOT_FOUND`.
    async fn get_by_code(&self, member: MemberId, code: &GriCode) -> Result<Disclosure, Error>;
}
