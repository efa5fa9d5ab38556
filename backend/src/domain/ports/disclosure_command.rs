//! Driving port for disclosure mutations.

use async_trait::async_trait;

use crate::domain::{Disclosure, DisclosureDraft, DisclosureId, Error, MemberId};

/// Driving port for creating, editing, and removing disclosures.
///
/// Every operation acts on behalf of `member`; records owned by anyone else
/// are indistinguishable from missing ones.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DisclosureCommand: Send + Sync {
    /// Create a disclosure for `member`.
    ///
    /// Fails with `DUPLICATE_GRI_DISCLOSURE` when the member already holds the
    /// code.
    async fn create(&self, member: MemberId, draft: DisclosureDraft) -> Result<Disclosure, Error>;

    /// Replace the content of a disclosure owned by `member`.
    async fn update_content(
        &self,
        member: MemberId,
        id: DisclosureId,
        content: Option<String>,
    ) -> Result<Disclosure, Error>;

    /// Delete a disclosure owned by `member`.
    async fn delete(&self, member: MemberId, id: DisclosureId) -> Result<(), Error>;
}
