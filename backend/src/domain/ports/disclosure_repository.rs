//! Port for disclosure persistence.
//!
//! Adapters must enforce uniqueness of `(member, code)` atomically with the
//! insert and report a rejected insert as
//! [`DisclosureRepositoryError::DuplicateCode`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Disclosure, DisclosureDraft, DisclosureId, GriCode, MemberId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by disclosure repository adapters.
    pub enum DisclosureRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "disclosure repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "disclosure repository query failed: {message}",
        /// The unique `(member, code)` index rejected an insert.
        DuplicateCode { code: String } =>
            "disclosure already exists for code {code}",
    }
}

/// Values needed to insert a new row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDisclosureRecord {
    pub member_id: MemberId,
    pub draft: DisclosureDraft,
    pub created_at: DateTime<Utc>,
}

/// Port for reading and writing disclosure rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DisclosureRepository: Send + Sync {
    /// Insert a row and return it with its assigned id.
    async fn insert(
        &self,
        record: NewDisclosureRecord,
    ) -> Result<Disclosure, DisclosureRepositoryError>;

    /// Find a row by id regardless of owner.
    async fn find_by_id(
        &self,
        id: DisclosureId,
    ) -> Result<Option<Disclosure>, DisclosureRepositoryError>;

    /// Find the row a member holds for `code`.
    async fn find_by_member_and_code(
        &self,
        member_id: MemberId,
        code: &GriCode,
    ) -> Result<Option<Disclosure>, DisclosureRepositoryError>;

    /// List a member's rows in insertion (id) order.
    async fn list_by_member(
        &self,
        member_id: MemberId,
    ) -> Result<Vec<Disclosure>, DisclosureRepositoryError>;

    /// Persist the mutable fields (`content`, `updated_at`) of `record`.
    ///
    /// Returns `None` when the row no longer exists.
    async fn update(
        &self,
        record: &Disclosure,
    ) -> Result<Option<Disclosure>, DisclosureRepositoryError>;

    /// Delete a row, returning whether it existed.
    async fn delete(&self, id: DisclosureId) -> Result<bool, DisclosureRepositoryError>;
}

/// Fixture implementation for tests that never touch stored disclosures.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureDisclosureRepository;

#[async_trait]
impl DisclosureRepository for FixtureDisclosureRepository {
    async fn insert(
        &self,
        record: NewDisclosureRecord,
    ) -> Result<Disclosure, DisclosureRepositoryError> {
        let NewDisclosureRecord {
            member_id,
            draft,
            created_at,
        } = record;
        Ok(Disclosure {
            id: DisclosureId::new(1),
            member_id,
            gri_code: draft.gri_code,
            indicator: draft.indicator,
            category: draft.category,
            content: draft.content,
            created_at,
            updated_at: created_at,
        })
    }

    async fn find_by_id(
        &self,
        _id: DisclosureId,
    ) -> Result<Option<Disclosure>, DisclosureRepositoryError> {
        Ok(None)
    }

    async fn find_by_member_and_code(
        &self,
        _member_id: MemberId,
        _code: &GriCode,
    ) -> Result<Option<Disclosure>, DisclosureRepositoryError> {
        Ok(None)
    }

    async fn list_by_member(
        &self,
        _member_id: MemberId,
    ) -> Result<Vec<Disclosure>, DisclosureRepositoryError> {
        Ok(Vec::new())
    }

    async fn update(
        &self,
        _record: &Disclosure,
    ) -> Result<Option<Disclosure>, DisclosureRepositoryError> {
        Ok(None)
    }

    async fn delete(&self, _id: DisclosureId) -> Result<bool, DisclosureRepositoryError> {
        Ok(false)
    }
}
