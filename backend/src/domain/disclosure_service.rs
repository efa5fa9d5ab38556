//! Disclosure domain service.
//!
//! Implements the disclosure command and query driving ports over a
//! [`DisclosureRepository`]. Ownership is checked in one place,
//! [`DisclosureService::owned_record`], shared by update and delete.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{info, warn};

use crate::domain::ports::{
    DisclosureCommand, DisclosureQuery, DisclosureRepository, DisclosureRepositoryError,
    NewDisclosureRecord,
};
use crate::domain::{Disclosure, DisclosureDraft, DisclosureId, Error, GriCode, MemberId};

pub(crate) fn map_repository_error(error: DisclosureRepositoryError) -> Error {
    match error {
        DisclosureRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("disclosure repository unavailable: {message}"))
        }
        DisclosureRepositoryError::Query { message } => {
            Error::internal(format!("disclosure repository error: {message}"))
        }
        DisclosureRepositoryError::DuplicateCode { code } => duplicate(&code),
    }
}

fn duplicate(code: &str) -> Error {
    Error::duplicate_disclosure(format!("a disclosure for GRI code {code} already exists"))
}

fn unauthorized(id: DisclosureId) -> Error {
    Error::unauthorized_access(format!("no access to disclosure {id}"))
}

/// Disclosure service implementing [`DisclosureCommand`] and
/// [`DisclosureQuery`].
#[derive(Clone)]
pub struct DisclosureService<R> {
    repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> DisclosureService<R> {
    /// Create a service over `repo`, stamping records with `clock`.
    pub fn new(repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}

impl<R> DisclosureService<R>
where
    R: DisclosureRepository,
{
    /// Load `id` if it exists and belongs to `member`.
    ///
    /// A missing record and another member's record fail identically so the
    /// caller cannot probe for ids it does not own.
    async fn owned_record(&self, member: MemberId, id: DisclosureId) -> Result<Disclosure, Error> {
        let record = self
            .repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?;
        match record {
            Some(record) if record.is_owned_by(member) => Ok(record),
            Some(record) => {
                warn!(
                    disclosure_id = %id,
                    member_id = %member,
                    owner_id = %record.member_id,
                    "member attempted to access a disclosure it does not own"
                );
                Err(unauthorized(id))
            }
            None => {
                warn!(disclosure_id = %id, member_id = %member, "disclosure not found");
                Err(unauthorized(id))
            }
        }
    }
}

#[async_trait]
impl<R> DisclosureCommand for DisclosureService<R>
where
    R: DisclosureRepository,
{
    async fn create(&self, member: MemberId, draft: DisclosureDraft) -> Result<Disclosure, Error> {
        let existing = self
            .repo
            .find_by_member_and_code(member, &draft.gri_code)
            .await
            .map_err(map_repository_error)?;
        if existing.is_some() {
            warn!(member_id = %member, gri_code = %draft.gri_code, "duplicate disclosure rejected");
            return Err(duplicate(draft.gri_code.as_ref()));
        }

        let record = NewDisclosureRecord {
            member_id: member,
            draft,
            created_at: self.clock.utc(),
        };
        let stored = self.repo.insert(record).await.map_err(|err| {
            if matches!(err, DisclosureRepositoryError::DuplicateCode { .. }) {
                warn!(member_id = %member, error = %err, "concurrent duplicate disclosure rejected");
            }
            map_repository_error(err)
        })?;
        info!(
            disclosure_id = %stored.id,
            member_id = %member,
            gri_code = %stored.gri_code,
            "disclosure created"
        );
        Ok(stored)
    }

    async fn update_content(
        &self,
        member: MemberId,
        id: DisclosureId,
        content: Option<String>,
    ) -> Result<Disclosure, Error> {
        let mut record = self.owned_record(member, id).await?;
        record.content = content;
        record.updated_at = self.clock.utc();

        self.repo
            .update(&record)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| unauthorized(id))
    }

    async fn delete(&self, member: MemberId, id: DisclosureId) -> Result<(), Error> {
        let record = self.owned_record(member, id).await?;
        let removed = self
            .repo
            .delete(record.id)
            .await
            .map_err(map_repository_error)?;
        if !removed {
            return Err(unauthorized(id));
        }
        info!(disclosure_id = %id, member_id = %member, "disclosure deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> DisclosureQuery for DisclosureService<R>
where
    R: DisclosureRepository,
{
    async fn list(&self, member: MemberId) -> Result<Vec<Disclosure>, Error> {
        self.repo
            .list_by_member(member)
            .await
            .map_err(map_repository_error)
    }

    async fn get_by_code(&self, member: MemberId, code: &GriCode) -> Result<Disclosure, Error> {
        self.repo
            .find_by_member_and_code(member, code)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("no disclosure found for GRI code {code}")))
    }
}

#[cfg(test)]
#[path = "disclosure_service_tests.rs"]
mod tests;
