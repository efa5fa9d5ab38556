//! Progress report over a member's disclosures.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::disclosure_service::map_repository_error;
use crate::domain::ports::{DisclosureRepository, ProgressQuery};
use crate::domain::{Error, GriProgress, MemberId};

/// Progress service implementing [`ProgressQuery`].
#[derive(Clone)]
pub struct ProgressService<R> {
    repo: Arc<R>,
}

impl<R> ProgressService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> ProgressQuery for ProgressService<R>
where
    R: DisclosureRepository,
{
    async fn progress(&self, member: MemberId) -> Result<GriProgress, Error> {
        let records = self
            .repo
            .list_by_member(member)
            .await
            .map_err(map_repository_error)?;
        let progress = GriProgress::from_records(&records);
        info!(
            member_id = %member,
            total = progress.total,
            completed = progress.completed,
            incomplete = progress.incomplete,
            rate = progress.rate,
            "computed disclosure progress"
        );
        Ok(progress)
    }
}
