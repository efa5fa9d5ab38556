//! Driving port for the completion progress report.

use async_trait::async_trait;

use crate::domain::{Error, GriProgress, MemberId};

/// Driving port reporting how far a member is through the GRI indicator set.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProgressQuery: Send + Sync {
    async fn progress(&self, member: MemberId) -> Result<GriProgress, Error>;
}

/// Fixture query reporting a member with nothing completed.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureProgressQuery;

#[async_trait]
impl ProgressQuery for FixtureProgressQuery {
    async fn progress(&self, _member: MemberId) -> Result<GriProgress, Error> {
        Ok(GriProgress::from_completed(0))
    }
}
