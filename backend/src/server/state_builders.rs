//! Builders wiring repositories into the HTTP state.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};

use gri_service::domain::ports::DisclosureRepository;
use gri_service::domain::{DisclosureService, ProgressService};
use gri_service::inbound::http::state::HttpState;
use gri_service::outbound::persistence::{DbPool, DieselDisclosureRepository};

/// Build the HTTP state over any disclosure repository.
///
/// One [`DisclosureService`] backs both the command and query ports; the
/// progress report shares the same repository.
pub(super) fn build_http_state_with<R>(repo: Arc<R>, clock: Arc<dyn Clock>) -> web::Data<HttpState>
where
    R: DisclosureRepository + 'static,
{
    let disclosures = Arc::new(DisclosureService::new(repo.clone(), clock));
    let progress = Arc::new(ProgressService::new(repo));
    web::Data::new(HttpState::new(disclosures.clone(), disclosures, progress))
}

/// Build the HTTP state backed by PostgreSQL.
pub(super) fn build_http_state(pool: &DbPool) -> web::Data<HttpState> {
    build_http_state_with(
        Arc::new(DieselDisclosureRepository::new(pool.clone())),
        Arc::new(DefaultClock),
    )
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    use super::*;
    use gri_service::domain::{DisclosureDraft, GriCode, MemberId};
    use gri_service::test_support::{InMemoryDisclosureRepository, MutableClock};

    #[rstest]
    #[tokio::test]
    async fn command_query_and_progress_share_one_store() {
        let repo = Arc::new(InMemoryDisclosureRepository::new());
        let clock = Arc::new(MutableClock::new(
            Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).single().expect("timestamp"),
        ));
        let state = build_http_state_with(repo, clock);
        let member = MemberId::new(7);
        let code = GriCode::new("2-1").expect("code");
        let draft = DisclosureDraft::new(
            code.clone(),
            "Organizational details".to_owned(),
            None,
            Some("Registered in Seoul".to_owned()),
        )
        .expect("draft");

        state.disclosures.create(member, draft).await.expect("create");

        let fetched = state
            .disclosures_query
            .get_by_code(member, &code)
            .await
            .expect("get");
        assert_eq!(fetched.member_id, member);
        let progress = state.progress.progress(member).await.expect("progress");
        assert_eq!(progress.completed, 1);
    }
}
