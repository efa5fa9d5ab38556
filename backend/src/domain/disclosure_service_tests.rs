//! Tests for the disclosure service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::{FixtureDisclosureRepository, MockDisclosureRepository};
use crate::test_support::{InMemoryDisclosureRepository, MutableClock};

fn member(raw: i64) -> MemberId {
    MemberId::new(raw)
}

fn code(raw: &str) -> GriCode {
    GriCode::new(raw).expect("valid code")
}

fn draft(raw_code: &str, content: Option<&str>) -> DisclosureDraft {
    DisclosureDraft::new(
        code(raw_code),
        "New employee hires and employee turnover",
        Some("Social".to_owned()),
        content.map(str::to_owned),
    )
    .expect("valid draft")
}

fn start() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-03-01T09:00:00Z")
        .expect("RFC3339 fixture timestamp")
        .with_timezone(&Utc)
}

struct Harness {
    repo: Arc<InMemoryDisclosureRepository>,
    clock: Arc<MutableClock>,
    service: DisclosureService<InMemoryDisclosureRepository>,
}

#[fixture]
fn harness() -> Harness {
    let repo = Arc::new(InMemoryDisclosureRepository::new());
    let clock = Arc::new(MutableClock::new(start()));
    let service = DisclosureService::new(repo.clone(), clock.clone());
    Harness {
        repo,
        clock,
        service,
    }
}

#[rstest]
#[tokio::test]
async fn create_then_get_by_code_returns_matching_record(harness: Harness) {
    let created = harness
        .service
        .create(member(1), draft("401-1", Some("12 hires")))
        .await
        .expect("create succeeds");

    let fetched = harness
        .service
        .get_by_code(member(1), &code("401-1"))
        .await
        .expect("get succeeds");

    assert_eq!(fetched, created);
    assert_eq!(fetched.member_id, member(1));
    assert_eq!(fetched.indicator, "New employee hires and employee turnover");
    assert_eq!(fetched.category.as_deref(), Some("Social"));
    assert_eq!(fetched.content.as_deref(), Some("12 hires"));
    assert_eq!(fetched.created_at, start());
    assert_eq!(fetched.updated_at, start());
}

#[rstest]
#[tokio::test]
async fn duplicate_create_is_rejected_and_original_kept(harness: Harness) {
    harness
        .service
        .create(member(1), draft("401-1", Some("original")))
        .await
        .expect("first create succeeds");

    let err = harness
        .service
        .create(member(1), draft("401-1", Some("replacement")))
        .await
        .expect_err("duplicate rejected");

    assert_eq!(err.code(), ErrorCode::DuplicateDisclosure);
    let rows = harness.repo.snapshot();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].content.as_deref(), Some("original"));
}

#[rstest]
#[tokio::test]
async fn same_code_is_allowed_for_different_members(harness: Harness) {
    harness
        .service
        .create(member(1), draft("401-1", None))
        .await
        .expect("member 1 create succeeds");
    harness
        .service
        .create(member(2), draft("401-1", None))
        .await
        .expect("member 2 create succeeds");

    assert_eq!(harness.repo.snapshot().len(), 2);
}

#[rstest]
#[tokio::test]
async fn insert_race_maps_unique_violation_to_duplicate() {
    let mut repo = MockDisclosureRepository::new();
    repo.expect_find_by_member_and_code()
        .times(1)
        .return_once(|_, _| Ok(None));
    repo.expect_insert()
        .times(1)
        .return_once(|_| Err(DisclosureRepositoryError::duplicate_code("401-1")));

    let service = DisclosureService::new(Arc::new(repo), Arc::new(DefaultClock));
    let err = service
        .create(member(1), draft("401-1", None))
        .await
        .expect_err("race surfaces as duplicate");

    assert_eq!(err.code(), ErrorCode::DuplicateDisclosure);
}

#[rstest]
#[tokio::test]
async fn owner_update_replaces_content_and_advances_updated_at(harness: Harness) {
    let created = harness
        .service
        .create(member(1), draft("2-7", None))
        .await
        .expect("create succeeds");
    harness.clock.advance_seconds(90);

    let updated = harness
        .service
        .update_content(member(1), created.id, Some("1,204 employees".to_owned()))
        .await
        .expect("update succeeds");

    assert_eq!(updated.content.as_deref(), Some("1,204 employees"));
    assert!(updated.updated_at > created.updated_at);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.gri_code, created.gri_code);
}

#[rstest]
#[case::other_member(2, false)]
#[case::missing_record(1, true)]
#[tokio::test]
async fn update_without_ownership_is_unauthorised_and_leaves_record(
    harness: Harness,
    #[case] caller: i64,
    #[case] target_missing: bool,
) {
    let created = harness
        .service
        .create(member(1), draft("2-7", Some("before")))
        .await
        .expect("create succeeds");
    let target = if target_missing {
        DisclosureId::new(created.id.get() + 100)
    } else {
        created.id
    };

    let err = harness
        .service
        .update_content(member(caller), target, Some("after".to_owned()))
        .await
        .expect_err("update rejected");

    assert_eq!(err.code(), ErrorCode::UnauthorizedAccess);
    assert_eq!(harness.repo.snapshot()[0].content.as_deref(), Some("before"));
}

#[rstest]
#[tokio::test]
async fn owner_delete_removes_record(harness: Harness) {
    let created = harness
        .service
        .create(member(1), draft("305-1", None))
        .await
        .expect("create succeeds");

    harness
        .service
        .delete(member(1), created.id)
        .await
        .expect("delete succeeds");

    let err = harness
        .service
        .get_by_code(member(1), &code("305-1"))
        .await
        .expect_err("record gone");
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn non_owner_delete_is_unauthorised_and_record_remains(harness: Harness) {
    let created = harness
        .service
        .create(member(1), draft("305-1", None))
        .await
        .expect("create succeeds");

    let err = harness
        .service
        .delete(member(2), created.id)
        .await
        .expect_err("delete rejected");

    assert_eq!(err.code(), ErrorCode::UnauthorizedAccess);
    assert_eq!(harness.repo.snapshot().len(), 1);
}

#[rstest]
#[tokio::test]
async fn list_is_scoped_to_member_in_insertion_order(harness: Harness) {
    for raw in ["2-1", "2-2", "2-3"] {
        harness
            .service
            .create(member(1), draft(raw, None))
            .await
            .expect("member 1 create succeeds");
    }
    harness
        .service
        .create(member(2), draft("2-1", None))
        .await
        .expect("member 2 create succeeds");

    let listed = harness.service.list(member(1)).await.expect("list");

    let codes: Vec<&str> = listed.iter().map(|row| row.gri_code.as_ref()).collect();
    assert_eq!(codes, ["2-1", "2-2", "2-3"]);
    assert!(listed.iter().all(|row| row.member_id == member(1)));
}

#[rstest]
#[tokio::test]
async fn get_by_code_for_other_member_is_not_found(harness: Harness) {
    harness
        .service
        .create(member(1), draft("401-1", None))
        .await
        .expect("create succeeds");

    let err = harness
        .service
        .get_by_code(member(2), &code("401-1"))
        .await
        .expect_err("scoped to caller");
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[case(DisclosureRepositoryError::connection("refused"), ErrorCode::ServiceUnavailable)]
#[case(DisclosureRepositoryError::query("syntax"), ErrorCode::InternalError)]
#[tokio::test]
async fn repository_failures_map_to_domain_codes(
    #[case] failure: DisclosureRepositoryError,
    #[case] expected: ErrorCode,
) {
    let mut repo = MockDisclosureRepository::new();
    repo.expect_list_by_member()
        .times(1)
        .return_once(move |_| Err(failure));

    let service = DisclosureService::new(Arc::new(repo), Arc::new(DefaultClock));
    let err = service.list(member(1)).await.expect_err("failure surfaces");

    assert_eq!(err.code(), expected);
}

#[rstest]
#[tokio::test]
async fn update_on_empty_store_is_unauthorised() {
    let service = DisclosureService::new(
        Arc::new(FixtureDisclosureRepository),
        Arc::new(DefaultClock),
    );
    let err = service
        .update_content(member(1), DisclosureId::new(1), None)
        .await
        .expect_err("fixture store holds nothing");
    assert_eq!(err.code(), ErrorCode::UnauthorizedAccess);
}

#[rstest]
#[tokio::test]
async fn update_of_row_deleted_mid_flight_is_unauthorised() {
    let stored = Disclosure {
        id: DisclosureId::new(5),
        member_id: member(1),
        gri_code: code("403-9"),
        indicator: "Work-related injuries".to_owned(),
        category: None,
        content: None,
        created_at: start(),
        updated_at: start(),
    };
    let mut repo = MockDisclosureRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(stored)));
    repo.expect_update().times(1).return_once(|_| Ok(None));

    let service = DisclosureService::new(Arc::new(repo), Arc::new(DefaultClock));
    let err = service
        .update_content(member(1), DisclosureId::new(5), Some("none".to_owned()))
        .await
        .expect_err("row vanished");
    assert_eq!(err.code(), ErrorCode::UnauthorizedAccess);
}
