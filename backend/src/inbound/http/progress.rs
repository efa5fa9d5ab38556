//! Internal progress report endpoint.
//!
//! ```text
//! GET /api/v1/internal/gri/progress
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::GriProgress;
use crate::inbound::http::ApiResult;
use crate::inbound::http::identity::MemberIdentity;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Completion figures for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgressResponseBody {
    #[schema(example = 119)]
    pub total_count: i64,
    #[schema(example = 60)]
    pub completed_count: i64,
    /// May be negative when more disclosures are complete than the total.
    #[schema(example = 59)]
    pub incomplete_count: i64,
    /// Whole-number percentage, truncated.
    #[schema(example = 50)]
    pub completed_rate: i64,
}

impl From<GriProgress> for ProgressResponseBody {
    fn from(value: GriProgress) -> Self {
        Self {
            total_count: value.total,
            completed_count: value.completed,
            incomplete_count: value.incomplete,
            completed_rate: value.rate,
        }
    }
}

/// Report how many of the GRI disclosures the caller has completed.
#[utoipa::path(
    get,
    path = "/api/v1/internal/gri/progress",
    params(("X-MEMBER-ID" = Option<i64>, Header, description = "Caller member id")),
    responses(
        (status = 200, description = "Progress report", body = ProgressResponseBody),
        (status = 400, description = "Invalid member id", body = ErrorSchema),
        (status = 401, description = "Missing member id", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["gri-internal"],
    operation_id = "getDisclosureProgress"
)]
#[get("/internal/gri/progress")]
pub async fn get_progress(
    state: web::Data<HttpState>,
    identity: MemberIdentity,
) -> ApiResult<web::Json<ProgressResponseBody>> {
    let progress = state.progress.progress(identity.member_id()).await?;
    Ok(web::Json(progress.into()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use rstest::rstest;

    use super::*;
    use crate::domain::ports::{FixtureDisclosureRepository, MockProgressQuery};
    use crate::domain::{DisclosureService, Error, MemberId};
    use crate::inbound::http::identity::{IdentityConfig, MEMBER_ID_HEADER};

    fn state_with(progress: MockProgressQuery) -> HttpState {
        let disclosures = Arc::new(DisclosureService::new(
            Arc::new(FixtureDisclosureRepository),
            Arc::new(mockable::DefaultClock),
        ));
        HttpState::new(disclosures.clone(), disclosures, Arc::new(progress))
    }

    #[rstest]
    #[actix_web::test]
    async fn reports_progress_for_header_member() {
        let mut progress = MockProgressQuery::new();
        progress
            .expect_progress()
            .withf(|member| member.get() == 9)
            .times(1)
            .return_once(|_| Ok(GriProgress::from_completed(120)));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(progress)))
                .app_data(IdentityConfig::strict())
                .service(web::scope("/api/v1").service(get_progress)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/internal/gri/progress")
            .insert_header((MEMBER_ID_HEADER, "9"))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body,
            serde_json::json!({
                "totalCount": 119,
                "completedCount": 120,
                "incompleteCount": -1,
                "completedRate": 100,
            })
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn outage_is_service_unavailable() {
        let mut progress = MockProgressQuery::new();
        progress
            .expect_progress()
            .return_once(|_| Err(Error::service_unavailable("database down")));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(progress)))
                .app_data(IdentityConfig::with_fallback(
                    MemberId::new(1),
                ))
                .service(web::scope("/api/v1").service(get_progress)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/internal/gri/progress")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
