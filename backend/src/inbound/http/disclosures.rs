//! GRI disclosure HTTP handlers.
//!
//! ```text
//! GET    /api/v1/gri
//! GET    /api/v1/gri/{griCode}
//! POST   /api/v1/gri
//! PUT    /api/v1/gri/{id}
//! DELETE /api/v1/gri/{id}
//! ```
//!
//! Every handler acts on behalf of the member named by the `X-MEMBER-ID`
//! header (see [`MemberIdentity`]).

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Disclosure, DisclosureDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::identity::MemberIdentity;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    invalid_field, lookup_gri_code, parse_disclosure_id, parse_gri_code,
};

/// Request payload for creating a disclosure.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDisclosureRequestBody {
    #[schema(example = "401-1", max_length = 10)]
    pub gri_code: String,
    #[schema(example = "New employee hires and employee turnover", max_length = 255)]
    pub indicator: String,
    #[schema(example = "Social", max_length = 255)]
    pub category: Option<String>,
    pub content: Option<String>,
}

/// Request payload for updating a disclosure. Only `content` is applied;
/// other fields are accepted and ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDisclosureRequestBody {
    pub content: Option<String>,
}

/// Disclosure as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DisclosureResponseBody {
    #[schema(example = 12)]
    pub id: i64,
    #[schema(example = "401-1")]
    pub gri_code: String,
    pub indicator: String,
    pub category: Option<String>,
    pub content: Option<String>,
    #[schema(example = 1)]
    pub member_id: i64,
    #[schema(format = "date-time")]
    pub created_at: String,
    #[schema(format = "date-time")]
    pub updated_at: String,
}

impl From<Disclosure> for DisclosureResponseBody {
    fn from(value: Disclosure) -> Self {
        Self {
            id: value.id.get(),
            gri_code: value.gri_code.into(),
            indicator: value.indicator,
            category: value.category,
            content: value.content,
            member_id: value.member_id.get(),
            created_at: value.created_at.to_rfc3339(),
            updated_at: value.updated_at.to_rfc3339(),
        }
    }
}

fn parse_create_body(body: CreateDisclosureRequestBody) -> ApiResult<DisclosureDraft> {
    let code = parse_gri_code(body.gri_code)?;
    DisclosureDraft::new(code, body.indicator, body.category, body.content)
        .map_err(|err| invalid_field(&err))
}

/// List the caller's disclosures in creation order.
#[utoipa::path(
    get,
    path = "/api/v1/gri",
    params(("X-MEMBER-ID" = Option<i64>, Header, description = "Caller member id")),
    responses(
        (status = 200, description = "Disclosures owned by the caller", body = [DisclosureResponseBody]),
        (status = 400, description = "Invalid member id", body = ErrorSchema),
        (status = 401, description = "Missing member id", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["gri"],
    operation_id = "listDisclosures"
)]
#[get("/gri")]
pub async fn list_disclosures(
    state: web::Data<HttpState>,
    identity: MemberIdentity,
) -> ApiResult<web::Json<Vec<DisclosureResponseBody>>> {
    let records = state
        .disclosures_query
        .list(identity.member_id())
        .await?;
    Ok(web::Json(records.into_iter().map(Into::into).collect()))
}

/// Fetch the caller's disclosure for a GRI code.
#[utoipa::path(
    get,
    path = "/api/v1/gri/{griCode}",
    params(
        ("griCode" = String, Path, description = "GRI indicator code"),
        ("X-MEMBER-ID" = Option<i64>, Header, description = "Caller member id")
    ),
    responses(
        (status = 200, description = "Disclosure", body = DisclosureResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Missing member id", body = ErrorSchema),
        (status = 404, description = "No disclosure for this code", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["gri"],
    operation_id = "getDisclosureByCode"
)]
#[get("/gri/{gri_code}")]
pub async fn get_disclosure(
    state: web::Data<HttpState>,
    identity: MemberIdentity,
    path: web::Path<String>,
) -> ApiResult<web::Json<DisclosureResponseBody>> {
    let code = lookup_gri_code(path.into_inner())?;
    let record = state
        .disclosures_query
        .get_by_code(identity.member_id(), &code)
        .await?;
    Ok(web::Json(record.into()))
}

/// Create a disclosure for the caller.
#[utoipa::path(
    post,
    path = "/api/v1/gri",
    params(("X-MEMBER-ID" = Option<i64>, Header, description = "Caller member id")),
    request_body = CreateDisclosureRequestBody,
    responses(
        (status = 201, description = "Disclosure created", body = DisclosureResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Missing member id", body = ErrorSchema),
        (status = 409, description = "Caller already holds this code", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["gri"],
    operation_id = "createDisclosure"
)]
#[post("/gri")]
pub async fn create_disclosure(
    state: web::Data<HttpState>,
    identity: MemberIdentity,
    payload: web::Json<CreateDisclosureRequestBody>,
) -> ApiResult<HttpResponse> {
    let draft = parse_create_body(payload.into_inner())?;
    let created = state
        .disclosures
        .create(identity.member_id(), draft)
        .await?;
    Ok(HttpResponse::Created().json(DisclosureResponseBody::from(created)))
}

/// Replace the content of one of the caller's disclosures.
#[utoipa::path(
    put,
    path = "/api/v1/gri/{id}",
    params(
        ("id" = i64, Path, description = "Disclosure id"),
        ("X-MEMBER-ID" = Option<i64>, Header, description = "Caller member id")
    ),
    request_body = UpdateDisclosureRequestBody,
    responses(
        (status = 200, description = "Disclosure updated", body = DisclosureResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Missing member id", body = ErrorSchema),
        (status = 403, description = "Not the owner, or no such disclosure", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["gri"],
    operation_id = "updateDisclosure"
)]
#[put("/gri/{id}")]
pub async fn update_disclosure(
    state: web::Data<HttpState>,
    identity: MemberIdentity,
    path: web::Path<String>,
    payload: web::Json<UpdateDisclosureRequestBody>,
) -> ApiResult<web::Json<DisclosureResponseBody>> {
    let id = parse_disclosure_id(&path.into_inner())?;
    let updated = state
        .disclosures
        .update_content(identity.member_id(), id, payload.into_inner().content)
        .await?;
    Ok(web::Json(updated.into()))
}

/// Delete one of the caller's disclosures.
#[utoipa::path(
    delete,
    path = "/api/v1/gri/{id}",
    params(
        ("id" = i64, Path, description = "Disclosure id"),
        ("X-MEMBER-ID" = Option<i64>, Header, description = "Caller member id")
    ),
    responses(
        (status = 200, description = "Deletion confirmation", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Missing member id", body = ErrorSchema),
        (status = 403, description = "Not the owner, or no such disclosure", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["gri"],
    operation_id = "deleteDisclosure"
)]
#[delete("/gri/{id}")]
pub async fn delete_disclosure(
    state: web::Data<HttpState>,
    identity: MemberIdentity,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_disclosure_id(&path.into_inner())?;
    state.disclosures.delete(identity.member_id(), id).await?;
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(format!("GRI disclosure {id} deleted")))
}

#[cfg(test)]
#[path = "disclosures_tests.rs"]
mod tests;
