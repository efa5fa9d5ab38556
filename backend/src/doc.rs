//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint of the inbound layer together
//! with the request/response bodies and the error schema wrappers. It backs
//! Swagger UI in debug builds and the `openapi-dump` binary.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::inbound::http::disclosures::{
    CreateDisclosureRequestBody, DisclosureResponseBody, UpdateDisclosureRequestBody,
};
use crate::inbound::http::identity::MEMBER_ID_HEADER;
use crate::inbound::http::progress::ProgressResponseBody;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// Adds the member id header as an API key scheme.
struct MemberHeaderAddon;

impl Modify for MemberHeaderAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "MemberId",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                MEMBER_ID_HEADER,
                "Numeric id of the member the request acts for.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&MemberHeaderAddon),
    info(
        title = "GRI disclosure service API",
        description = "Per-member GRI sustainability disclosures and completion progress."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("MemberId" = [])),
    paths(
        crate::inbound::http::disclosures::list_disclosures,
        crate::inbound::http::disclosures::get_disclosure,
        crate::inbound::http::disclosures::create_disclosure,
        crate::inbound::http::disclosures::update_disclosure,
        crate::inbound::http::disclosures::delete_disclosure,
        crate::inbound::http::progress::get_progress,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CreateDisclosureRequestBody,
        UpdateDisclosureRequestBody,
        DisclosureResponseBody,
        ProgressResponseBody,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "gri", description = "Disclosure management for the calling member"),
        (name = "gri-internal", description = "Internal reporting endpoints"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use utoipa::OpenApi;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    use super::*;

    // utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "domain.Error";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn error_schema_has_wire_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema");

        assert_object_schema_has_field(error_schema, "errorCode");
        assert_object_schema_has_field(error_schema, "message");
        assert_object_schema_has_field(error_schema, "path");
    }

    #[test]
    fn every_endpoint_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/v1/gri",
            "/api/v1/gri/{griCode}",
            "/api/v1/gri/{id}",
            "/api/v1/internal/gri/progress",
            "/health/ready",
            "/health/live",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn member_header_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let schemes = doc
            .components
            .as_ref()
            .map(|c| &c.security_schemes)
            .expect("security schemes");
        assert!(schemes.contains_key("MemberId"));
    }
}
