//! HTTP inbound adapter exposing the REST endpoints.

pub mod disclosures;
pub mod error;
pub mod health;
pub mod identity;
pub mod progress;
pub mod schemas;
pub mod state;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Mount prefix for every API route.
pub const API_PREFIX: &str = "/api/v1";

/// Register the API routes and body error handling on `cfg`.
///
/// The caller supplies `web::Data<HttpState>` and, optionally, an
/// [`identity::IdentityConfig`] as app data.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use gri_service::inbound::http::configure_api;
///
/// let _app = App::new().configure(configure_api);
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(API_PREFIX)
            .app_data(web::JsonConfig::default().error_handler(validation::json_error_handler))
            .service(disclosures::list_disclosures)
            .service(disclosures::create_disclosure)
            .service(disclosures::get_disclosure)
            .service(disclosures::update_disclosure)
            .service(disclosures::delete_disclosure)
            .service(progress::get_progress),
    );
}
