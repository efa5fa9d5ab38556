//! GRI disclosure service library.
//!
//! The crate follows a ports-and-adapters layout: [`domain`] holds the
//! disclosure model, services and ports, [`inbound`] the HTTP adapter and
//! [`outbound`] the PostgreSQL adapter.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
