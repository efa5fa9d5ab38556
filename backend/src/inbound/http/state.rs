//! Shared HTTP adapter state.
//!
//! Handlers take this via `web::Data` so they only depend on the driving
//! ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{DisclosureCommand, DisclosureQuery, ProgressQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub disclosures: Arc<dyn DisclosureCommand>,
    pub disclosures_query: Arc<dyn DisclosureQuery>,
    pub progress: Arc<dyn ProgressQuery>,
}

impl HttpState {
    /// Bundle the port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use gri_service::domain::ports::{FixtureDisclosureRepository, FixtureProgressQuery};
    /// use gri_service::domain::DisclosureService;
    /// use gri_service::inbound::http::state::HttpState;
    ///
    /// let service = Arc::new(DisclosureService::new(
    ///     Arc::new(FixtureDisclosureRepository),
    ///     Arc::new(mockable::DefaultClock),
    /// ));
    /// let _state = HttpState::new(service.clone(), service, Arc::new(FixtureProgressQuery));
    /// ```
    pub fn new(
        disclosures: Arc<dyn DisclosureCommand>,
        disclosures_query: Arc<dyn DisclosureQuery>,
        progress: Arc<dyn ProgressQuery>,
    ) -> Self {
        Self {
            disclosures,
            disclosures_query,
            progress,
        }
    }
}
