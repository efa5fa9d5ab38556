//! HTTP server configuration object.

use std::net::SocketAddr;

use gri_service::inbound::http::identity::IdentityConfig;
use gri_service::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
    pub(crate) identity: IdentityConfig,
}

impl ServerConfig {
    /// Configuration that rejects requests without an identity header.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool) -> Self {
        Self {
            bind_addr,
            db_pool,
            identity: IdentityConfig::strict(),
        }
    }

    /// Replace the identity policy, e.g. to enable a fallback member.
    #[must_use]
    pub fn with_identity(mut self, identity: IdentityConfig) -> Self {
        self.identity = identity;
        self
    }
}
