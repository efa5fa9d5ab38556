//! Service settings loaded via OrthoConfig.
//!
//! Values layer CLI flags over `GRI_*` environment variables over an
//! optional config file. Unset optional values fall back to the defaults
//! exposed by the accessors.

use std::net::{SocketAddr, ToSocketAddrs};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use gri_service::domain::MemberId;
use gri_service::outbound::persistence::{
    DEFAULT_CONNECTION_TIMEOUT, DEFAULT_MAX_SIZE, PoolConfig,
};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Startup configuration problems.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("database_url is required (set GRI_DATABASE_URL)")]
    MissingDatabaseUrl,
    #[error("invalid bind address {addr}: {reason}")]
    InvalidBindAddress { addr: String, reason: String },
}

/// Runtime settings for the disclosure service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "GRI")]
pub struct ServiceSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// PostgreSQL connection URL.
    pub database_url: Option<String>,
    /// Upper bound on pooled connections.
    pub pool_max_size: Option<u32>,
    /// Idle connections the pool keeps open.
    pub pool_min_idle: Option<u32>,
    /// Seconds to wait for a pooled connection.
    pub pool_connection_timeout_secs: Option<u64>,
    /// Member used when a request carries no `X-MEMBER-ID` header.
    pub fallback_member_id: Option<i64>,
    /// Apply pending schema migrations before serving.
    #[ortho_config(default = false)]
    pub run_migrations: bool,
}

impl ServiceSettings {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_MAX_SIZE)
    }

    pub fn pool_connection_timeout(&self) -> Duration {
        self.pool_connection_timeout_secs
            .map_or(DEFAULT_CONNECTION_TIMEOUT, Duration::from_secs)
    }

    /// Resolve the configured host and port to a socket address.
    ///
    /// # Errors
    /// [`SettingsError::InvalidBindAddress`] when the pair does not resolve.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let invalid = |reason: String| SettingsError::InvalidBindAddress {
            addr: format!("{}:{}", self.host(), self.port()),
            reason,
        };
        (self.host(), self.port())
            .to_socket_addrs()
            .map_err(|err| invalid(err.to_string()))?
            .next()
            .ok_or_else(|| invalid("no addresses resolved".to_owned()))
    }

    /// Build the connection pool configuration.
    ///
    /// # Errors
    /// [`SettingsError::MissingDatabaseUrl`] when no URL is configured.
    pub fn pool_config(&self) -> Result<PoolConfig, SettingsError> {
        let url = self
            .database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or(SettingsError::MissingDatabaseUrl)?;
        Ok(PoolConfig::new(url)
            .with_max_size(self.pool_max_size())
            .with_min_idle(self.pool_min_idle)
            .with_connection_timeout(self.pool_connection_timeout()))
    }

    /// Fallback member, if configured.
    pub fn fallback_member(&self) -> Option<MemberId> {
        self.fallback_member_id.map(MemberId::new)
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    use super::*;

    const VARS: [&str; 8] = [
        "GRI_HOST",
        "GRI_PORT",
        "GRI_DATABASE_URL",
        "GRI_POOL_MAX_SIZE",
        "GRI_POOL_MIN_IDLE",
        "GRI_POOL_CONNECTION_TIMEOUT_SECS",
        "GRI_FALLBACK_MEMBER_ID",
        "GRI_RUN_MIGRATIONS",
    ];

    fn load_with(overrides: &[(&str, &str)]) -> ServiceSettings {
        let _guard = lock_env(VARS.map(|name| {
            let value = overrides
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_owned());
            (name, value)
        }));
        ServiceSettings::load_from_iter([OsString::from("gri-service")])
            .expect("settings should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let settings = load_with(&[]);
        assert_eq!(settings.host(), DEFAULT_HOST);
        assert_eq!(settings.port(), DEFAULT_PORT);
        assert_eq!(settings.pool_max_size(), DEFAULT_MAX_SIZE);
        assert_eq!(settings.pool_connection_timeout(), DEFAULT_CONNECTION_TIMEOUT);
        assert!(!settings.run_migrations);
        assert!(settings.fallback_member().is_none());
        assert!(matches!(
            settings.pool_config(),
            Err(SettingsError::MissingDatabaseUrl)
        ));
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let settings = load_with(&[
            ("GRI_HOST", "127.0.0.1"),
            ("GRI_PORT", "9090"),
            ("GRI_DATABASE_URL", "postgres://gri@db/gri"),
            ("GRI_POOL_MAX_SIZE", "3"),
            ("GRI_POOL_MIN_IDLE", "1"),
            ("GRI_POOL_CONNECTION_TIMEOUT_SECS", "4"),
            ("GRI_FALLBACK_MEMBER_ID", "1"),
            ("GRI_RUN_MIGRATIONS", "true"),
        ]);
        assert_eq!(
            settings.bind_addr().expect("bind addr"),
            "127.0.0.1:9090".parse::<SocketAddr>().expect("socket addr")
        );
        let pool = settings.pool_config().expect("pool config");
        assert_eq!(pool.database_url(), "postgres://gri@db/gri");
        assert_eq!(pool.max_size(), 3);
        assert_eq!(pool.min_idle(), Some(1));
        assert_eq!(pool.connection_timeout(), Duration::from_secs(4));
        assert_eq!(
            settings.fallback_member().map(MemberId::get),
            Some(1)
        );
        assert!(settings.run_migrations);
    }

    #[rstest]
    #[case("0", 0)]
    #[case("-4", -4)]
    fn any_integer_fallback_is_accepted(#[case] raw: &str, #[case] expected: i64) {
        let settings = load_with(&[("GRI_FALLBACK_MEMBER_ID", raw)]);
        assert_eq!(settings.fallback_member(), Some(MemberId::new(expected)));
    }

    #[rstest]
    fn blank_database_url_counts_as_missing() {
        let settings = load_with(&[("GRI_DATABASE_URL", "  ")]);
        assert!(matches!(
            settings.pool_config(),
            Err(SettingsError::MissingDatabaseUrl)
        ));
    }
}
