//! Service entry-point: loads settings, prepares the database and serves the
//! REST API.

mod server;

use actix_web::web;
use color_eyre::eyre::{Context, Result, eyre};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use gri_service::inbound::http::health::HealthState;
use gri_service::inbound::http::identity::IdentityConfig;
use gri_service::outbound::persistence::{DbPool, run_pending_migrations_async};
use ortho_config::OrthoConfig;
use server::{ServerConfig, ServiceSettings, create_server};

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        ServiceSettings::load().map_err(|err| eyre!("failed to load settings: {err}"))?;
    let bind_addr = settings.bind_addr()?;
    let pool_config = settings.pool_config()?;
    let identity = IdentityConfig::new(settings.fallback_member());
    if let Some(member) = identity.fallback() {
        warn!(member_id = %member, "requests without X-MEMBER-ID will act as the fallback member");
    }

    if settings.run_migrations {
        let applied = run_pending_migrations_async(pool_config.database_url().to_owned())
            .await
            .wrap_err("failed to apply migrations")?;
        info!(applied, "database migrations applied");
    }

    let pool = DbPool::new(pool_config)
        .await
        .wrap_err("failed to build database pool")?;

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(bind_addr, pool).with_identity(identity);
    let server = create_server(health_state, config)?;
    info!(%bind_addr, "listening");
    server.await?;
    Ok(())
}
