//! PostgreSQL persistence adapters using Diesel.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Row structs (`models`) and table definitions (`schema`) stay
//! private to this module.
//!
//! # Example
//!
//! ```no_run
//! use gri_service::outbound::persistence::{DbPool, DieselDisclosureRepository, PoolConfig};
//!
//! # async fn example() -> Result<(), gri_service::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/gri")).await?;
//! let _repo = DieselDisclosureRepository::new(pool);
//! # Ok(())
//! # }
//! ```

mod diesel_basic_error_mapping;
mod diesel_disclosure_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_disclosure_repository::DieselDisclosureRepository;
pub use migrations::{MigrationError, run_pending_migrations, run_pending_migrations_async};
pub use pool::{DEFAULT_CONNECTION_TIMEOUT, DEFAULT_MAX_SIZE, DbPool, PoolConfig, PoolError};
