//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed disclosure storage via Diesel.

pub mod persistence;
