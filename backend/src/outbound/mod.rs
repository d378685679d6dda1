//! Outbound adapters implementing domain ports.
//!
//! - [`persistence`]: PostgreSQL via Diesel.
//! - [`memory`]: process-local store for development runs and tests.

pub mod memory;
pub mod persistence;
