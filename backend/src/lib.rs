//! User registration service library.
//!
//! Hexagonal layout: `domain` owns the registration rule and its ports,
//! `inbound::http` exposes it over Actix Web, and `outbound` provides the
//! PostgreSQL and in-memory repositories.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), forbid(clippy::expect_used))]

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
