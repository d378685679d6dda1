//! Builders wiring the registration service to a repository adapter.

use std::sync::Arc;

use actix_web::web;
use tracing::warn;

use user_registry::domain::UserRegistrationService;
use user_registry::domain::ports::UserRegistration;
use user_registry::inbound::http::state::HttpState;
use user_registry::outbound::memory::InMemoryUserRepository;
use user_registry::outbound::persistence::{DbPool, DieselUserRepository};

/// Choose the repository: Diesel when a pool is configured, memory otherwise.
fn build_registration(pool: Option<&DbPool>) -> Arc<dyn UserRegistration> {
    match pool {
        Some(pool) => Arc::new(UserRegistrationService::new(Arc::new(
            DieselUserRepository::new(pool.clone()),
        ))),
        None => {
            warn!("no database configured; registered users are kept in memory");
            Arc::new(UserRegistrationService::new(Arc::new(
                InMemoryUserRepository::new(),
            )))
        }
    }
}

pub(super) fn build_http_state(pool: Option<&DbPool>) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(build_registration(pool)))
}
