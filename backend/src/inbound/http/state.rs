//! Shared HTTP adapter state.
//!
//! Handlers receive this via `web::Data` and only see domain ports, so they
//! can be exercised with in-memory or mocked implementations.

use std::sync::Arc;

use crate::domain::ports::UserRegistration;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub registration: Arc<dyn UserRegistration>,
}

impl HttpState {
    /// Construct state around a registration port.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use user_registry::domain::UserRegistrationService;
    /// use user_registry::inbound::http::state::HttpState;
    /// use user_registry::outbound::memory::InMemoryUserRepository;
    ///
    /// let service = UserRegistrationService::new(Arc::new(InMemoryUserRepository::new()));
    /// let _state = HttpState::new(Arc::new(service));
    /// ```
    pub fn new(registration: Arc<dyn UserRegistration>) -> Self {
        Self { registration }
    }
}
