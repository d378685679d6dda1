//! Driving port for user registration.
//!
//! Inbound adapters depend on this trait rather than on the concrete service
//! so handlers can be exercised against doubles.

use async_trait::async_trait;

use crate::domain::{NewUser, User, UserId};

use super::UserPersistenceError;

/// Outcome of a failed registration or lookup.
///
/// Callers must handle [`RegistrationError::DuplicateEmail`] explicitly;
/// persistence failures are carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    /// A user with the candidate email already exists.
    #[error("Email already registered")]
    DuplicateEmail,
    /// No user has the requested identifier.
    #[error("user {id} not found")]
    NotFound { id: UserId },
    /// The store failed to read or write.
    #[error(transparent)]
    Persistence(#[from] UserPersistenceError),
}

/// Domain use-case port for creating and reading users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRegistration: Send + Sync {
    /// Create a user unless the email is already registered.
    async fn register(&self, new_user: NewUser) -> Result<User, RegistrationError>;

    /// Fetch a previously registered user.
    async fn get(&self, id: UserId) -> Result<User, RegistrationError>;
}
