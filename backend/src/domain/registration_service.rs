//! User registration domain service.
//!
//! Enforces the one business rule of this service: an email address may be
//! registered once. The check runs against the repository before inserting;
//! because the check and the insert are separate store operations, the
//! store's unique constraint is the final arbiter and a constraint violation
//! on insert is reported as the same duplicate outcome.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{
    RegistrationError, UserPersistenceError, UserRegistration, UserRepository,
};
use crate::domain::{NewUser, User, UserId};

/// Registration service implementing the [`UserRegistration`] driving port.
#[derive(Clone)]
pub struct UserRegistrationService<R> {
    users: Arc<R>,
}

impl<R> UserRegistrationService<R> {
    /// Create a new service over the given repository.
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

fn map_insert_error(error: UserPersistenceError) -> RegistrationError {
    match error {
        UserPersistenceError::DuplicateEmail { .. } => RegistrationError::DuplicateEmail,
        other => RegistrationError::Persistence(other),
    }
}

#[async_trait]
impl<R> UserRegistration for UserRegistrationService<R>
where
    R: UserRepository + 'static,
{
    async fn register(&self, new_user: NewUser) -> Result<User, RegistrationError> {
        if let Some(existing) = self.users.find_by_email(new_user.email()).await? {
            debug!(existing_id = %existing.id(), "registration rejected: email taken");
            return Err(RegistrationError::DuplicateEmail);
        }

        let user = self.users.insert(&new_user).await.map_err(map_insert_error)?;
        info!(user_id = %user.id(), "user registered");
        Ok(user)
    }

    async fn get(&self, id: UserId) -> Result<User, RegistrationError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or(RegistrationError::NotFound { id })
    }
}
