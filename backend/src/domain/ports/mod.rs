//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod user_registration;
mod user_repository;

#[cfg(test)]
pub use user_registration::MockUserRegistration;
pub use user_registration::{RegistrationError, UserRegistration};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
