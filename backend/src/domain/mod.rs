//! Domain primitives, services, and ports.
//!
//! Purpose: hold the registration rule and the types it operates on, free of
//! HTTP and SQL concerns. Adapters in `inbound` and `outbound` translate to
//! and from these types.
//!
//! Public surface:
//! - Error / ErrorCode / FieldError: client-facing error payload.
//! - User, NewUser, UserId, UserName, EmailAddress: the user model.
//! - UserRegistrationService: the uniqueness-enforcing create operation.
//! - TraceId: request correlation identifier.

pub mod error;
pub mod ports;
pub mod registration_service;
pub mod trace_id;
pub mod user;

pub use self::error::{Error, ErrorCode, FieldError};
pub use self::registration_service::UserRegistrationService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{EmailAddress, NewUser, User, UserId, UserName, UserValidationError};
