//! Request validation for inbound HTTP adapters.
//!
//! Everything here runs before a handler calls into the domain: extractor
//! failures (malformed JSON, wrong content type, bad path segments) and
//! presence checks on the create payload all surface as
//! [`ErrorCode::ValidationFailed`](crate::domain::ErrorCode) with a list of
//! field errors.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, web};
use tracing::debug;

use crate::domain::{EmailAddress, Error, FieldError, NewUser, UserId, UserName, UserValidationError};

/// Top-level detail for every validation failure.
pub const VALIDATION_DETAIL: &str = "Request validation failed";

/// Stable field error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldErrorCode {
    MissingField,
    Empty,
    InvalidJson,
    InvalidType,
    UnsupportedMediaType,
    TooLarge,
    InvalidId,
}

impl FieldErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::Empty => "empty",
            Self::InvalidJson => "invalid_json",
            Self::InvalidType => "invalid_type",
            Self::UnsupportedMediaType => "unsupported_media_type",
            Self::TooLarge => "too_large",
            Self::InvalidId => "invalid_id",
        }
    }
}

fn field_error(field: &str, code: FieldErrorCode, message: impl Into<String>) -> FieldError {
    FieldError::new(field, code.as_str(), message)
}

fn validation_error(errors: Vec<FieldError>) -> Error {
    Error::validation_failed(VALIDATION_DETAIL).with_errors(errors)
}

/// Pull the field name out of serde's "missing field `name`" message.
fn missing_field_name(message: &str) -> Option<&str> {
    message
        .strip_prefix("missing field `")
        .and_then(|rest| rest.split('`').next())
}

pub(crate) fn json_payload_error(err: &JsonPayloadError) -> Error {
    let error = match err {
        JsonPayloadError::Deserialize(source) if source.is_data() => {
            let message = source.to_string();
            match missing_field_name(&message) {
                Some(field) => field_error(
                    field,
                    FieldErrorCode::MissingField,
                    format!("missing required field: {field}"),
                ),
                None => field_error("body", FieldErrorCode::InvalidType, message.clone()),
            }
        }
        JsonPayloadError::Deserialize(source) => {
            field_error("body", FieldErrorCode::InvalidJson, source.to_string())
        }
        JsonPayloadError::ContentType => field_error(
            "body",
            FieldErrorCode::UnsupportedMediaType,
            "expected Content-Type: application/json",
        ),
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            field_error("body", FieldErrorCode::TooLarge, err.to_string())
        }
        other => field_error("body", FieldErrorCode::InvalidJson, other.to_string()),
    };
    validation_error(vec![error])
}

/// JSON extractor configuration returning validation errors instead of
/// Actix's plain-text 400s.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, req: &HttpRequest| {
        debug!(path = req.path(), error = %err, "rejected request body");
        json_payload_error(&err).into()
    })
}

/// Path extractor configuration returning validation errors.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err: PathError, req: &HttpRequest| {
        debug!(path = req.path(), error = %err, "rejected path parameters");
        validation_error(vec![field_error(
            "id",
            FieldErrorCode::InvalidId,
            "id must be a positive integer",
        )])
        .into()
    })
}

/// Validate a user id taken from the path.
pub(crate) fn parse_user_id(raw: i64) -> Result<UserId, Error> {
    UserId::new(raw).map_err(|err| {
        validation_error(vec![field_error("id", FieldErrorCode::InvalidId, err.to_string())])
    })
}

/// Validate both registration fields, reporting every failure at once.
pub(crate) fn validate_new_user(name: String, email: String) -> Result<NewUser, Error> {
    let name = UserName::new(name);
    let email = EmailAddress::new(email);

    match (name, email) {
        (Ok(name), Ok(email)) => Ok(NewUser::new(name, email)),
        (name, email) => {
            let errors = [("name", name.err()), ("email", email.err())]
                .into_iter()
                .filter_map(|(field, err)| err.map(|err| empty_field_error(field, &err)))
                .collect();
            Err(validation_error(errors))
        }
    }
}

fn empty_field_error(field: &str, err: &UserValidationError) -> FieldError {
    field_error(field, FieldErrorCode::Empty, err.to_string())
}
