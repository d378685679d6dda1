//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay free of utoipa; these wrappers describe their JSON
//! shape for the generated document.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request breaks a business rule (e.g. duplicate email).
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The request body or path failed validation.
    #[schema(rename = "validation_failed")]
    ValidationFailed,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::FieldError`].
#[derive(ToSchema)]
#[schema(as = crate::domain::FieldError)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct FieldErrorSchema {
    #[schema(example = "email")]
    field: String,
    #[schema(example = "empty")]
    code: String,
    #[schema(example = "email must not be empty")]
    message: String,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    code: ErrorCodeSchema,
    /// Human-readable message.
    #[schema(example = "Email already registered")]
    detail: String,
    /// Correlation identifier, echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Field-level validation failures.
    errors: Option<Vec<FieldErrorSchema>>,
}
