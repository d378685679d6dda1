//! User registration endpoints.
//!
//! ```text
//! POST /api/v1/users/ {"name":"Ana","email":"ana@example.com"}
//! GET  /api/v1/users/1
//! ```
//!
//! Handlers validate the payload, call the [`UserRegistration`] port, and
//! translate [`RegistrationError`] into the shared error payload.

use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::Error;
use crate::domain::User;
use crate::domain::ports::RegistrationError;
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::INTERNAL_ERROR_DETAIL;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_user_id, validate_new_user};

/// Detail returned when the email is taken.
pub const DUPLICATE_EMAIL_DETAIL: &str = "Email already registered";

/// Detail returned for unknown user ids.
pub const USER_NOT_FOUND_DETAIL: &str = "User not found";

/// Create payload for `POST /api/v1/users/`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "Ana")]
    pub name: String,
    #[schema(example = "ana@example.com")]
    pub email: String,
}

/// Stored user as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Ana")]
    pub name: String,
    #[schema(example = "ana@example.com")]
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id().get(),
            name: user.name().to_string(),
            email: user.email().to_string(),
        }
    }
}

fn map_registration_error(err: RegistrationError) -> Error {
    match err {
        RegistrationError::DuplicateEmail => Error::invalid_request(DUPLICATE_EMAIL_DETAIL),
        RegistrationError::NotFound { .. } => Error::not_found(USER_NOT_FOUND_DETAIL),
        RegistrationError::Persistence(source) => {
            error!(error = %source, "user store failure");
            Error::internal(INTERNAL_ERROR_DETAIL)
        }
    }
}

/// Register a new user.
///
/// Rejects an email that is already stored with 400; payload problems are
/// reported as 422 before the registration port is called.
#[utoipa::path(
    post,
    path = "/api/v1/users/",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = UserResponse),
        (status = 400, description = "Email already registered", body = ErrorSchema),
        (status = 422, description = "Invalid payload", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<web::Json<UserResponse>> {
    let CreateUserRequest { name, email } = payload.into_inner();
    let new_user = validate_new_user(name, email)?;
    let user = state
        .registration
        .register(new_user)
        .await
        .map_err(map_registration_error)?;
    Ok(web::Json(UserResponse::from(user)))
}

/// Fetch a user by id.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = i64, Path, description = "Store-assigned user id")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "Unknown user", body = ErrorSchema),
        (status = 422, description = "Invalid id", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = parse_user_id(path.into_inner())?;
    let user = state
        .registration
        .get(id)
        .await
        .map_err(map_registration_error)?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// Mount the user routes. Both `/users/` and `/users` accept the create call.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource(["/users/", "/users"]).route(web::post().to(create_user)))
        .service(web::resource("/users/{id}").route(web::get().to(get_user)));
}
