//! OpenAPI document for the REST API.
//!
//! Served by Swagger UI in debug builds and printed by the `openapi-dump`
//! binary.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, FieldErrorSchema};
use crate::inbound::http::users::{CreateUserRequest, UserResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User registry API",
        description = "Register users with a unique email address and read them back."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CreateUserRequest,
        UserResponse,
        ErrorSchema,
        ErrorCodeSchema,
        FieldErrorSchema
    )),
    tags(
        (name = "users", description = "User registration"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
