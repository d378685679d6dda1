//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod users;
pub mod validation;

pub use error::ApiResult;

/// Register the versioned API: extractor error handlers plus user routes.
///
/// Mount under `/api/v1`:
///
/// ```
/// use actix_web::{App, web};
/// use user_registry::inbound::http::configure;
///
/// let _app = App::new().service(web::scope("/api/v1").configure(configure));
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(validation::json_config())
        .app_data(validation::path_config())
        .configure(users::configure);
}
