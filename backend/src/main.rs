//! Service entry point: loads settings, prepares storage, and serves HTTP.

mod server;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use ortho_config::OrthoConfig;
use user_registry::config::AppSettings;
use user_registry::inbound::http::health::HealthState;
use user_registry::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};

use server::{ServerConfig, create_server};

async fn connect(settings: &AppSettings, database_url: &str) -> std::io::Result<DbPool> {
    if settings.run_migrations {
        run_pending_migrations(database_url)
            .await
            .map_err(std::io::Error::other)?;
    }

    let config = PoolConfig::new(database_url)
        .with_max_size(settings.pool_max_size())
        .with_min_idle(Some(settings.pool_min_idle()));
    DbPool::new(config).await.map_err(std::io::Error::other)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        AppSettings::load().map_err(|err| std::io::Error::other(err.to_string()))?;

    let mut config = ServerConfig::new(settings.bind_address());
    if let Some(database_url) = settings.database_url() {
        config = config.with_db_pool(connect(&settings, database_url).await?);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(bind_address = %settings.bind_address(), "user registry listening");
    server.await
}
