//! Verdant API server: plant catalog, per-user plant lists, and the
//! background species sync.

mod api;
mod config;
mod error;
mod state;
mod sync_runner;

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use verdant_core::plants::PlantService;
use verdant_core::users::AuthService;
use verdant_plant_data::PerenualProvider;
use verdant_storage_sqlite::{
    create_pool, AuthTokenRepository, PlantRepository, UserPlantRepository, UserRepository,
    WriteHandle,
};

use crate::config::ServerConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    info!("opening database at {}", config.database_path);

    let pool = create_pool(&config.database_path)?;
    let writer = WriteHandle::new(Arc::clone(&pool));

    let plant_repository = Arc::new(PlantRepository::new(Arc::clone(&pool), writer.clone()));
    let user_plant_repository =
        Arc::new(UserPlantRepository::new(Arc::clone(&pool), writer.clone()));
    let user_repository = Arc::new(UserRepository::new(Arc::clone(&pool), writer.clone()));
    let token_repository = Arc::new(AuthTokenRepository::new(Arc::clone(&pool), writer));

    let api_config = config.plant_api();
    let provider = Arc::new(PerenualProvider::new(api_config.clone()));

    let plant_service = Arc::new(PlantService::new(
        plant_repository,
        user_plant_repository,
        provider,
        api_config,
    ));
    let auth_service = Arc::new(AuthService::new(user_repository, token_repository));

    let state = Arc::new(AppState::new(plant_service, auth_service));
    let _sync_task = sync_runner::spawn(Arc::clone(&state), config.sync_interval);

    let app = api::router(state);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}
