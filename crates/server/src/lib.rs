pub mod api;
pub mod banner;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod openapi;
pub mod repositories;
pub mod seed;
pub mod services;
pub mod state;
pub mod utils;

use std::net::SocketAddr;

use axum::Router;
use utoipa_scalar::{Scalar, Servable};

pub use api::create_router;
pub use banner::print_banner;
pub use config::{default_data_path, parse_flag, Config, Environment};
pub use db::{create_memory_pool, create_pool};
pub use error::{AppError, AppResult};
pub use seed::seed_trivia;
pub use state::AppState;

/// The API router with the OpenAPI reference mounted at `/docs`
pub fn create_app(state: AppState) -> Router {
    let (router, api) = create_router(state);
    router.merge(Scalar::with_url("/docs", api))
}

pub async fn run_server(addr: SocketAddr, config: Config) -> Result<(), Box<dyn std::error::Error>> {
    // Ensure data directory exists
    std::fs::create_dir_all(&config.data_path)?;

    let pool = create_pool(&config.database_url, config.max_connections).await?;

    if config.seed_data {
        seed_trivia(&pool).await?;
    }

    let state = AppState::new(pool);
    let app = create_app(state);

    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
