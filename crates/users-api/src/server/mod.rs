//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::info;
use users_common::{AppConfig, AppError};
use users_db::{create_pool, DatabaseConfig, PgUserRepository};
use users_service::ServiceContextBuilder;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Startup and serving failures
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to connect to database: {0}")]
    Database(String),

    #[error("failed to build services: {0}")]
    Service(#[from] AppError),

    #[error("failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let router = apply_middleware(
        create_router(),
        &config.cors,
        config.app.env.is_production(),
    );
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, ServerError> {
    info!("Connecting to PostgreSQL...");
    let db_config = DatabaseConfig::from(&config.database);
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| ServerError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));

    let service_context = ServiceContextBuilder::new().user_repo(user_repo).build()?;

    Ok(AppState::new(service_context, pool, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: &str) -> Result<(), ServerError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.to_string(),
            source,
        })?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await.map_err(ServerError::Serve)
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), ServerError> {
    let addr = config.api.address();

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, &addr).await
}
