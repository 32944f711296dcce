/**
 * Server Initialization
 *
 * Builds `AppState` from a `ServerConfig` and assembles the router.
 *
 * # Initialization Process
 *
 * 1. Create the token service from the configured secret
 * 2. Connect to PostgreSQL when `DATABASE_URL` is set, otherwise fall back
 *    to the in-memory store
 * 3. Wire services and caches
 * 4. Create the router
 */

use std::sync::Arc;

use axum::Router;
use thiserror::Error;

use crate::backend::auth::tokens::{TokenError, TokenService};
use crate::backend::repository::{MemoryStore, PgStore};
use crate::backend::routes::create_router;
use crate::backend::server::config::{load_database, ConfigError, ServerConfig};
use crate::backend::server::state::AppState;

/// Startup failures; the binary exits when it sees one
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("token service error: {0}")]
    Token(#[from] TokenError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Build application state for `config`
pub async fn build_state(config: &ServerConfig) -> Result<AppState, StartupError> {
    let tokens = Arc::new(TokenService::new(config.jwt_secret().expose())?);

    let state = match config.database_url() {
        Some(url) => {
            let store = PgStore::new(load_database(url).await?);
            let store = Arc::new(store);
            AppState::new(tokens, store.clone(), store.clone(), store, config.cache_ttl())
        }
        None => {
            tracing::warn!("DATABASE_URL not set. Using the in-memory store; data is lost on restart.");
            let store = Arc::new(MemoryStore::new());
            AppState::new(tokens, store.clone(), store.clone(), store, config.cache_ttl())
        }
    };

    tracing::info!(
        "Application state initialized (cache ttl {}s)",
        config.cache_ttl().as_secs()
    );
    Ok(state)
}

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> Result<Router, StartupError> {
    tracing::info!("Initializing blog backend server");

    let state = build_state(config).await?;
    let app = create_router(state);

    tracing::info!("Router configured");
    Ok(app)
}
