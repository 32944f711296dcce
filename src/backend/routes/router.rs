/**
 * Router Configuration
 *
 * Combines the public and authenticated routes into one Axum router and
 * applies the global layers.
 *
 * # Layers
 *
 * - `TraceLayer` - one span per request
 * - `TimeoutLayer` - requests taking longer than 10 seconds are aborted
 *
 * Unknown routes answer 404 with the standard JSON error body.
 */

use std::time::Duration;

use axum::{http::StatusCode, routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::backend::error::error_response;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::auth_routes::configure_auth_routes;
use crate::backend::routes::docs_routes::configure_docs_routes;
use crate::backend::server::state::AppState;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/health", get(|| async { "ok" }));

    let router = configure_auth_routes(router);

    let router = configure_docs_routes(router);

    let router = router.nest("/api", configure_api_routes(&app_state));

    let router = router.fallback(|| async { error_response(StatusCode::NOT_FOUND, "Not found") });

    router
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
