//! Route definitions for the Nexus Admin API.

pub mod dashboard;
pub mod health;

use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Assemble the application router. Shared by `main` and the integration
/// tests so both serve the same routes.
pub fn router(state: AppState) -> Router {
    let cors = match state.config.frontend_url.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET])
            .allow_headers(Any),
        Err(_) => {
            tracing::warn!(
                frontend_url = %state.config.frontend_url,
                "FRONTEND_URL is not a valid origin, allowing any"
            );
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    };

    Router::new()
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready))
        .route("/api/v1/dashboard/overview", get(dashboard::overview))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
