//! HTTP Routes
//!
//! Endpoints of the browser viewer:
//! - `/` - the viewer page
//! - `/api/jobs` - filter and sort the loaded jobs
//! - `/api/jobs/load` - load a listings file
//! - `/api/health` - health check

pub mod health;
pub mod jobs;
pub mod ui;

use crate::models::AppState;
use axum::{http::HeaderValue, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    let cors = cors_layer(&state.config.server.cors_allowed_origins);

    Router::new()
        .merge(jobs::router(state.clone()))
        .merge(health::router(state))
        .merge(ui::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Same-origin only unless origins are configured; `*` allows any.
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|origin| origin == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods(Any)
        .allow_headers(Any)
}
