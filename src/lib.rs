// job-lens - Load, filter and sort JSON job listings

pub mod config;
pub mod error;
pub mod filters;
pub mod jobs;
pub mod loader;
pub mod models;
pub mod render;
pub mod routes;
pub mod tui;       // Terminal User Interface
pub mod utils;
pub mod viewer;

// Re-exports for convenience
pub use config::Config;
pub use error::LoadError;
pub use jobs::Job;
pub use models::AppState;
pub use viewer::Viewer;

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
