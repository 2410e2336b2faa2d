//! Route definitions for the FarmSight platform

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Dashboard payload (public)
        .route("/dashboard", get(handlers::get_dashboard))
}
