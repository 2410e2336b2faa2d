//! FarmSight - Farm Monitoring Dashboard Backend
//!
//! Serves the per-request decision pipeline that turns field sensor
//! readings into a crop health prediction, threshold alerts, a pesticide
//! spray schedule and an actionable recommendation.

use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shared::HistoricalDataset;

mod config;
mod error;
mod handlers;
mod routes;
mod services;

pub use config::Config;

use services::{ForecastSource, SimulatedForecastSource};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub dataset: Arc<HistoricalDataset>,
    pub forecast: Arc<dyn ForecastSource>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "farmsight_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting FarmSight Dashboard Server");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Dashboard locale: {}", config.dashboard.locale.code());

    // Create application state. The historical dataset is loaded once and
    // shared read-only for the process lifetime; the simulated forecast
    // source is the swap point for real telemetry.
    let state = AppState {
        config: Arc::new(config.clone()),
        dataset: Arc::new(HistoricalDataset::reference()),
        forecast: Arc::new(SimulatedForecastSource),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "FarmSight Dashboard API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
