//! HTTP handler for the dashboard endpoint

use axum::{extract::State, Json};

use shared::DashboardPayload;

use crate::error::AppResult;
use crate::services::DashboardService;
use crate::AppState;

/// Build and return the full dashboard payload.
///
/// No request parameters are consumed: the locale is a configuration
/// constant and every artifact is recomputed from a fresh forecast.
pub async fn get_dashboard(State(state): State<AppState>) -> AppResult<Json<DashboardPayload>> {
    let service = DashboardService::new(
        state.dataset.clone(),
        state.forecast.clone(),
        state.config.dashboard.locale,
    );
    let payload = service.build_payload()?;
    Ok(Json(payload))
}
