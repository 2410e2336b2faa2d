//! Dashboard aggregation service
//!
//! Orchestrates the forecast source and the shared decision pipeline into
//! one immutable payload per request. Nothing is retained between calls.

use std::sync::Arc;

use chrono::Utc;

use shared::{assemble_payload, DashboardPayload, HistoricalDataset, Locale};

use crate::error::AppResult;
use crate::services::forecast::ForecastSource;

/// Dashboard service building one payload per call
#[derive(Clone)]
pub struct DashboardService {
    dataset: Arc<HistoricalDataset>,
    source: Arc<dyn ForecastSource>,
    locale: Locale,
}

impl DashboardService {
    /// Create a new DashboardService instance
    pub fn new(
        dataset: Arc<HistoricalDataset>,
        source: Arc<dyn ForecastSource>,
        locale: Locale,
    ) -> Self {
        Self {
            dataset,
            source,
            locale,
        }
    }

    /// Build the dashboard payload from a fresh forecast.
    ///
    /// Any component failure aborts the whole payload; no partial or
    /// degraded artifact is returned.
    pub fn build_payload(&self) -> AppResult<DashboardPayload> {
        let forecast = self.source.generate()?;
        tracing::debug!(
            total_rainfall = forecast.total_rainfall(),
            soil_moisture_pct = forecast.soil_moisture_pct,
            temperature_c = forecast.temperature_c,
            "forecast generated"
        );

        let payload = assemble_payload(&self.dataset, &forecast, Utc::now(), self.locale)?;
        Ok(payload)
    }
}
