//! Sensor forecast for the rolling five-day window

use serde::{Deserialize, Serialize};

/// Length of the rolling forecast window, in days.
pub const FORECAST_DAYS: usize = 5;

/// One forecast window: per-day rainfall plus a single soil moisture and
/// temperature reading representing current conditions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Forecast {
    /// Expected rainfall per day, millimetres
    pub rainfall: [f64; FORECAST_DAYS],
    /// Current soil moisture reading, percent
    pub soil_moisture_pct: f64,
    /// Current air temperature, degrees Celsius
    pub temperature_c: f64,
}

impl Forecast {
    pub fn total_rainfall(&self) -> f64 {
        self.rainfall.iter().sum()
    }

    pub fn average_rainfall(&self) -> f64 {
        self.total_rainfall() / FORECAST_DAYS as f64
    }
}
