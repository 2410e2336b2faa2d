//! Aggregated dashboard payload handed to the presentation layer

use serde::{Deserialize, Serialize};

use super::{Alert, PredictionResult, SprayEvent};

/// Reference growing conditions shown next to the prediction.
pub const OPTIMAL_CONDITIONS: OptimalConditions = OptimalConditions {
    rain: 10.0,
    moisture: 65.0,
    temp: 25.0,
};

/// Labeled numeric series suitable for charting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    /// Display name of the series
    pub label: String,
    /// One label per data point
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

/// Reference growing conditions for the crop.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct OptimalConditions {
    pub rain: f64,
    pub moisture: f64,
    pub temp: f64,
}

/// Everything one dashboard request derives from a forecast. Constructed
/// once per request, never mutated afterwards, discarded with the response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPayload {
    pub weather_series: ChartSeries,
    pub watering_series: ChartSeries,
    pub soil_metrics: ChartSeries,
    pub spray_timeline: Vec<SprayEvent>,
    pub alerts: Vec<Alert>,
    pub recommendation: String,
    pub prediction: PredictionResult,
    pub health_status: String,
    pub optimal_conditions: OptimalConditions,
    pub soil_moisture_pct: f64,
    pub total_rainfall: f64,
}
