//! Dashboard payload assembly
//!
//! Pure aggregation over one forecast: prediction, alerts, spray plan,
//! recommendation and the chart series the presentation layer renders.
//! Any predictor failure aborts the whole payload; no partial artifact is
//! ever returned.

use chrono::{DateTime, Utc};

use crate::alerts::evaluate_alerts;
use crate::error::ModelError;
use crate::i18n::{render, text, MessageKey};
use crate::models::{
    ChartSeries, DashboardPayload, Forecast, HistoricalDataset, FORECAST_DAYS, OPTIMAL_CONDITIONS,
};
use crate::predict::predict_crop_health;
use crate::recommend::synthesize_recommendation;
use crate::spray::schedule_sprays;
use crate::types::Locale;

/// Daily irrigation target the watering forecast tops rainfall up to, mm.
pub const IRRIGATION_TARGET_MM: f64 = 15.0;

/// Fixed reference soil readings reported alongside the moisture sensor.
pub const SOIL_PH: f64 = 6.2;
pub const SOIL_NITROGEN_MG_KG: f64 = 18.0;

/// Assemble the complete dashboard payload for one forecast.
pub fn assemble_payload(
    dataset: &HistoricalDataset,
    forecast: &Forecast,
    now: DateTime<Utc>,
    locale: Locale,
) -> Result<DashboardPayload, ModelError> {
    let total_rainfall = forecast.total_rainfall();

    let prediction = predict_crop_health(
        dataset,
        forecast.average_rainfall(),
        forecast.soil_moisture_pct,
        forecast.temperature_c,
    )?;

    let alerts = evaluate_alerts(forecast, &prediction, total_rainfall, now, locale);
    let spray_timeline = schedule_sprays(&forecast.rainfall, now.date_naive(), locale);
    let recommendation = synthesize_recommendation(
        total_rainfall,
        prediction.crop_health_pct,
        forecast.soil_moisture_pct,
        locale,
    );

    let day_labels: Vec<String> = (1..=FORECAST_DAYS)
        .map(|n| render(MessageKey::DayLabel, locale, &[("n", n.to_string())]))
        .collect();

    let weather_series = ChartSeries {
        label: text(MessageKey::RainfallSeries, locale).to_string(),
        labels: day_labels.clone(),
        data: forecast.rainfall.to_vec(),
    };

    let watering_series = ChartSeries {
        label: text(MessageKey::WateringSeries, locale).to_string(),
        labels: day_labels,
        data: forecast
            .rainfall
            .iter()
            .map(|rain| (IRRIGATION_TARGET_MM - rain).max(0.0))
            .collect(),
    };

    let soil_metrics = ChartSeries {
        label: text(MessageKey::SoilSeries, locale).to_string(),
        labels: vec![
            text(MessageKey::SoilMoistureLabel, locale).to_string(),
            text(MessageKey::SoilPhLabel, locale).to_string(),
            text(MessageKey::SoilNitrogenLabel, locale).to_string(),
        ],
        data: vec![forecast.soil_moisture_pct, SOIL_PH, SOIL_NITROGEN_MG_KG],
    };

    let health_status = prediction.health_status(locale);

    Ok(DashboardPayload {
        weather_series,
        watering_series,
        soil_metrics,
        spray_timeline,
        alerts,
        recommendation,
        prediction,
        health_status,
        optimal_conditions: OPTIMAL_CONDITIONS,
        soil_moisture_pct: forecast.soil_moisture_pct,
        total_rainfall,
    })
}
