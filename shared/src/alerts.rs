//! Rule-based alert derivation for the dashboard
//!
//! The base battery always fires; conditional rules append in a fixed
//! evaluation order. Callers must not assume the result is sorted by time
//! or severity.

use chrono::{DateTime, Duration, Utc};

use crate::i18n::{render, text, MessageKey};
use crate::models::{Alert, Forecast, PredictionResult, Severity};
use crate::types::Locale;

/// Timestamp format used for every alert.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %I:%M %p";

/// Total forecast rainfall below this signals drought risk, mm.
pub const DROUGHT_RAIN_MM: f64 = 5.0;

/// Predicted health below this triggers the declining-health alert.
pub const DECLINING_HEALTH_PCT: f64 = 70.0;

/// Soil moisture below this triggers the low-moisture alert.
pub const LOW_MOISTURE_PCT: f64 = 60.0;

const SNAKE_IMAGE_URL: &str =
    "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcSs7ooPnj7HdV8aWicOFXQM6FTLtfdO6dxhiw&s";
const EAGLE_IMAGE_URL: &str =
    "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcRv224bC0r7NXpZIoDldeF36NH1yBh1wJAcnA&s";

/// Evaluate the full alert battery for one forecast and prediction.
///
/// `now` is the evaluation instant; the base alerts are timestamped at
/// fixed offsets before it.
pub fn evaluate_alerts(
    forecast: &Forecast,
    prediction: &PredictionResult,
    total_rainfall: f64,
    now: DateTime<Utc>,
    locale: Locale,
) -> Vec<Alert> {
    let stamp = |offset: Duration| (now - offset).format(TIMESTAMP_FORMAT).to_string();

    let mut alerts = vec![
        Alert {
            severity: Severity::High,
            message: text(MessageKey::PestOutbreak, locale).to_string(),
            timestamp_iso: stamp(Duration::zero()),
            image_url: None,
        },
        Alert {
            severity: Severity::Low,
            message: text(MessageKey::MoistureOptimal, locale).to_string(),
            timestamp_iso: stamp(Duration::minutes(30)),
            image_url: None,
        },
        Alert {
            severity: Severity::High,
            message: text(MessageKey::SnakeDetected, locale).to_string(),
            timestamp_iso: stamp(Duration::hours(1)),
            image_url: Some(SNAKE_IMAGE_URL.to_string()),
        },
        Alert {
            severity: Severity::High,
            message: text(MessageKey::EagleSpotted, locale).to_string(),
            timestamp_iso: stamp(Duration::hours(2)),
            image_url: Some(EAGLE_IMAGE_URL.to_string()),
        },
    ];

    if total_rainfall < DROUGHT_RAIN_MM {
        alerts.push(Alert {
            severity: Severity::High,
            message: text(MessageKey::DroughtRisk, locale).to_string(),
            timestamp_iso: stamp(Duration::zero()),
            image_url: None,
        });
    }

    if prediction.crop_health_pct < DECLINING_HEALTH_PCT {
        alerts.push(Alert {
            severity: Severity::High,
            message: text(MessageKey::CropHealthDeclining, locale).to_string(),
            timestamp_iso: stamp(Duration::zero()),
            image_url: None,
        });
    }

    if forecast.soil_moisture_pct < LOW_MOISTURE_PCT {
        alerts.push(Alert {
            severity: Severity::High,
            message: render(
                MessageKey::LowSoilMoisture,
                locale,
                &[("moisture", format!("{:.1}", forecast.soil_moisture_pct))],
            ),
            timestamp_iso: stamp(Duration::zero()),
            image_url: None,
        });
    }

    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CONFIDENCE_PCT;

    fn forecast_with_moisture(soil_moisture_pct: f64) -> Forecast {
        Forecast {
            rainfall: [1.0; 5],
            soil_moisture_pct,
            temperature_c: 25.0,
        }
    }

    fn prediction(crop_health_pct: f64) -> PredictionResult {
        PredictionResult {
            crop_health_pct,
            confidence_pct: CONFIDENCE_PCT,
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-03-05T14:30:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_base_alerts_always_present() {
        let alerts = evaluate_alerts(
            &forecast_with_moisture(70.0),
            &prediction(95.0),
            10.0,
            fixed_now(),
            Locale::En,
        );
        assert_eq!(alerts.len(), 4);
        assert_eq!(alerts[0].severity, Severity::High);
        assert_eq!(alerts[1].severity, Severity::Low);
        assert!(alerts[2].image_url.is_some());
        assert!(alerts[3].image_url.is_some());
    }

    #[test]
    fn test_base_alert_timestamps_step_back() {
        let alerts = evaluate_alerts(
            &forecast_with_moisture(70.0),
            &prediction(95.0),
            10.0,
            fixed_now(),
            Locale::En,
        );
        assert_eq!(alerts[0].timestamp_iso, "2026-03-05 02:30 PM");
        assert_eq!(alerts[1].timestamp_iso, "2026-03-05 02:00 PM");
        assert_eq!(alerts[2].timestamp_iso, "2026-03-05 01:30 PM");
        assert_eq!(alerts[3].timestamp_iso, "2026-03-05 12:30 PM");
    }

    #[test]
    fn test_drought_alert_fires_below_threshold() {
        let alerts = evaluate_alerts(
            &forecast_with_moisture(70.0),
            &prediction(95.0),
            4.0,
            fixed_now(),
            Locale::En,
        );
        assert_eq!(alerts.len(), 5);
        assert_eq!(alerts[4].message, "Drought risk detected - low rainfall.");
    }

    #[test]
    fn test_drought_alert_absent_at_or_above_threshold() {
        let alerts = evaluate_alerts(
            &forecast_with_moisture(70.0),
            &prediction(95.0),
            10.0,
            fixed_now(),
            Locale::En,
        );
        assert!(alerts
            .iter()
            .all(|alert| !alert.message.contains("Drought")));
    }

    #[test]
    fn test_all_conditional_alerts_in_evaluation_order() {
        let alerts = evaluate_alerts(
            &forecast_with_moisture(55.0),
            &prediction(65.0),
            3.0,
            fixed_now(),
            Locale::En,
        );
        assert_eq!(alerts.len(), 7);
        assert!(alerts[4].message.contains("Drought"));
        assert!(alerts[5].message.contains("Crop health declining"));
        assert!(alerts[6].message.contains("Low soil moisture"));
    }

    #[test]
    fn test_low_moisture_message_embeds_reading() {
        let alerts = evaluate_alerts(
            &forecast_with_moisture(55.04),
            &prediction(95.0),
            10.0,
            fixed_now(),
            Locale::En,
        );
        let moisture_alert = alerts.last().unwrap();
        assert_eq!(
            moisture_alert.message,
            "Low soil moisture detected (55.0%). Suggestion: Increase irrigation by 15 mm."
        );
    }
}
