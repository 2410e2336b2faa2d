//! Irrigation, fertilizer and pesticide recommendation synthesis

use crate::i18n::{text, MessageKey};
use crate::types::Locale;

/// Total rainfall above this stops irrigation, mm.
pub const SUFFICIENT_RAIN_MM: f64 = 15.0;

/// Total rainfall above this reduces pesticide use, mm.
pub const HEAVY_RAIN_MM: f64 = 20.0;

/// Health below this adds the fertilizer clause.
pub const FERTILIZER_HEALTH_PCT: f64 = 70.0;

/// Soil moisture below this adds the irrigation top-up clause.
pub const TOPUP_MOISTURE_PCT: f64 = 60.0;

/// Build the recommendation string by ordered conditional appends.
///
/// Clauses never replace one another: heavy rain produces both the
/// stop-watering base clause and the pesticide-reduction clause.
pub fn synthesize_recommendation(
    total_rainfall: f64,
    crop_health_pct: f64,
    soil_moisture_pct: f64,
    locale: Locale,
) -> String {
    let mut recommendation = if total_rainfall > SUFFICIENT_RAIN_MM {
        text(MessageKey::StopWatering, locale).to_string()
    } else {
        text(MessageKey::IrrigateTomorrow, locale).to_string()
    };

    if crop_health_pct < FERTILIZER_HEALTH_PCT {
        recommendation.push(' ');
        recommendation.push_str(text(MessageKey::ApplyFertilizer, locale));
    }
    if total_rainfall > HEAVY_RAIN_MM {
        recommendation.push(' ');
        recommendation.push_str(text(MessageKey::ReducePesticide, locale));
    }
    if soil_moisture_pct < TOPUP_MOISTURE_PCT {
        recommendation.push(' ');
        recommendation.push_str(text(MessageKey::IncreaseIrrigation, locale));
    }

    recommendation
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dry_healthy_wet_soil_keeps_base_clause_only() {
        let recommendation = synthesize_recommendation(3.0, 85.0, 65.0, Locale::En);
        assert_eq!(recommendation, "Irrigate 10 mm tomorrow morning.");
    }

    #[test]
    fn test_clauses_append_in_fixed_order() {
        let recommendation = synthesize_recommendation(3.0, 65.0, 55.0, Locale::En);
        assert_eq!(
            recommendation,
            "Irrigate 10 mm tomorrow morning. \
             Apply 5 kg/ha fertilizer to boost health. \
             Increase irrigation by 15 mm due to low soil moisture."
        );
    }

    #[test]
    fn test_heavy_rain_compounds_stop_and_pesticide_clauses() {
        let recommendation = synthesize_recommendation(25.0, 85.0, 65.0, Locale::En);
        assert_eq!(
            recommendation,
            "Stop watering - sufficient rain detected. \
             Reduce pesticide use due to heavy rain."
        );
    }

    #[test]
    fn test_rain_between_thresholds_stops_watering_without_pesticide_clause() {
        let recommendation = synthesize_recommendation(18.0, 85.0, 65.0, Locale::En);
        assert_eq!(recommendation, "Stop watering - sufficient rain detected.");
    }

    #[test]
    fn test_swahili_recommendation() {
        let recommendation = synthesize_recommendation(3.0, 85.0, 65.0, Locale::Sw);
        assert_eq!(recommendation, "Mwagilia mm 10 kesho asubuhi.");
    }
}
