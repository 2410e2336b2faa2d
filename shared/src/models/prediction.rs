//! Crop health prediction output

use serde::{Deserialize, Serialize};

use crate::i18n::{text, MessageKey};
use crate::types::Locale;

/// Fixed reported confidence, percent. Deliberately not derived from fit
/// residuals; keep it a named constant until a real interval is required.
pub const CONFIDENCE_PCT: f64 = 90.0;

/// Predicted health at or above this level needs no action, percent.
pub const GOOD_HEALTH_THRESHOLD_PCT: f64 = 90.0;

/// Result of one model evaluation. Derived per request, never persisted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    /// Predicted crop health, clamped to [0, 100]
    pub crop_health_pct: f64,
    /// Reported confidence, percent
    pub confidence_pct: f64,
}

impl PredictionResult {
    /// Coarse status string derived from the predicted health.
    pub fn health_status(&self, locale: Locale) -> String {
        if self.crop_health_pct >= GOOD_HEALTH_THRESHOLD_PCT {
            text(MessageKey::HealthGood, locale).to_string()
        } else {
            text(MessageKey::HealthWarning, locale).to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status_boundaries() {
        let good = PredictionResult {
            crop_health_pct: 90.0,
            confidence_pct: CONFIDENCE_PCT,
        };
        let warning = PredictionResult {
            crop_health_pct: 89.9,
            confidence_pct: CONFIDENCE_PCT,
        };
        assert_eq!(good.health_status(Locale::En), "Good");
        assert_eq!(warning.health_status(Locale::En), "Warning - Action Needed");
    }
}
