//! Greedy pesticide spray scheduling over the forecast window
//!
//! Two counters drive the plan: the remaining spray quota and the
//! cumulative day offset introduced by rain postponements. Days reached
//! after the quota is spent produce no event at all.

use chrono::{Duration, NaiveDate};

use crate::i18n::{render, MessageKey};
use crate::models::{SprayEvent, FORECAST_DAYS};
use crate::types::Locale;

/// Maximum sprays in one scheduling run.
pub const SPRAY_QUOTA: u32 = 3;

/// Rainfall above this postpones the day's spray, mm.
pub const RAINY_THRESHOLD_MM: f64 = 2.0;

/// Calendar format for spray timeline entries.
pub const DATE_FORMAT: &str = "%B %d, %Y";

/// Plan sprays for the forecast window starting at `today`.
///
/// A rainy day (rainfall above [`RAINY_THRESHOLD_MM`]) emits a
/// postponement and shifts every later candidate date back one day without
/// spending quota; a dry day emits a scheduled spray and spends one. The
/// loop stops as soon as the quota is exhausted.
pub fn schedule_sprays(
    rainfall: &[f64; FORECAST_DAYS],
    today: NaiveDate,
    locale: Locale,
) -> Vec<SprayEvent> {
    let mut timeline = Vec::new();
    let mut quota = SPRAY_QUOTA;
    let mut day_offset: i64 = 0;

    for (index, &rain) in rainfall.iter().enumerate() {
        if quota == 0 {
            break;
        }
        let date = today + Duration::days(index as i64 + day_offset);
        let day_label = date.format(DATE_FORMAT).to_string();

        if rain > RAINY_THRESHOLD_MM {
            timeline.push(SprayEvent {
                text: render(
                    MessageKey::SprayPostponed,
                    locale,
                    &[("date", day_label.clone()), ("rain", format!("{rain:.1}"))],
                ),
                rainy: true,
                day_label,
            });
            day_offset += 1;
        } else {
            timeline.push(SprayEvent {
                text: render(
                    MessageKey::SprayScheduled,
                    locale,
                    &[("date", day_label.clone())],
                ),
                rainy: false,
                day_label,
            });
            quota -= 1;
        }
    }

    timeline
}
