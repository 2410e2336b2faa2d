//! Spray scheduler tests
//!
//! Tests for the greedy quota-bounded scheduler including:
//! - Quota invariant: dry events = min(quota, dry days before exhaustion)
//! - Date-shift invariant: each rainy event delays later dates by one day
//! - The asymmetric output after quota exhaustion

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use shared::{schedule_sprays, Locale, DATE_FORMAT, RAINY_THRESHOLD_MM, SPRAY_QUOTA};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
}

fn label(days_ahead: i64) -> String {
    (today() + Duration::days(days_ahead))
        .format(DATE_FORMAT)
        .to_string()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// All-dry window: exactly three sprays on consecutive days, then silence
    #[test]
    fn test_all_dry_window() {
        let timeline = schedule_sprays(&[0.0, 0.0, 0.0, 0.0, 0.0], today(), Locale::En);

        assert_eq!(timeline.len(), 3);
        assert!(timeline.iter().all(|event| !event.rainy));
        assert_eq!(timeline[0].day_label, label(0));
        assert_eq!(timeline[1].day_label, label(1));
        assert_eq!(timeline[2].day_label, label(2));
    }

    /// All-rainy window: quota never depletes, five postponements
    #[test]
    fn test_all_rainy_window() {
        let timeline = schedule_sprays(&[5.0, 5.0, 5.0, 5.0, 5.0], today(), Locale::En);

        assert_eq!(timeline.len(), 5);
        assert!(timeline.iter().all(|event| event.rainy));
        // The cumulative offset ends at five days.
        assert_eq!(timeline[4].day_label, label(8));
    }

    /// Quota exhaustion silences the remaining days entirely
    #[test]
    fn test_quota_exhaustion_emits_nothing_after() {
        let timeline = schedule_sprays(&[0.0, 0.0, 0.0, 5.0, 5.0], today(), Locale::En);
        assert_eq!(timeline.len(), 3);
    }

    /// Postponement text embeds the rainfall to one decimal
    #[test]
    fn test_postponement_text() {
        let timeline = schedule_sprays(&[4.57, 0.0, 0.0, 0.0, 0.0], today(), Locale::En);
        assert_eq!(
            timeline[0].text,
            "March 01, 2026: Spray postponed due to rain (4.6 mm)"
        );
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Quota invariant: the number of dry events equals the number of dry
    /// days encountered before the quota runs out, capped by the quota;
    /// total events never exceed the window length.
    #[test]
    fn prop_quota_invariant(rainfall in prop::array::uniform5(0.0..6.0_f64)) {
        let timeline = schedule_sprays(&rainfall, today(), Locale::En);
        prop_assert!(timeline.len() <= 5);

        let mut remaining = SPRAY_QUOTA;
        let mut expected_dry = 0u32;
        for &rain in rainfall.iter() {
            if remaining == 0 {
                break;
            }
            if rain <= RAINY_THRESHOLD_MM {
                expected_dry += 1;
                remaining -= 1;
            }
        }

        let dry = timeline.iter().filter(|event| !event.rainy).count() as u32;
        prop_assert_eq!(dry, expected_dry);
        prop_assert!(dry <= SPRAY_QUOTA);
    }

    /// Date-shift invariant: event `i` falls on today + i + (rainy events
    /// before i); every postponement pushes all later dates back one day.
    #[test]
    fn prop_date_shift_invariant(rainfall in prop::array::uniform5(0.0..6.0_f64)) {
        let timeline = schedule_sprays(&rainfall, today(), Locale::En);

        let mut rainy_so_far = 0i64;
        for (index, event) in timeline.iter().enumerate() {
            let expected = today() + Duration::days(index as i64 + rainy_so_far);
            prop_assert_eq!(
                event.day_label.clone(),
                expected.format(DATE_FORMAT).to_string()
            );
            if event.rainy {
                rainy_so_far += 1;
            }
        }
    }
}
