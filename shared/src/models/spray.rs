//! Pesticide spray plan entries

use serde::{Deserialize, Serialize};

/// One scheduling decision in the spray timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SprayEvent {
    /// Calendar date of the decision, `%B %d, %Y`
    pub day_label: String,
    /// Whether rain postponed the spray on this day
    pub rainy: bool,
    /// Human-readable description of the decision
    pub text: String,
}
