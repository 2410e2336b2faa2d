//! Threshold-triggered dashboard alerts

use serde::{Deserialize, Serialize};

/// Alert severity shown on the dashboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Low,
}

/// One dashboard alert. A batch is ordered by rule evaluation order, not
/// by time or severity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub severity: Severity,
    pub message: String,
    /// Wall-clock timestamp, `%Y-%m-%d %I:%M %p`
    pub timestamp_iso: String,
    /// Illustrative image for camera-sourced alerts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
