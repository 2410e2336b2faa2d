//! Historical field observations used to fit the crop health model

use serde::{Deserialize, Serialize};

/// Parallel per-day field observations. Index `i` across all four columns
/// is one historical day's joint reading; the columns must stay the same
/// length.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoricalDataset {
    /// Daily rainfall in millimetres
    pub rainfall: Vec<f64>,
    /// Daily soil moisture in percent
    pub soil_moisture: Vec<f64>,
    /// Daily mean temperature in degrees Celsius
    pub temperature: Vec<f64>,
    /// Observed crop health in percent
    pub crop_health: Vec<f64>,
}

impl HistoricalDataset {
    /// Number of joint observations.
    pub fn len(&self) -> usize {
        self.crop_health.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crop_health.is_empty()
    }

    /// Fixed reference sample the platform ships with. Loaded once at
    /// startup and shared read-only for the process lifetime.
    pub fn reference() -> Self {
        Self {
            rainfall: vec![5.0, 10.0, 0.0, 15.0, 3.0],
            soil_moisture: vec![60.0, 65.0, 55.0, 70.0, 62.0],
            temperature: vec![25.0, 26.0, 24.0, 27.0, 25.0],
            crop_health: vec![80.0, 85.0, 75.0, 90.0, 82.0],
        }
    }
}
