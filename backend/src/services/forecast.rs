//! Forecast source abstraction and the simulated reference implementation
//!
//! The forecast source is the single injection point for real telemetry:
//! swapping the implementation must not touch any downstream component.

use rand::Rng;

use shared::{Forecast, FORECAST_DAYS};

use crate::error::AppResult;

/// Bounded ranges the simulated source draws from.
pub const RAINFALL_RANGE_MM: (f64, f64) = (0.0, 5.0);
pub const SOIL_MOISTURE_RANGE_PCT: (f64, f64) = (55.0, 75.0);
pub const TEMPERATURE_RANGE_C: (f64, f64) = (20.0, 30.0);

/// Produces one forecast window per dashboard request.
pub trait ForecastSource: Send + Sync {
    /// Generate the next five-day forecast.
    fn generate(&self) -> AppResult<Forecast>;
}

/// Reference source drawing independent readings from bounded uniform
/// distributions. Consumes entropy from the process-wide generator and
/// keeps no other state.
pub struct SimulatedForecastSource;

impl ForecastSource for SimulatedForecastSource {
    fn generate(&self) -> AppResult<Forecast> {
        let mut rng = rand::thread_rng();

        let mut rainfall = [0.0_f64; FORECAST_DAYS];
        for day in rainfall.iter_mut() {
            *day = rng.gen_range(RAINFALL_RANGE_MM.0..RAINFALL_RANGE_MM.1);
        }

        Ok(Forecast {
            rainfall,
            soil_moisture_pct: rng
                .gen_range(SOIL_MOISTURE_RANGE_PCT.0..SOIL_MOISTURE_RANGE_PCT.1),
            temperature_c: rng.gen_range(TEMPERATURE_RANGE_C.0..TEMPERATURE_RANGE_C.1),
        })
    }
}
