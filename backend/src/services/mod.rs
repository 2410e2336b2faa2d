//! Business logic services for the FarmSight platform

pub mod dashboard;
pub mod forecast;

pub use dashboard::DashboardService;
pub use forecast::{ForecastSource, SimulatedForecastSource};
