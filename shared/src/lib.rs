//! Shared types and decision-pipeline logic for the FarmSight platform
//!
//! This crate contains the domain models and the pure analytics functions
//! shared between the backend and any future frontend components. Nothing
//! here performs I/O: every function is a bounded, synchronous transform
//! over its inputs.

pub mod alerts;
pub mod dashboard;
pub mod error;
pub mod i18n;
pub mod models;
pub mod predict;
pub mod recommend;
pub mod spray;
pub mod types;

pub use alerts::*;
pub use dashboard::*;
pub use error::*;
pub use models::*;
pub use predict::*;
pub use recommend::*;
pub use spray::*;
pub use types::*;
