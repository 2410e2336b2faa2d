//! Typed failures for the crop health model fit

use thiserror::Error;

/// Errors surfaced by the predictive model.
///
/// Both fit preconditions fail fast with a typed error rather than letting
/// NaN propagate through the coefficients.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The historical dataset cannot support a well-posed fit
    #[error("insufficient historical data: {0}")]
    InsufficientData(String),

    /// The design matrix is rank-deficient
    #[error("singular design matrix: {0}")]
    SingularDesign(String),
}
