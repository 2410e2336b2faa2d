//! Ordinary-least-squares crop health predictor
//!
//! The model is re-fitted against the historical dataset on every call.
//! There is no coefficient cache: the fit is cheap at this dataset size and
//! a changed dataset can never serve stale coefficients.

use crate::error::ModelError;
use crate::models::{HistoricalDataset, PredictionResult, CONFIDENCE_PCT};

/// Explanatory variables: rainfall, soil moisture, temperature.
const NUM_FEATURES: usize = 3;

/// Coefficients including the intercept.
const NUM_COEFFICIENTS: usize = NUM_FEATURES + 1;

/// A well-posed fit needs at least as many observations as coefficients.
pub const MIN_OBSERVATIONS: usize = NUM_COEFFICIENTS;

/// Predict crop health for the given aggregate conditions.
///
/// Fits the linear model against `dataset` and evaluates it at the supplied
/// point. The raw model output is clamped to `[0, 100]`.
///
/// # Errors
///
/// Returns [`ModelError::InsufficientData`] when the dataset has fewer than
/// [`MIN_OBSERVATIONS`] rows or ragged columns, and
/// [`ModelError::SingularDesign`] when the normal equations cannot be
/// solved (e.g. a constant explanatory column).
pub fn predict_crop_health(
    dataset: &HistoricalDataset,
    avg_rainfall: f64,
    soil_moisture_pct: f64,
    temperature_c: f64,
) -> Result<PredictionResult, ModelError> {
    let beta = fit(dataset)?;
    let raw = beta[0]
        + beta[1] * avg_rainfall
        + beta[2] * soil_moisture_pct
        + beta[3] * temperature_c;

    Ok(PredictionResult {
        crop_health_pct: raw.clamp(0.0, 100.0),
        confidence_pct: CONFIDENCE_PCT,
    })
}

/// Fit the model, returning `[intercept, rainfall, moisture, temperature]`.
fn fit(dataset: &HistoricalDataset) -> Result<[f64; NUM_COEFFICIENTS], ModelError> {
    check_shape(dataset)?;

    // Accumulate the normal equations XᵀX β = Xᵀy with an intercept column.
    let mut xtx = [[0.0_f64; NUM_COEFFICIENTS]; NUM_COEFFICIENTS];
    let mut xty = [0.0_f64; NUM_COEFFICIENTS];

    for i in 0..dataset.len() {
        let row = [
            1.0,
            dataset.rainfall[i],
            dataset.soil_moisture[i],
            dataset.temperature[i],
        ];
        for j in 0..NUM_COEFFICIENTS {
            xty[j] += row[j] * dataset.crop_health[i];
            for k in 0..NUM_COEFFICIENTS {
                xtx[j][k] += row[j] * row[k];
            }
        }
    }

    solve(xtx, xty)
}

fn check_shape(dataset: &HistoricalDataset) -> Result<(), ModelError> {
    let rows = dataset.len();
    if dataset.rainfall.len() != rows
        || dataset.soil_moisture.len() != rows
        || dataset.temperature.len() != rows
    {
        return Err(ModelError::InsufficientData(
            "historical columns are not the same length".to_string(),
        ));
    }
    if rows < MIN_OBSERVATIONS {
        return Err(ModelError::InsufficientData(format!(
            "{rows} observations, need at least {MIN_OBSERVATIONS}"
        )));
    }
    Ok(())
}

/// Solve the normal equations by Gaussian elimination with partial pivoting.
fn solve(
    mut a: [[f64; NUM_COEFFICIENTS]; NUM_COEFFICIENTS],
    mut b: [f64; NUM_COEFFICIENTS],
) -> Result<[f64; NUM_COEFFICIENTS], ModelError> {
    // Pivot tolerance relative to the matrix scale.
    let scale = a
        .iter()
        .flat_map(|row| row.iter())
        .fold(1.0_f64, |acc, v| acc.max(v.abs()));
    let tolerance = scale * 1e-10;

    for col in 0..NUM_COEFFICIENTS {
        let mut pivot = col;
        for row in col + 1..NUM_COEFFICIENTS {
            if a[row][col].abs() > a[pivot][col].abs() {
                pivot = row;
            }
        }
        if a[pivot][col].abs() < tolerance {
            return Err(ModelError::SingularDesign(
                "explanatory columns are linearly dependent".to_string(),
            ));
        }
        a.swap(col, pivot);
        b.swap(col, pivot);

        for row in col + 1..NUM_COEFFICIENTS {
            let factor = a[row][col] / a[col][col];
            for k in col..NUM_COEFFICIENTS {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = [0.0_f64; NUM_COEFFICIENTS];
    for row in (0..NUM_COEFFICIENTS).rev() {
        let mut sum = b[row];
        for k in row + 1..NUM_COEFFICIENTS {
            sum -= a[row][k] * x[k];
        }
        x[row] = sum / a[row][row];
    }
    Ok(x)
}
