//! Error handling for the FarmSight platform
//!
//! Provides consistent error responses in English and Swahili

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use shared::ModelError;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Model-fit preconditions
    #[error(transparent)]
    Model(#[from] ModelError),

    // Forecast source errors
    #[error("Forecast source unavailable: {0}")]
    ForecastUnavailable(String),

    // Internal errors
    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_sw: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::Model(ModelError::InsufficientData(msg)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INSUFFICIENT_DATA".to_string(),
                    message_en: format!("Historical dataset cannot support a fit: {}", msg),
                    message_sw: "Data ya kihistoria haitoshi kwa utabiri".to_string(),
                },
            ),
            AppError::Model(ModelError::SingularDesign(msg)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "SINGULAR_DESIGN".to_string(),
                    message_en: format!("Crop health model cannot be fitted: {}", msg),
                    message_sw: "Modeli ya afya ya mazao haiwezi kuundwa".to_string(),
                },
            ),
            AppError::ForecastUnavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorDetail {
                    code: "FORECAST_UNAVAILABLE".to_string(),
                    message_en: format!("Forecast source is temporarily unavailable: {}", msg),
                    message_sw: "Chanzo cha utabiri hakipatikani kwa sasa".to_string(),
                },
            ),
            AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message_en: "An internal server error occurred".to_string(),
                    message_sw: "Hitilafu ya ndani ya seva imetokea".to_string(),
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
