//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::pricing::PricingError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// JSON body returned for every error
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error_type: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "not_found"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            AppError::Pricing(PricingError::InvalidInput { .. }) => {
                (StatusCode::BAD_REQUEST, "invalid_input")
            }
            AppError::Pricing(e @ PricingError::MissingApiKey) => {
                tracing::error!("Configuration error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "configuration_error")
            }
            AppError::Pricing(e @ PricingError::DistanceUnavailable { .. }) => {
                tracing::warn!("Pricing unavailable: {}", e);
                (StatusCode::SERVICE_UNAVAILABLE, "distance_unavailable")
            }
        };

        let body = ErrorResponse {
            error_type: error_type.to_string(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
