//! Unified error handling
//!
//! Pipeline failures and HTTP errors both surface as the same
//! `{ error: true, message, details? }` body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

use crate::domain::comparison::Layer;

/// Raised while normalizing raw input into a context.
#[derive(Debug, Error, PartialEq)]
pub enum CaptureError {
    #[error("input must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("{field} must be a string, got {found}")]
    NotAString {
        field: &'static str,
        found: &'static str,
    },
}

/// Raised by a stage after validation.
#[derive(Debug, Error, PartialEq)]
pub enum PipelineError {
    #[error("no comparison available for the {0} layer")]
    MissingComparison(Layer),
}

#[derive(Debug, Error, PartialEq)]
pub enum RecommendationError {
    #[error("Invalid user context provided")]
    Validation { errors: Vec<String> },

    #[error("Failed to capture user context")]
    Capture(#[from] CaptureError),

    #[error("Failed to generate recommendation")]
    Pipeline(#[from] PipelineError),
}

impl RecommendationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::Capture(_) => StatusCode::BAD_REQUEST,
            Self::Pipeline(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn details(&self) -> serde_json::Value {
        match self {
            Self::Validation { errors } => json!({ "errors": errors }),
            Self::Capture(e) => json!({ "error": e.to_string() }),
            Self::Pipeline(e) => json!({ "error": e.to_string() }),
        }
    }
}

/// Body returned instead of a recommendation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, details: Option<serde_json::Value>) -> Self {
        Self {
            error: true,
            message: message.into(),
            details,
        }
    }

    /// Validation messages, when this response came from a validation failure.
    pub fn validation_errors(&self) -> Vec<&str> {
        self.details
            .as_ref()
            .and_then(|d| d.get("errors"))
            .and_then(|e| e.as_array())
            .map(|errors| errors.iter().filter_map(|e| e.as_str()).collect())
            .unwrap_or_default()
    }
}

impl From<&RecommendationError> for ErrorResponse {
    fn from(err: &RecommendationError) -> Self {
        Self::new(err.to_string(), Some(err.details()))
    }
}

impl From<RecommendationError> for ErrorResponse {
    fn from(err: RecommendationError) -> Self {
        Self::from(&err)
    }
}

/// Errors returned by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Recommendation(#[from] RecommendationError),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Recommendation(e) => e.status_code(),
        }
    }

    fn body(&self) -> ErrorResponse {
        match self {
            Self::BadRequest(msg) => {
                ErrorResponse::new("Invalid request body", Some(json!({ "error": msg })))
            }
            Self::InvalidQuery(msg) => {
                ErrorResponse::new("Invalid query string", Some(json!({ "error": msg })))
            }
            Self::NotFound(msg) => ErrorResponse::new(msg.clone(), None),
            Self::Recommendation(e) => ErrorResponse::from(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Recommendation(e @ RecommendationError::Pipeline(_)) => {
                tracing::error!(error = ?e, "Recommendation pipeline failed");
            }
            _ => {
                tracing::warn!(error = %self, "API error");
            }
        }

        (self.status_code(), Json(self.body())).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
