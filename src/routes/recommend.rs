//! Recommendation endpoints.
//!
//! POST /recommend runs the pipeline on the JSON body. The pipeline itself is
//! synchronous and cheap, so it runs inline on the request task.

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::middleware::request_id::RequestIdExt;
use crate::services::{formatter, referee};

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Markdown,
}

#[derive(Debug, Default, Deserialize)]
pub struct RecommendQuery {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
pub struct ExampleResponse {
    pub message: String,
    pub example: Value,
}

/// Generate a recommendation.
///
/// POST /recommend[?format=markdown]
pub async fn recommend(
    headers: HeaderMap,
    query: Result<Query<RecommendQuery>, QueryRejection>,
    body: Bytes,
) -> ApiResult<Response> {
    let Query(query) = query.map_err(|e| ApiError::InvalidQuery(e.body_text()))?;
    let request_id = headers.request_id().unwrap_or("-").to_string();

    let raw: Value = serde_json::from_slice(&body)
        .map_err(|e| ApiError::BadRequest(format!("body is not valid JSON: {e}")))?;

    let output = referee::generate_recommendation(&raw)?;

    tracing::debug!(
        request_id = %request_id,
        format = ?query.format,
        pattern = %output.architecture.pattern,
        "Recommendation generated"
    );

    let response = match query.format {
        OutputFormat::Json => Json(output).into_response(),
        OutputFormat::Markdown => (
            [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
            formatter::format_as_string(&output),
        )
            .into_response(),
    };

    Ok(response)
}

/// Sample request body.
///
/// GET /example
pub async fn example() -> Json<ExampleResponse> {
    Json(ExampleResponse {
        message: "POST to /recommend with this format:".to_string(),
        example: referee::sample_input(),
    })
}
