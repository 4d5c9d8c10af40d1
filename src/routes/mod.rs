pub mod health;
pub mod recommend;

use axum::{http::Uri, routing::get, routing::post, Router};
use std::sync::Arc;

use crate::app::AppState;
use crate::error::ApiError;

/// Build the API router with all routes
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/example", get(recommend::example))
        .route("/recommend", post(recommend::recommend))
        .fallback(not_found)
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
