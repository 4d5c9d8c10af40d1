//! Router tests for the HTTP surface.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use infrajudge_backend::app::{create_app, AppState};
use infrajudge_backend::config::Settings;

fn app() -> Router {
    create_app(AppState::new(Settings::default()))
}

async fn send(app: Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Vec<u8>, Option<String>) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .expect("request");

    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    (status, bytes.to_vec(), content_type)
}

async fn send_json(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = body.map(|b| b.to_string());
    let (status, bytes, _) = send(app, method, uri, body.as_deref()).await;
    (status, serde_json::from_slice(&bytes).expect("json body"))
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = send_json(app(), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "InfraJudge");
}

#[tokio::test]
async fn example_payload_is_a_valid_request() {
    let (status, body) = send_json(app(), Method::GET, "/example", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "POST to /recommend with this format:");
    assert_eq!(body["example"]["appType"], "Startup");

    let (status, out) = send_json(app(), Method::POST, "/recommend", Some(body["example"].clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(out["architecture"]["pattern"], "fully-serverless");
}

#[tokio::test]
async fn recommend_returns_formatted_output() {
    let input = json!({
        "appType": "Enterprise",
        "budget": "High",
        "expectedUsers": 100000,
        "traffic": "High",
        "securityLevel": "High",
        "workloadType": "Web App"
    });
    let (status, out) = send_json(app(), Method::POST, "/recommend", Some(input)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(out["architecture"]["compute"], "ECS");
    assert_eq!(out["architecture"]["database"], "RDS");
    assert_eq!(out["architecture"]["storage"], "S3");
    assert_eq!(out["architecture"]["apiLoadBalancing"], "ALB");
    assert_eq!(out["costTradeoffSummary"]["estimatedCostLevel"], "High");
    assert_eq!(out["comparisonTables"]["apiLoadBalancing"]["layerName"], "API/Load Balancing");
    assert!(out["userContextSummary"]
        .as_str()
        .unwrap()
        .starts_with("You're building a Enterprise application"));
}

#[tokio::test]
async fn validation_failures_are_400_with_all_errors() {
    let input = json!({ "budget": "Cheap", "workloadType": "API-based" });
    let (status, body) = send_json(app(), Method::POST, "/recommend", Some(input)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], true);
    assert_eq!(body["message"], "Invalid user context provided");
    assert_eq!(body["details"]["errors"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn non_object_body_is_a_capture_error() {
    let (status, body) = send_json(app(), Method::POST, "/recommend", Some(json!([1, 2]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Failed to capture user context");
}

#[tokio::test]
async fn malformed_json_is_rejected_in_error_shape() {
    let (status, bytes, _) = send(app(), Method::POST, "/recommend", Some("{not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], true);
    assert_eq!(body["message"], "Invalid request body");
}

#[tokio::test]
async fn markdown_format_returns_document() {
    let input = json!({
        "appType": "ML",
        "budget": "Medium",
        "expectedUsers": 5000,
        "traffic": "Medium",
        "securityLevel": "Medium",
        "workloadType": "Machine Learning"
    })
    .to_string();
    let (status, bytes, content_type) =
        send(app(), Method::POST, "/recommend?format=markdown", Some(&input)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/markdown"));
    let doc = String::from_utf8(bytes).unwrap();
    assert!(doc.starts_with("# AWS Cloud Architecture Recommendation"));
    assert!(doc.contains("### Compute: EC2"));
}

#[tokio::test]
async fn request_id_is_echoed() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .header("x-request-id", "req-42")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "req-42");
}

#[tokio::test]
async fn unknown_routes_use_error_shape() {
    let (status, body) = send_json(app(), Method::GET, "/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], true);
    assert_eq!(body["message"], "No route for /nope");
}

#[tokio::test]
async fn unknown_output_format_uses_error_shape() {
    let (status, bytes, content_type) = send(
        app(),
        Method::POST,
        "/recommend?format=xml",
        Some(r#"{"appType":"SaaS","workloadType":"Web App"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(content_type.unwrap().starts_with("application/json"));
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], true);
    assert_eq!(body["message"], "Invalid query string");
    assert!(body["details"]["error"].as_str().unwrap().contains("xml"));
}

#[tokio::test]
async fn non_string_level_is_a_validation_error() {
    let input = json!({ "budget": 5, "workloadType": "Web" });
    let (status, body) = send_json(app(), Method::POST, "/recommend", Some(input)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid user context provided");
    assert_eq!(body["details"]["errors"].as_array().unwrap().len(), 2);
}
