use axum::body::{to_bytes, Body};
use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use webui_demo::fixtures::{self, ChatRecord, ModelRecord};
use webui_demo::server::types::{ApiResponse, BuildInfo};
use webui_demo::server::ApiServer;
use webui_demo::simulator::DemoSimulator;

fn create_test_router() -> Router {
    ApiServer::new(DemoSimulator::instant(), "127.0.0.1".to_string(), 8080).router()
}

async fn call(app: &Router, method: &str, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, body.to_vec())
}

#[tokio::test]
async fn test_health_reports_build_info() {
    let app = create_test_router();
    let (status, _, body) = call(&app, "GET", "/health").await;
    assert_eq!(status, StatusCode::OK);

    let response: ApiResponse<BuildInfo> = serde_json::from_slice(&body).unwrap();
    assert_eq!(response.status, "success");
    assert_eq!(response.data, Some(BuildInfo::current()));
}

#[tokio::test]
async fn test_models_route() {
    let app = create_test_router();
    let (status, content_type, body) = call(&app, "GET", "/api/models").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));

    let models: Vec<ModelRecord> = serde_json::from_slice(&body).unwrap();
    assert_eq!(models, fixtures::models());
}

#[tokio::test]
async fn test_post_chat_gets_new_id() {
    let app = create_test_router();
    let (_, _, first) = call(&app, "POST", "/api/v1/chats/new").await;
    let (_, _, second) = call(&app, "POST", "/api/v1/chats/new").await;

    let first: ChatRecord = serde_json::from_slice(&first).unwrap();
    let second: ChatRecord = serde_json::from_slice(&second).unwrap();
    assert_ne!(first.id, second.id);
    assert_ne!(first.id, fixtures::template_chat().id);
}

#[tokio::test]
async fn test_query_string_reaches_classifier() {
    let app = create_test_router();
    let (_, _, body) = call(&app, "GET", "/api/v1/search?scope=config").await;
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["name"], "Open WebUI Demo");
}

#[tokio::test]
async fn test_unknown_route_is_ok_with_error_body() {
    let app = create_test_router();
    let (status, _, body) = call(&app, "DELETE", "/api/v1/users/42").await;
    assert_eq!(status, StatusCode::OK);

    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["error"], "Not implemented in demo");
}

#[tokio::test]
async fn test_other_methods_on_health_reach_simulator() {
    let app = create_test_router();
    for method in ["POST", "PUT", "DELETE"] {
        let (status, content_type, body) = call(&app, method, "/health").await;
        assert_eq!(status, StatusCode::OK, "{} /health", method);
        assert_eq!(content_type.as_deref(), Some("application/json"));

        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"], "Not implemented in demo");
    }
}
