use axum::{
    Json,
    extract::State,
    http::{Method, Uri},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::info;

use crate::simulator::{DemoSimulator, MockResponse, RequestOptions};
use super::types::{ApiResponse, BuildInfo};

/// Returns a health check response with the build information
pub async fn health_check() -> impl IntoResponse {
    info!("Health check endpoint called");
    Json(ApiResponse::success(BuildInfo::current()))
}

/// Answers any other request from the demo simulator.
///
/// The target handed to the simulator is the path plus query string, so
/// classification sees the same string a browser-side fetch would.
pub async fn simulate(
    State(simulator): State<Arc<DemoSimulator>>,
    method: Method,
    uri: Uri,
) -> MockResponse {
    let target = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    info!("Demo endpoint called: {} {}", method, target);

    simulator.fetch(target, Some(&RequestOptions::new(method))).await
}
