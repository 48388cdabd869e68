use std::collections::HashSet;
use std::time::Duration;

use axum::http::{Method, StatusCode};
use futures::future::join_all;
use tokio::time::Instant;

use webui_demo::fixtures::{self, ChatRecord, ConfigRecord, GenerateCompletion, ModelRecord};
use webui_demo::simulator::{
    mock_fetch, DemoSimulator, LatencyRange, RequestOptions, NEW_CHAT_PREFIX,
};

fn with_method(method: Method) -> RequestOptions {
    RequestOptions::new(method)
}

#[tokio::test]
async fn test_models_for_any_method() {
    let sim = DemoSimulator::instant();
    for method in [Method::GET, Method::POST, Method::DELETE] {
        let response = sim.fetch("/api/models", Some(&with_method(method))).await;
        assert_eq!(response.status(), StatusCode::OK);
        let models: Vec<ModelRecord> = response.json().unwrap();
        assert_eq!(models, fixtures::models());
    }
}

#[tokio::test]
async fn test_chats_list_without_post() {
    let sim = DemoSimulator::instant();

    let response = sim.fetch("/api/v1/chats", None).await;
    let chats: Vec<ChatRecord> = response.json().unwrap();
    assert_eq!(chats, fixtures::chats());

    let response = sim.fetch("/api/v1/chats", Some(&with_method(Method::PUT))).await;
    let chats: Vec<ChatRecord> = response.json().unwrap();
    assert_eq!(chats, fixtures::chats());
}

#[tokio::test]
async fn test_chat_post_creates_distinct_ids() {
    let sim = DemoSimulator::instant();
    let post = RequestOptions::post();

    let responses = join_all((0..50).map(|_| sim.fetch("/api/v1/chats/new", Some(&post)))).await;

    let mut ids = HashSet::new();
    for response in responses {
        let chat: ChatRecord = response.json().unwrap();
        assert!(chat.id.starts_with(NEW_CHAT_PREFIX));
        assert_ne!(chat.id, fixtures::template_chat().id);
        assert_eq!(chat.messages, fixtures::template_chat().messages);
        assert!(ids.insert(chat.id));
    }
    assert_eq!(ids.len(), 50);
}

#[tokio::test]
async fn test_config_matches_fixture() {
    let sim = DemoSimulator::instant();
    let response = sim.fetch("https://demo.local/api/config", None).await;
    let config: ConfigRecord = response.json().unwrap();
    assert_eq!(&config, fixtures::config());
}

#[tokio::test]
async fn test_generate_is_finished() {
    let sim = DemoSimulator::instant();
    let response = sim
        .fetch("/ollama/api/generate", Some(&RequestOptions::post()))
        .await;
    let completion: GenerateCompletion = response.json().unwrap();
    assert!(completion.done);
    assert!(!completion.response.is_empty());
    assert!(response.demo_error().is_none());
}

#[tokio::test]
async fn test_unknown_target_still_succeeds() {
    let sim = DemoSimulator::instant();
    let response = sim.fetch("/api/v1/auths/signin", Some(&RequestOptions::post())).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.content_type(), Some("application/json"));
    assert_eq!(response.demo_error().as_deref(), Some(fixtures::NOT_IMPLEMENTED));
}

#[tokio::test(start_paused = true)]
async fn test_latency_within_bounds() {
    let sim = DemoSimulator::new(LatencyRange::default());
    for target in ["/api/models", "/api/v1/chats", "/api/config", "/api/generate", "/nope"] {
        let started = Instant::now();
        let response = sim.fetch(target, None).await;
        let elapsed = started.elapsed();
        assert!(response.ok());
        assert!(elapsed >= Duration::from_millis(100), "{:?} too fast", elapsed);
        assert!(elapsed < Duration::from_millis(600), "{:?} too slow", elapsed);
    }
}

#[tokio::test(start_paused = true)]
async fn test_mock_fetch_uses_default_latency() {
    let started = Instant::now();
    let response = mock_fetch("/api/config", None).await;
    let elapsed = started.elapsed();
    assert!(response.ok());
    assert!(elapsed >= Duration::from_millis(100));
    assert!(elapsed < Duration::from_millis(600));
}

#[tokio::test(start_paused = true)]
async fn test_fixed_latency() {
    let sim = DemoSimulator::new(LatencyRange::new(250, 250));
    let started = Instant::now();
    sim.fetch("/api/models", None).await;
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(250));
    assert!(elapsed < Duration::from_millis(252));
}

#[tokio::test(start_paused = true)]
async fn test_instant_simulator_does_not_wait() {
    let sim = DemoSimulator::instant();
    let started = Instant::now();
    sim.fetch("/api/models", None).await;
    assert_eq!(started.elapsed(), Duration::ZERO);
}
