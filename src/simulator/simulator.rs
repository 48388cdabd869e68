use std::sync::atomic::{AtomicI64, Ordering};

use axum::http::Method;
use chrono::Utc;
use once_cell::sync::Lazy;
use tracing::debug;

use crate::fixtures::{self, ChatRecord};
use super::latency::LatencyRange;
use super::resource::ResourceKind;
use super::response::MockResponse;

/// Prefix of identifiers handed out to newly created chats
pub const NEW_CHAT_PREFIX: &str = "demo-chat-";

/// Options accompanying a simulated request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    pub method: Method,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self { method }
    }

    pub fn post() -> Self {
        Self::new(Method::POST)
    }
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::new(Method::GET)
    }
}

/// Answers requests with canned fixture data after an artificial delay.
///
/// The simulator never fails: a target it does not recognise resolves to a
/// `200 OK` whose body is the error payload. The fixtures are read-only, so
/// a single instance can serve any number of concurrent calls.
#[derive(Debug)]
pub struct DemoSimulator {
    latency: LatencyRange,
    /// Last millisecond stamp used for a new chat id
    last_chat_stamp: AtomicI64,
}

impl DemoSimulator {
    pub fn new(latency: LatencyRange) -> Self {
        Self {
            latency,
            last_chat_stamp: AtomicI64::new(0),
        }
    }

    /// A simulator that answers immediately.
    pub fn instant() -> Self {
        Self::new(LatencyRange::zero())
    }

    pub fn latency(&self) -> LatencyRange {
        self.latency
    }

    /// Simulates a fetch of `target`. `None` options mean a GET.
    pub async fn fetch(&self, target: &str, options: Option<&RequestOptions>) -> MockResponse {
        let method = options.map(|o| &o.method).unwrap_or(&Method::GET);
        let kind = ResourceKind::classify(target);
        debug!("Demo request {} {} -> {}", method, target, kind);

        let delay = self.latency.sample();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        self.respond(kind, method)
    }

    /// Builds the response for an already classified request.
    pub fn respond(&self, kind: ResourceKind, method: &Method) -> MockResponse {
        match kind {
            ResourceKind::Models => MockResponse::json_ok(fixtures::models()),
            ResourceKind::Chats if *method == Method::POST => {
                MockResponse::json_ok(&self.new_chat())
            }
            ResourceKind::Chats => MockResponse::json_ok(fixtures::chats()),
            ResourceKind::Config => MockResponse::json_ok(fixtures::config()),
            ResourceKind::Generate => MockResponse::json_ok(fixtures::completion()),
            ResourceKind::Unknown => MockResponse::json_ok(fixtures::not_implemented()),
        }
    }

    /// Copies the template chat under a freshly stamped id.
    pub fn new_chat(&self) -> ChatRecord {
        let mut chat = fixtures::template_chat().clone();
        chat.id = format!("{}{}", NEW_CHAT_PREFIX, self.next_chat_stamp());
        chat
    }

    /// Current unix millis, bumped past the previous stamp so ids stay
    /// unique when calls share a millisecond.
    fn next_chat_stamp(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let mut last = self.last_chat_stamp.load(Ordering::Relaxed);
        loop {
            let next = now.max(last + 1);
            match self.last_chat_stamp.compare_exchange_weak(
                last,
                next,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return next,
                Err(actual) => last = actual,
            }
        }
    }
}

impl Default for DemoSimulator {
    fn default() -> Self {
        Self::new(LatencyRange::default())
    }
}

static DEFAULT_SIMULATOR: Lazy<DemoSimulator> = Lazy::new(DemoSimulator::default);

/// Fetch-shaped entry point backed by a process-wide simulator with the
/// default 100-600ms latency.
pub async fn mock_fetch(target: &str, options: Option<&RequestOptions>) -> MockResponse {
    DEFAULT_SIMULATOR.fetch(target, options).await
}
