use axum::body::{Body, Bytes};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::error;

use crate::fixtures;

const JSON_CONTENT_TYPE: &str = "application/json";

/// A synthesized HTTP response carrying a JSON body.
#[derive(Debug, Clone)]
pub struct MockResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl MockResponse {
    /// Wraps a serializable payload in a `200 OK` JSON response.
    pub fn json_ok<T: Serialize + ?Sized>(payload: &T) -> Self {
        let body = match serde_json::to_vec(payload) {
            Ok(bytes) => bytes,
            Err(e) => {
                error!("Failed to serialize demo payload: {}", e);
                fallback_body()
            }
        };

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));

        Self {
            status: StatusCode::OK,
            headers,
            body: Bytes::from(body),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// True for any 2xx status.
    pub fn ok(&self) -> bool {
        self.status.is_success()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Body as text. Bodies are always produced by serde_json, so this only
    /// yields an empty string if that invariant is broken.
    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.body).unwrap_or_default()
    }

    /// Decodes the body into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// Returns the message when the payload is the error shape.
    ///
    /// Unknown resources still answer `200 OK`; this is how a caller tells
    /// them apart from real data.
    pub fn demo_error(&self) -> Option<String> {
        let value: serde_json::Value = self.json().ok()?;
        value.get("error")?.as_str().map(str::to_string)
    }
}

fn fallback_body() -> Vec<u8> {
    format!("{{\"error\":\"{}\"}}", fixtures::NOT_IMPLEMENTED).into_bytes()
}

impl IntoResponse for MockResponse {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }
}
