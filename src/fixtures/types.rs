use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};

/// A model entry as listed by the models endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ModelRecord {
    /// Stable identifier (e.g. "demo-model-1")
    pub id: String,
    /// Human-readable name of the model
    pub name: String,
    pub description: String,
    pub version: String,
    /// Size category of the model (e.g., "7B", "13B")
    pub size: String,
    /// When the model was last modified
    pub modified: DateTime<Utc>,
}

/// Who authored a chat message.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MessageRecord {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// A conversation. Messages are kept in the order they were exchanged.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChatRecord {
    pub id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub messages: Vec<MessageRecord>,
}

/// Feature switches advertised to the web client
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FeatureFlags {
    pub enable_signup: bool,
    pub enable_login: bool,
    pub enable_web_search: bool,
    pub enable_image_generation: bool,
}

/// Backend configuration bundle returned by the config endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ConfigRecord {
    pub version: String,
    /// Product name shown by the client
    pub name: String,
    pub default_locale: String,
    pub trusted_header_auth: bool,
    pub oauth_enabled: bool,
    pub signup_enabled: bool,
    pub default_models: Vec<String>,
    pub features: FeatureFlags,
}

/// Canned reply of the generate endpoint
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GenerateCompletion {
    pub response: String,
    pub done: bool,
}

/// Error payload. It travels inside a successful response, never as a
/// transport failure.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DemoError {
    pub error: String,
}
