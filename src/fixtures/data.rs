use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;

use super::types::{
    ChatRecord, ConfigRecord, DemoError, FeatureFlags, GenerateCompletion, MessageRecord,
    ModelRecord, Role,
};

/// Message returned for any resource the demo does not know about.
pub const NOT_IMPLEMENTED: &str = "Not implemented in demo";

/// Moment the fixture tables were first touched. All relative timestamps
/// derive from it so they stay consistent with each other.
static LOADED_AT: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

static MODELS: Lazy<Vec<ModelRecord>> = Lazy::new(|| {
    let modified = *LOADED_AT;
    vec![
        ModelRecord {
            id: "demo-model-1".to_string(),
            name: "Demo GPT-4 Model".to_string(),
            description: "Przykładowy model AI dla demonstracji".to_string(),
            version: "1.0.0".to_string(),
            size: "7B".to_string(),
            modified,
        },
        ModelRecord {
            id: "demo-model-2".to_string(),
            name: "Demo Claude Model".to_string(),
            description: "Inny przykładowy model AI".to_string(),
            version: "1.0.0".to_string(),
            size: "13B".to_string(),
            modified,
        },
    ]
});

static CHATS: Lazy<Vec<ChatRecord>> = Lazy::new(|| {
    // yesterday
    let started = *LOADED_AT - Duration::days(1);
    vec![ChatRecord {
        id: "demo-chat-1".to_string(),
        title: "Przykładowa rozmowa".to_string(),
        created_at: started,
        updated_at: started,
        messages: vec![
            MessageRecord {
                id: "msg-1".to_string(),
                role: Role::User,
                content: "Cześć! Jak działasz?".to_string(),
                timestamp: started,
            },
            MessageRecord {
                id: "msg-2".to_string(),
                role: Role::Assistant,
                content: "Witam! To jest wersja demonstracyjna Open WebUI. Obecnie działam w trybie \
                          offline bez połączenia z prawdziwymi modelami AI. Wszystkie odpowiedzi \
                          są przykładowe."
                    .to_string(),
                timestamp: started + Duration::seconds(5),
            },
        ],
    }]
});

static CONFIG: Lazy<ConfigRecord> = Lazy::new(|| ConfigRecord {
    version: "0.6.26-demo".to_string(),
    name: "Open WebUI Demo".to_string(),
    default_locale: "pl".to_string(),
    trusted_header_auth: false,
    oauth_enabled: false,
    signup_enabled: false,
    default_models: vec!["demo-model-1".to_string()],
    features: FeatureFlags {
        enable_signup: false,
        enable_login: false,
        enable_web_search: false,
        enable_image_generation: false,
    },
});

static COMPLETION: Lazy<GenerateCompletion> = Lazy::new(|| GenerateCompletion {
    response: "To jest przykładowa odpowiedź z trybu demonstracyjnego. W pełnej wersji tutaj \
               byłaby odpowiedź prawdziwego modelu AI."
        .to_string(),
    done: true,
});

static NOT_IMPLEMENTED_ERROR: Lazy<DemoError> = Lazy::new(|| DemoError {
    error: NOT_IMPLEMENTED.to_string(),
});

pub fn loaded_at() -> DateTime<Utc> {
    *LOADED_AT
}

/// Every model the demo advertises.
pub fn models() -> &'static [ModelRecord] {
    &MODELS
}

/// Every stored conversation.
pub fn chats() -> &'static [ChatRecord] {
    &CHATS
}

/// The chat used as template when a client creates a new conversation.
pub fn template_chat() -> &'static ChatRecord {
    &CHATS[0]
}

pub fn config() -> &'static ConfigRecord {
    &CONFIG
}

pub fn completion() -> &'static GenerateCompletion {
    &COMPLETION
}

pub fn not_implemented() -> &'static DemoError {
    &NOT_IMPLEMENTED_ERROR
}
