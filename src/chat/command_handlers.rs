use crate::chat::display::{
    completion_text, demo_error, display_chats_table, display_config, display_models_table,
};
use crate::fixtures::ChatRecord;
use crate::server::types::{ApiResponse, BuildInfo};
use colored::*;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

/// Body sent to the generate endpoint
#[derive(Serialize, Debug)]
struct GenerateRequest<'a> {
    chat_id: Option<&'a str>,
    prompt: &'a str,
}

/// Shared resources for the command handlers.
///
/// * `client` - HTTP client used for making API requests to the server
/// * `server_url` - Base URL of the server API
/// * `current_chat` - Id of the conversation opened with `new`, if any
pub(super) struct ChatContext<'a> {
    pub client: &'a Client,
    pub server_url: &'a str,
    pub current_chat: &'a mut Option<String>,
}

async fn get_text(context: &ChatContext<'_>, path: &str) -> Result<String, reqwest::Error> {
    context
        .client
        .get(format!("{}{}", context.server_url, path))
        .send()
        .await?
        .text()
        .await
}

pub(super) async fn handle_list_models(context: &ChatContext<'_>) {
    match get_text(context, "/api/models").await {
        Ok(text) => display_models_table(&text),
        Err(e) => println!("Error requesting models: {}", e),
    }
}

pub(super) async fn handle_list_chats(context: &ChatContext<'_>) {
    match get_text(context, "/api/v1/chats").await {
        Ok(text) => display_chats_table(&text),
        Err(e) => println!("Error requesting chats: {}", e),
    }
}

pub(super) async fn handle_show_config(context: &ChatContext<'_>) {
    match get_text(context, "/api/config").await {
        Ok(text) => display_config(&text),
        Err(e) => println!("Error requesting config: {}", e),
    }
}

pub(super) async fn handle_health(context: &ChatContext<'_>) {
    match get_text(context, "/health").await {
        Ok(text) => match serde_json::from_str::<ApiResponse<BuildInfo>>(&text) {
            Ok(ApiResponse { data: Some(info), .. }) => println!(
                "Server is up: version {} ({})",
                info.version.bright_green(),
                info.build_hash
            ),
            _ => println!("Failed to parse health response"),
        },
        Err(e) => println!("Error requesting health: {}", e),
    }
}

/// Opens a new conversation and makes it the current one.
pub(super) async fn handle_new_chat(context: &mut ChatContext<'_>) {
    let url = format!("{}/api/v1/chats/new", context.server_url);
    let text = match context.client.post(url).send().await {
        Ok(response) => match response.text().await {
            Ok(text) => text,
            Err(e) => return println!("Error reading response: {}", e),
        },
        Err(e) => return println!("Error creating chat: {}", e),
    };

    if let Ok(value) = serde_json::from_str::<Value>(&text) {
        if let Some(message) = demo_error(&value) {
            return println!("Error: {}", message);
        }
    }

    match serde_json::from_str::<ChatRecord>(&text) {
        Ok(chat) => {
            println!("Created chat {} ({})", chat.id.bright_green(), chat.title);
            *context.current_chat = Some(chat.id);
        }
        Err(e) => println!("Failed to parse chat: {}", e),
    }
}

/// Sends a prompt and prints the completion.
pub(super) async fn handle_generate(context: &ChatContext<'_>, prompt: &str) {
    let url = format!("{}/api/generate", context.server_url);
    let request = GenerateRequest {
        chat_id: context.current_chat.as_deref(),
        prompt,
    };

    match context.client.post(url).json(&request).send().await {
        Ok(response) => match response.text().await {
            Ok(text) => match completion_text(&text) {
                Ok(reply) => println!("{} {}", "[assistant]".bright_cyan(), reply),
                Err(e) => println!("{}", e.red()),
            },
            Err(e) => println!("Error reading response: {}", e),
        },
        Err(e) => println!("Error sending prompt: {}", e),
    }
}
