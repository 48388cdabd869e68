use serde_json::Value;
use comfy_table::{Table, Cell, ContentArrangement, Attribute, CellAlignment};
use colored::*;
use chrono::{DateTime, Utc};

use crate::fixtures::{ChatRecord, ConfigRecord, GenerateCompletion, ModelRecord};

/// Pulls the message out of an error-shaped payload.
pub(super) fn demo_error(value: &Value) -> Option<&str> {
    value.get("error").and_then(|e| e.as_str())
}

/// Decodes a payload, turning the error shape and decode failures into a
/// message for the user.
fn decode<T: serde::de::DeserializeOwned>(json_response: &str, what: &str) -> Result<T, String> {
    let value: Value = serde_json::from_str(json_response)
        .map_err(|e| format!("Failed to parse {}: {}", what, e))?;
    if let Some(message) = demo_error(&value) {
        return Err(format!("Server error: {}", message));
    }
    serde_json::from_value(value).map_err(|e| format!("Unexpected {} payload: {}", what, e))
}

fn header(label: &str) -> Cell {
    Cell::new(label).fg(comfy_table::Color::Cyan).add_attribute(Attribute::Bold)
}

fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Builds the table of available models.
pub(super) fn models_table(json_response: &str) -> Result<(Table, usize), String> {
    let models: Vec<ModelRecord> = decode(json_response, "model data")?;

    let mut table = Table::new();
    table
        .set_header(vec![
            header("#"),
            header("Id"),
            header("Name"),
            header("Size"),
            header("Version"),
            header("Modified"),
        ])
        .load_preset(comfy_table::presets::UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    for (i, model) in models.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1).fg(comfy_table::Color::White).set_alignment(CellAlignment::Center),
            Cell::new(&model.id).fg(comfy_table::Color::Yellow),
            Cell::new(&model.name).fg(comfy_table::Color::Green),
            Cell::new(&model.size).fg(comfy_table::Color::Blue).set_alignment(CellAlignment::Center),
            Cell::new(&model.version).fg(comfy_table::Color::Magenta).set_alignment(CellAlignment::Center),
            Cell::new(format_date(&model.modified)).fg(comfy_table::Color::DarkGrey),
        ]);
    }

    Ok((table, models.len()))
}

/// Builds the table of stored conversations.
pub(super) fn chats_table(json_response: &str) -> Result<(Table, usize), String> {
    let chats: Vec<ChatRecord> = decode(json_response, "chat data")?;

    let mut table = Table::new();
    table
        .set_header(vec![header("Id"), header("Title"), header("Messages"), header("Updated")])
        .load_preset(comfy_table::presets::UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    for chat in &chats {
        table.add_row(vec![
            Cell::new(&chat.id).fg(comfy_table::Color::Yellow),
            Cell::new(&chat.title).fg(comfy_table::Color::Green),
            Cell::new(chat.messages.len()).set_alignment(CellAlignment::Right),
            Cell::new(format_date(&chat.updated_at)).fg(comfy_table::Color::DarkGrey),
        ]);
    }

    Ok((table, chats.len()))
}

/// Key/value table of the backend configuration.
pub(super) fn config_table(json_response: &str) -> Result<Table, String> {
    let config: ConfigRecord = decode(json_response, "config")?;

    let mut table = Table::new();
    table
        .set_header(vec![header("Setting"), header("Value")])
        .load_preset(comfy_table::presets::UTF8_FULL);

    let rows = [
        ("Name", config.name.clone()),
        ("Version", config.version.clone()),
        ("Default locale", config.default_locale.clone()),
        ("Default models", config.default_models.join(", ")),
        ("Trusted header auth", config.trusted_header_auth.to_string()),
        ("OAuth", config.oauth_enabled.to_string()),
        ("Signup", config.features.enable_signup.to_string()),
        ("Login", config.features.enable_login.to_string()),
        ("Web search", config.features.enable_web_search.to_string()),
        ("Image generation", config.features.enable_image_generation.to_string()),
    ];
    for (key, value) in rows {
        table.add_row(vec![Cell::new(key).fg(comfy_table::Color::Yellow), Cell::new(value)]);
    }

    Ok(table)
}

/// Text of a finished completion.
pub(super) fn completion_text(json_response: &str) -> Result<String, String> {
    let completion: GenerateCompletion = decode(json_response, "completion")?;
    if !completion.done {
        return Err("Completion did not finish".to_string());
    }
    Ok(completion.response)
}

/// Prints the list of available models.
pub fn display_models_table(json_response: &str) {
    match models_table(json_response) {
        Ok((_, 0)) => println!("{}", "No models available".yellow()),
        Ok((table, count)) => {
            println!("\n{}", table);
            println!("{}", format!("Total models: {}", count).bright_green());
        }
        Err(e) => println!("{}", e.red()),
    }
}

pub fn display_chats_table(json_response: &str) {
    match chats_table(json_response) {
        Ok((_, 0)) => println!("{}", "No chats yet".yellow()),
        Ok((table, count)) => {
            println!("\n{}", table);
            println!("{}", format!("Total chats: {}", count).bright_green());
        }
        Err(e) => println!("{}", e.red()),
    }
}

pub fn display_config(json_response: &str) {
    match config_table(json_response) {
        Ok(table) => println!("\n{}", table),
        Err(e) => println!("{}", e.red()),
    }
}
