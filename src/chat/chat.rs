use anyhow::Context;
use rustyline::DefaultEditor;
use std::io::Write;
use colored::*;

use super::command_handlers::{
    ChatContext,
    handle_generate,
    handle_health,
    handle_list_chats,
    handle_list_models,
    handle_new_chat,
    handle_show_config,
};

const CYAN: &str = "\x1b[36m";
const BRIGHT_CYAN: &str = "\x1b[96m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

fn print_help() {
    println!("\n{CYAN}Demo Chat Commands{RESET}");
    println!("{BRIGHT_CYAN}{}{RESET}", "=".repeat(60));
    println!("{GREEN}exit, bye, quit{RESET} - Exit the chat");
    println!("{GREEN}help{RESET}            - Show this help message");
    println!("{GREEN}clear{RESET}           - Clear the screen");
    println!("{GREEN}models{RESET}          - List available models");
    println!("{GREEN}chats{RESET}           - List stored conversations");
    println!("{GREEN}new{RESET}             - Start a new conversation");
    println!("{GREEN}config{RESET}          - Show the backend configuration");
    println!("{GREEN}health{RESET}          - Show server version");
    println!("Anything else is sent to the model as a prompt.");
    println!();
}

// --- Main Chat Loop ---

pub async fn chat_loop(server_url: &str) -> anyhow::Result<()> {
    println!("Starting chat session against {}", server_url);
    print_help();

    let mut rl = DefaultEditor::new().context("Failed to initialise line editor")?;
    let client = reqwest::Client::new();
    let mut current_chat: Option<String> = None;

    loop {
        let prompt_prefix = match &current_chat {
            Some(_) => "[you] > ",
            None => "> ",
        };

        let input = match rl.readline(prompt_prefix) {
            Ok(input) => input,
            Err(_) => {
                println!("Goodbye!");
                break;
            }
        };

        let input_trimmed = input.trim();
        if input_trimmed.is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(input_trimmed);

        let command_lowercase = input_trimmed.to_lowercase();
        if ["exit", "bye", "quit"].contains(&command_lowercase.as_str()) {
            println!("Goodbye!");
            break;
        }

        let mut context = ChatContext {
            client: &client,
            server_url,
            current_chat: &mut current_chat,
        };

        match command_lowercase.as_str() {
            "help" => print_help(),
            "clear" => {
                print!("\x1B[2J\x1B[1;1H");
                std::io::stdout().flush().context("Failed to flush stdout")?;
            }
            "models" => handle_list_models(&context).await,
            "chats" => handle_list_chats(&context).await,
            "new" => handle_new_chat(&mut context).await,
            "config" => handle_show_config(&context).await,
            "health" => handle_health(&context).await,
            _ => {
                if context.current_chat.is_none() {
                    println!("{}", "No conversation open, the prompt goes to a scratch chat. Use 'new' to open one.".dimmed());
                }
                handle_generate(&context, input_trimmed).await
            }
        }
    }
    Ok(())
}
