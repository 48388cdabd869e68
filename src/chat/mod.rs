// Table and text rendering of server payloads
mod display;

// The chat_loop logic
mod chat;

mod command_handlers;

pub use chat::chat_loop;
