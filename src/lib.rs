//! Offline demonstration backend for a web chat interface.
//!
//! Canned models, chats and configuration are served through the
//! [`simulator`] with simulated network latency, either in-process via
//! [`simulator::mock_fetch`] or over HTTP via [`server::ApiServer`].

pub mod chat;
pub mod config;
pub mod fixtures;
pub mod server;
pub mod simulator;
