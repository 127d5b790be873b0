//! Dualis Telegram Bot
//!
//! Answers `/start` and `/ping`, forwards login notifications to a logging
//! chat, and serves a liveness endpoint when running behind a webhook.

pub mod bot;
pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;
pub mod web;

// Re-export commonly used types
pub use config::{Settings, RunMode};
pub use utils::errors::{BotError, Result};

// Re-export main components for easy access
pub use handlers::{Command, dispatch};
pub use services::Outbox;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
