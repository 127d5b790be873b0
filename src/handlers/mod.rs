//! Bot handlers module
//!
//! Command handlers for /start and /ping. Anything else is ignored by the
//! dispatcher schema in [`crate::bot`].

pub mod commands;

// Re-export commonly used handler functions
pub use commands::{Command, dispatch, handle_command};
