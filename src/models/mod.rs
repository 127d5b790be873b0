//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod user;
pub mod update;
pub mod outbound;

// Re-export commonly used models
pub use user::Sender;
pub use update::IncomingUpdate;
pub use outbound::{OutboundMessage, OutboundKind, LoginNotification};
pub use crate::utils::helpers::PLACEHOLDER;
