//! Outbound message models

use chrono::{DateTime, Utc};

use crate::utils::helpers::{format_timestamp, or_placeholder};
use super::user::Sender;

/// Why a message is being sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutboundKind {
    /// Answer to the chat that issued a command
    Reply,
    /// Login report forwarded to the logging chat
    Notification,
}

impl OutboundKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutboundKind::Reply => "reply",
            OutboundKind::Notification => "notification",
        }
    }
}

/// A text message to be delivered through the Bot API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub chat_id: i64,
    pub text: String,
    pub kind: OutboundKind,
}

impl OutboundMessage {
    pub fn reply(chat_id: i64, text: impl Into<String>) -> Self {
        Self { chat_id, text: text.into(), kind: OutboundKind::Reply }
    }

    pub fn notification(chat_id: i64, text: impl Into<String>) -> Self {
        Self { chat_id, text: text.into(), kind: OutboundKind::Notification }
    }
}

/// Record of a user starting the bot, reported to the logging chat
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginNotification {
    pub user_id: i64,
    pub first_name: Option<String>,
    pub username: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl LoginNotification {
    pub fn new(sender: &Sender, timestamp: DateTime<Utc>) -> Self {
        Self {
            user_id: sender.id,
            first_name: sender.first_name.clone(),
            username: sender.username.clone(),
            timestamp,
        }
    }

    /// Render the notification text
    pub fn render(&self) -> String {
        format!(
            "📥 Новый вход:\n\
             🆔 ID: {}\n\
             👤 Имя: {}\n\
             💬 Username: @{}\n\
             🕒 Время: {}",
            self.user_id,
            or_placeholder(self.first_name.as_deref()),
            or_placeholder(self.username.as_deref()),
            format_timestamp(self.timestamp),
        )
    }
}
