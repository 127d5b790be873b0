//! Incoming update model

use teloxide::types::Message;

use crate::handlers::commands::Command;
use super::user::Sender;

/// The parts of a Telegram update the command handlers look at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingUpdate {
    /// Chat the update originated from
    pub chat_id: i64,
    pub sender: Option<Sender>,
    pub command: Option<Command>,
    /// Whether the update carries a user-visible message that can be replied to
    pub has_message: bool,
}

impl IncomingUpdate {
    /// Build an update from a teloxide message and its parsed command
    pub fn from_message(msg: &Message, command: Option<Command>) -> Self {
        Self {
            chat_id: msg.chat.id.0,
            sender: msg.from.as_ref().map(Sender::from),
            command,
            has_message: true,
        }
    }

    /// Build a command update for a private chat with `sender`
    pub fn private_command(sender: Sender, command: Command) -> Self {
        Self {
            chat_id: sender.id,
            sender: Some(sender),
            command: Some(command),
            has_message: true,
        }
    }

    pub fn sender_id(&self) -> Option<i64> {
        self.sender.as_ref().map(|s| s.id)
    }
}
