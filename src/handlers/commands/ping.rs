//! Ping command handler

use crate::models::{IncomingUpdate, OutboundMessage};

/// Liveness confirmation sent in reply to /ping
pub const PING_REPLY: &str = "✅ Бот живой!";

/// Handle /ping command
pub fn handle_ping(update: &IncomingUpdate) -> Vec<OutboundMessage> {
    vec![OutboundMessage::reply(update.chat_id, PING_REPLY)]
}
