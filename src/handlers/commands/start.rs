//! Start command handler
//!
//! Greets the user and reports the login to the logging chat.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::config::Settings;
use crate::models::{IncomingUpdate, LoginNotification, OutboundMessage, Sender};
use crate::utils::logging::log_user_action;

/// Greeting sent in reply to /start
pub const GREETING: &str = "🤖 Dualis Robot greets you!\nLearn more about our services in the Dualis app.";

/// Handle /start command
///
/// Produces the greeting (when there is a message to reply to) followed by
/// at most one login notification.
pub fn handle_start(
    update: &IncomingUpdate,
    settings: &Settings,
    now: DateTime<Utc>,
) -> Vec<OutboundMessage> {
    let mut outbound = Vec::with_capacity(2);

    if update.has_message {
        outbound.push(OutboundMessage::reply(update.chat_id, GREETING));
    }

    if let Some(sender) = &update.sender {
        log_user_action(sender.id, "start", None);

        match settings.bot.log_chat_id {
            Some(log_chat_id) if should_notify(settings, sender) => {
                let notification = LoginNotification::new(sender, now);
                outbound.push(OutboundMessage::notification(log_chat_id, notification.render()));
            }
            _ => {
                debug!(user_id = sender.id, "Login notification skipped");
            }
        }
    }

    outbound
}

/// A login is reported only when a logging chat is configured and the
/// user is not the operator.
pub fn should_notify(settings: &Settings, sender: &Sender) -> bool {
    settings.logging_enabled() && sender.id != settings.bot.owner_id
}
