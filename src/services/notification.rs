//! Notification service implementation
//!
//! Delivers the replies and login notifications produced by the command
//! handlers. Delivery is best effort: a failed send is logged and the
//! remaining messages are still attempted. Nothing is retried.

use teloxide::{Bot, types::ChatId, prelude::Requester};
use tracing::{debug, info};

use crate::models::OutboundMessage;
use crate::utils::logging::log_delivery_failure;

/// Outcome of one delivery round
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryReport {
    pub sent: usize,
    pub failed: usize,
}

impl DeliveryReport {
    pub fn is_complete(&self) -> bool {
        self.failed == 0
    }
}

/// Sends outbound messages through the Telegram Bot API
#[derive(Clone)]
pub struct Outbox {
    bot: Bot,
}

impl Outbox {
    /// Create a new Outbox instance
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    /// Send messages in order, continuing past failures
    pub async fn deliver(&self, messages: Vec<OutboundMessage>) -> DeliveryReport {
        let mut report = DeliveryReport::default();

        for message in messages {
            let kind = message.kind.as_str();
            match self.bot.send_message(ChatId(message.chat_id), message.text).await {
                Ok(sent) => {
                    report.sent += 1;
                    debug!(chat_id = message.chat_id, kind = kind, message_id = sent.id.0, "Message sent");
                }
                Err(e) => {
                    report.failed += 1;
                    log_delivery_failure(message.chat_id, kind, &e.to_string());
                }
            }
        }

        if report.failed > 0 {
            info!(sent = report.sent, failed = report.failed, "Delivery finished with failures");
        }

        report
    }
}
