//! Command handlers module
//!
//! This module contains handlers for the bot commands, /start and /ping.
//! Handlers are pure: they turn an update into the messages that should be
//! sent, and the teloxide endpoint hands those to the outbox.

pub mod start;
pub mod ping;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use teloxide::{Bot, types::Message, utils::command::BotCommands};
use tracing::debug;

use crate::config::Settings;
use crate::models::{IncomingUpdate, OutboundMessage};
use crate::services::Outbox;
use crate::utils::errors::Result;

/// All available bot commands
#[derive(BotCommands, Clone, Copy, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Dualis Bot commands:")]
pub enum Command {
    #[command(description = "Start the bot and show welcome message")]
    Start,
    #[command(description = "Check that the bot is alive")]
    Ping,
}

/// Main command dispatcher
///
/// Updates without a recognised command produce no messages.
pub fn dispatch(
    update: &IncomingUpdate,
    settings: &Settings,
    now: DateTime<Utc>,
) -> Vec<OutboundMessage> {
    match update.command {
        Some(Command::Start) => start::handle_start(update, settings, now),
        Some(Command::Ping) => ping::handle_ping(update),
        None => Vec::new(),
    }
}

/// teloxide endpoint for parsed commands
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    settings: Arc<Settings>,
) -> Result<()> {
    let update = IncomingUpdate::from_message(&msg, Some(cmd));

    debug!(chat_id = update.chat_id, user_id = ?update.sender_id(), command = ?cmd, "Processing command");

    let outbound = dispatch(&update, &settings, Utc::now());
    Outbox::new(bot).deliver(outbound).await;

    Ok(())
}
