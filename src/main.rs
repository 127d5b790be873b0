//! Dualis Telegram Bot
//!
//! Main application entry point

use tracing::info;

use dualis_bot::{bot, config::Settings, utils::logging};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine
    dotenv::dotenv().ok();

    // Load configuration; an invalid configuration exits before any mode is entered
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", dualis_bot::info());
    info!(
        logging_enabled = settings.logging_enabled(),
        owner_id = settings.bot.owner_id,
        mode = ?settings.run_mode(),
        "Configuration loaded"
    );

    bot::run(settings).await?;

    Ok(())
}
