//! Dispatcher wiring and update delivery
//!
//! Builds the handler tree and runs it either with long polling or behind a
//! webhook, depending on [`Settings::run_mode`].

use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use teloxide::dispatching::{DefaultKey, UpdateHandler};
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::update_listeners::{webhooks, UpdateListener};
use tracing::{debug, error, info};
use url::Url;

use crate::config::{RunMode, Settings};
use crate::handlers::{Command, handle_command};
use crate::utils::errors::{BotError, Result};
use crate::web;

/// Create the main update handler
///
/// Only messages carrying a known command reach an endpoint; everything else
/// falls through to the default handler.
pub fn create_handler() -> UpdateHandler<BotError> {
    Update::filter_message().branch(
        dptree::entry()
            .filter_command::<Command>()
            .endpoint(handle_command),
    )
}

/// Build the dispatcher with the settings registered as a dependency
pub fn create_dispatcher(bot: Bot, settings: Arc<Settings>) -> Dispatcher<Bot, BotError, DefaultKey> {
    Dispatcher::builder(bot, create_handler())
        .dependencies(dptree::deps![settings])
        .default_handler(|upd| async move {
            debug!(update_id = ?upd.id, "Ignoring unhandled update");
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "An error has occurred in the dispatcher",
        ))
        .enable_ctrlc_handler()
        .build()
}

/// Run the bot until shutdown
pub async fn run(settings: Settings) -> Result<()> {
    let bot = Bot::new(&settings.bot.token);
    let mode = settings.run_mode();
    let port = settings.server.port;
    let webhook_endpoint = settings.bot.webhook_endpoint()?;
    let settings = Arc::new(settings);

    let mut dispatcher = create_dispatcher(bot.clone(), settings);

    match (mode, webhook_endpoint) {
        (RunMode::Webhook { .. }, Some(endpoint)) => {
            run_webhook(bot, &mut dispatcher, endpoint, port).await?;
        }
        _ => {
            info!("WEBHOOK_URL not set, starting in polling mode");
            dispatcher.dispatch().await;
        }
    }

    info!("Bot has been shut down");
    Ok(())
}

/// Register the webhook with Telegram and build the HTTP app
///
/// The returned router serves webhook deliveries on the endpoint path and
/// the health route on `/`.
pub async fn build_webhook_app(
    bot: Bot,
    endpoint: Url,
    address: SocketAddr,
) -> Result<(
    impl UpdateListener<Err = Infallible>,
    impl Future<Output = ()> + Send,
    axum::Router,
)> {
    let options = webhooks::Options::new(address, endpoint);
    let (listener, stop_flag, webhook_router) = webhooks::axum_to_router(bot, options).await?;
    Ok((listener, stop_flag, webhook_router.merge(web::router())))
}

/// Register the webhook and serve deliveries plus the health route
async fn run_webhook(
    bot: Bot,
    dispatcher: &mut Dispatcher<Bot, BotError, DefaultKey>,
    endpoint: Url,
    port: u16,
) -> Result<()> {
    let address = SocketAddr::from(([0, 0, 0, 0], port));
    info!(url = %endpoint, %address, "Starting in webhook mode");

    let (listener, stop_flag, app) = build_webhook_app(bot, endpoint, address).await?;

    let tcp = tokio::net::TcpListener::bind(address).await?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(tcp, app).with_graceful_shutdown(stop_flag).await {
            error!(error = %e, "HTTP server stopped with an error");
        }
    });

    dispatcher
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;

    Ok(())
}
