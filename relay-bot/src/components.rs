//! Component factory: builds the Telegram bot, relay and router from config. Keeps assembly out of the runner.

use std::sync::Arc;

use anyhow::Result;
use event_router::Router;
use relay_core::Bot;
use relay_telegram::TelegramBotAdapter;
use tracing::instrument;

use crate::config::BotConfig;
use crate::handlers::{
    DocumentHandler, LoggingHandler, MenuCallbackHandler, StartHandler, TextHandler,
};
use crate::relay::FileRelay;

/// Dependencies shared by every event.
#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: teloxide::Bot,
    pub bot: Arc<dyn Bot>,
    pub relay: Arc<FileRelay>,
}

/// Builds BotComponents from config.
#[instrument(skip(config))]
pub fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let teloxide_bot = config.telegram.build_bot()?;
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let relay = Arc::new(FileRelay::new(
        bot.clone(),
        config.review_chat(),
        config.temp_dir.clone(),
    ));
    Ok(BotComponents {
        teloxide_bot,
        bot,
        relay,
    })
}

/// Builds the router (logging → /start → menu buttons → documents → free text).
/// Works with any [`Bot`], so tests can drive it without Telegram. `bot_username` (from get_me)
/// tells commands for this bot apart from `/command@other_bot`.
pub fn build_router(
    bot: Arc<dyn Bot>,
    relay: Arc<FileRelay>,
    bot_username: Option<String>,
) -> Router {
    Router::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(StartHandler::new(
            bot.clone(),
            bot_username.clone(),
        )))
        .add_handler(Arc::new(MenuCallbackHandler::new(bot.clone())))
        .add_handler(Arc::new(DocumentHandler::new(bot.clone(), relay)))
        .add_handler(Arc::new(TextHandler::new(bot, bot_username)))
}
