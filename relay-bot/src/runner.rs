//! Entry point: validate config, init logging, prepare scratch space, build components, dispatch.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use relay_core::init_tracing;
use relay_telegram::{fetch_bot_username, run_dispatcher};
use tracing::info;

use crate::components::{build_bot_components, build_router};
use crate::config::BotConfig;

/// Creates the scratch directory if it is missing.
pub fn prepare_temp_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create temp directory {}", dir.display()))
}

/// Runs the bot until Ctrl-C.
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;
    prepare_temp_dir(&config.temp_dir)?;

    info!(
        review_chat_id = config.review_chat_id,
        temp_dir = %config.temp_dir.display(),
        log_file = %config.log_file,
        "Initializing bot"
    );

    let components = build_bot_components(&config)?;
    let bot_username = fetch_bot_username(&components.teloxide_bot).await;
    let router = build_router(
        components.bot.clone(),
        components.relay.clone(),
        bot_username,
    );

    run_dispatcher(components.teloxide_bot.clone(), router).await
}
