//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::BotConfig;

#[derive(Parser)]
#[command(name = "relay-bot")]
#[command(about = "Telegram bot that forwards uploaded files to a review chat", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (config from env; flags override BOT_TOKEN and REVIEW_CHAT_ID).
    Run {
        #[arg(short, long)]
        token: Option<String>,
        #[arg(short, long, allow_negative_numbers = true)]
        review_chat_id: Option<i64>,
    },
}

/// Load BotConfig from environment with CLI overrides.
pub fn load_config(token: Option<String>, review_chat_id: Option<i64>) -> Result<BotConfig> {
    BotConfig::load(token, review_chat_id)
}
