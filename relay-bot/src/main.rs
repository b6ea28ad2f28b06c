//! Binary for the file relay bot.

use anyhow::Result;
use clap::Parser;
use relay_bot::{load_config, run_bot, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            token,
            review_chat_id,
        } => {
            let config = load_config(token, review_chat_id)?;
            run_bot(config).await
        }
    }
}
