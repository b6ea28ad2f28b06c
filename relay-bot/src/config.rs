//! Bot configuration: Telegram connectivity plus relay settings. Loaded from env; CLI values override.

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use relay_core::Chat;
use relay_telegram::TelegramConfig;

pub const DEFAULT_TEMP_DIR: &str = "temp_files";
pub const DEFAULT_LOG_FILE: &str = "logs/relay-bot.log";

/// Full bot config. Use BotConfig::load() for env-based loading, then validate().
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    /// REVIEW_CHAT_ID: group or channel that receives every accepted file.
    pub review_chat_id: i64,
    /// TEMP_DIR: scratch directory for downloads in flight.
    pub temp_dir: PathBuf,
    /// LOG_FILE
    pub log_file: String,
}

impl BotConfig {
    /// Loads from environment variables. `token` overrides BOT_TOKEN and `review_chat_id`
    /// overrides REVIEW_CHAT_ID when provided.
    pub fn load(token: Option<String>, review_chat_id: Option<i64>) -> Result<Self> {
        let telegram = TelegramConfig::load(token)?;
        let review_chat_id = match review_chat_id {
            Some(id) => id,
            None => {
                let raw = env::var("REVIEW_CHAT_ID")
                    .map_err(|_| anyhow::anyhow!("REVIEW_CHAT_ID not set"))?;
                raw.trim().parse().map_err(|e| {
                    anyhow::anyhow!("REVIEW_CHAT_ID must be a numeric chat id, got {:?}: {}", raw, e)
                })?
            }
        };
        let temp_dir = env::var("TEMP_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_TEMP_DIR));
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

        Ok(Self {
            telegram,
            review_chat_id,
            temp_dir,
            log_file,
        })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        if self.review_chat_id == 0 {
            anyhow::bail!("REVIEW_CHAT_ID must not be 0");
        }
        if self.temp_dir.as_os_str().is_empty() {
            anyhow::bail!("TEMP_DIR must not be empty");
        }
        Ok(())
    }

    pub fn review_chat(&self) -> Chat {
        Chat::with_id(self.review_chat_id)
    }
}
