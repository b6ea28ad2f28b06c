//! Wraps teloxide::Bot and implements [`relay_core::Bot`]. Production code talks to Telegram; tests substitute another Bot impl.

use std::path::Path;

use async_trait::async_trait;
use relay_core::{parse_message_id, Bot as CoreBot, Chat, InlineButton, RelayError, Result};
use teloxide::net::Download;
use teloxide::prelude::*;
use teloxide::types::{
    ChatId, FileId, InlineKeyboardButton, InlineKeyboardMarkup, InputFile, MessageId,
};
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

/// One button per row, in the given order.
fn keyboard(buttons: &[InlineButton]) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(buttons.iter().map(|b| {
        vec![InlineKeyboardButton::callback(
            b.label.clone(),
            b.payload.clone(),
        )]
    }))
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| RelayError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_message_with_buttons(
        &self,
        chat: &Chat,
        text: &str,
        buttons: &[InlineButton],
    ) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .reply_markup(keyboard(buttons))
            .await
            .map_err(|e| RelayError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn edit_message(&self, chat: &Chat, message_id: &str, text: &str) -> Result<()> {
        let id = parse_message_id(message_id)?;
        self.bot
            .edit_message_text(ChatId(chat.id), MessageId(id), text.to_string())
            .await
            .map_err(|e| RelayError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn download_file(&self, file_id: &str, destination: &Path) -> Result<u64> {
        let file = self
            .bot
            .get_file(FileId(file_id.to_string()))
            .await
            .map_err(|e| RelayError::Download(e.to_string()))?;

        let mut dst = tokio::fs::File::create(destination).await?;
        self.bot
            .download_file(&file.path, &mut dst)
            .await
            .map_err(|e| RelayError::Download(e.to_string()))?;
        dst.flush().await?;

        let written = dst.metadata().await?.len();
        debug!(file_id = %file_id, bytes = written, "Downloaded file");
        Ok(written)
    }

    async fn send_document(
        &self,
        chat: &Chat,
        path: &Path,
        file_name: &str,
        caption: &str,
    ) -> Result<()> {
        let document = InputFile::file(path.to_path_buf()).file_name(file_name.to_string());
        self.bot
            .send_document(ChatId(chat.id), document)
            .caption(caption.to_string())
            .await
            .map_err(|e| RelayError::Upload(e.to_string()))?;
        Ok(())
    }
}
