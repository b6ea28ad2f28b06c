//! Bot abstraction for replying, editing and moving files.
//!
//! [`Bot`] is transport-agnostic; relay-telegram implements it via teloxide and tests substitute a mock.

use std::path::Path;

use crate::error::{RelayError, Result};
use crate::types::{Chat, InlineButton};
use async_trait::async_trait;

/// Outbound operations the handlers need from a messaging transport.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a text message with an inline keyboard, one button per row.
    async fn send_message_with_buttons(
        &self,
        chat: &Chat,
        text: &str,
        buttons: &[InlineButton],
    ) -> Result<()>;
    /// Replaces the text of an already-sent message. `message_id` is transport-specific (Telegram numeric string).
    async fn edit_message(&self, chat: &Chat, message_id: &str, text: &str) -> Result<()>;
    /// Fetches the file identified by `file_id` into `destination`. Returns the number of bytes written.
    async fn download_file(&self, file_id: &str, destination: &Path) -> Result<u64>;
    /// Uploads the local file at `path` to `chat` under `file_name`, with `caption`.
    async fn send_document(
        &self,
        chat: &Chat,
        path: &Path,
        file_name: &str,
        caption: &str,
    ) -> Result<()>;
}

/// Parses a message id string into an i32. Used by edit_message.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| RelayError::Bot(format!("Invalid message_id for edit: {}", s)))
}
