//! File relay: download an accepted upload to scratch space, forward it to the review chat with a
//! caption describing the uploader, acknowledge the uploader, release the scratch copy.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use relay_core::{Attachment, Bot, Chat, Result, User};
use tempfile::TempPath;
use tracing::{debug, info, instrument};

use crate::texts;
use crate::validator::FileKind;

/// An accepted upload with its sender. Lives for one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingAttachment {
    pub file_id: String,
    pub file_name: String,
    pub file_size: u64,
    pub kind: FileKind,
    pub sender_id: i64,
    pub sender_name: String,
    pub sender_handle: Option<String>,
}

impl IncomingAttachment {
    pub fn new(sender: &User, attachment: &Attachment, file_name: &str, kind: FileKind) -> Self {
        Self {
            file_id: attachment.file_id.clone(),
            file_name: file_name.to_string(),
            file_size: attachment.file_size,
            kind,
            sender_id: sender.id,
            sender_name: sender.display_name(),
            sender_handle: sender.username.clone(),
        }
    }

    pub fn mime_hint(&self) -> &'static str {
        self.kind.mime_hint()
    }
}

/// Caption attached to the forwarded document.
pub fn build_caption(attachment: &IncomingAttachment) -> String {
    let handle = attachment
        .sender_handle
        .as_deref()
        .map(|h| format!(" (@{})", h))
        .unwrap_or_default();

    format!(
        "📎 НОВЫЙ ФАЙЛ ДЛЯ ПРОВЕРКИ\n\n\
         👤 От: {}{}\n\
         🆔 ID: {}\n\
         📄 Файл: {}\n\
         📏 Размер: {} байт\n\
         🔍 Тип: {}",
        attachment.sender_name,
        handle,
        attachment.sender_id,
        attachment.file_name,
        attachment.file_size,
        attachment.kind.label()
    )
}

/// Creates an empty scratch file for one relay in `dir`, named `relay-<random>.<ext>`. The name never
/// comes from the upload, so concurrent relays of identically named files cannot collide. The file is
/// removed when the returned [`TempPath`] drops, whichever way the relay ends.
pub fn scratch_file(dir: &Path, kind: FileKind) -> io::Result<TempPath> {
    let file = tempfile::Builder::new()
        .prefix("relay-")
        .suffix(&format!(".{}", kind.extension()))
        .tempfile_in(dir)?;
    Ok(file.into_temp_path())
}

/// Forwards accepted uploads to the review chat.
pub struct FileRelay {
    bot: Arc<dyn Bot>,
    review_chat: Chat,
    temp_dir: PathBuf,
}

impl FileRelay {
    pub fn new(bot: Arc<dyn Bot>, review_chat: Chat, temp_dir: PathBuf) -> Self {
        Self {
            bot,
            review_chat,
            temp_dir,
        }
    }

    /// Relays `attachment` and acknowledges the uploader in `origin`. Any error is returned
    /// untouched; the caller decides what the user sees. The scratch copy is gone on return.
    #[instrument(
        skip(self, origin, attachment),
        fields(file_name = %attachment.file_name, sender_id = attachment.sender_id)
    )]
    pub async fn relay(&self, origin: &Chat, attachment: &IncomingAttachment) -> Result<()> {
        let temp = scratch_file(&self.temp_dir, attachment.kind)?;

        let written = self
            .bot
            .download_file(&attachment.file_id, &temp)
            .await?;
        debug!(
            bytes = written,
            declared_size = attachment.file_size,
            path = %temp.display(),
            "Attachment stored in temp file"
        );

        let caption = build_caption(attachment);
        self.bot
            .send_document(&self.review_chat, &temp, &attachment.file_name, &caption)
            .await?;
        info!(
            review_chat_id = self.review_chat.id,
            file_size = attachment.file_size,
            kind = %attachment.kind,
            mime_hint = attachment.mime_hint(),
            "Attachment forwarded for review"
        );

        self.bot
            .send_message(origin, &texts::relay_success(&attachment.file_name))
            .await?;

        Ok(())
    }
}
