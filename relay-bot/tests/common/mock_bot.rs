//! Mock implementation of [`relay_core::Bot`] for integration tests.
//!
//! Records every outbound call so tests can assert on what the user and the review chat saw,
//! without hitting Telegram. Downloads write fixed bytes; failures can be injected per operation.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use relay_core::{Bot, Chat, InlineButton, RelayError, Result};

/// One recorded outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Text {
        chat_id: i64,
        text: String,
    },
    Menu {
        chat_id: i64,
        text: String,
        payloads: Vec<String>,
    },
    Edit {
        chat_id: i64,
        message_id: String,
        text: String,
    },
    Document {
        chat_id: i64,
        file_name: String,
        caption: String,
        content: Vec<u8>,
        temp_path: PathBuf,
    },
}

pub struct MockBot {
    file_content: Vec<u8>,
    sent: Mutex<Vec<Sent>>,
    downloads: Mutex<Vec<PathBuf>>,
    fail_download: AtomicBool,
    fail_upload: AtomicBool,
    fail_send: AtomicBool,
    fail_text_containing: Mutex<Option<String>>,
}

impl MockBot {
    /// Creates a MockBot whose downloads produce `file_content`.
    pub fn new(file_content: &[u8]) -> Self {
        Self {
            file_content: file_content.to_vec(),
            sent: Mutex::new(Vec::new()),
            downloads: Mutex::new(Vec::new()),
            fail_download: AtomicBool::new(false),
            fail_upload: AtomicBool::new(false),
            fail_send: AtomicBool::new(false),
            fail_text_containing: Mutex::new(None),
        }
    }

    pub fn fail_download(&self) {
        self.fail_download.store(true, Ordering::SeqCst);
    }

    pub fn fail_upload(&self) {
        self.fail_upload.store(true, Ordering::SeqCst);
    }

    /// Makes every text/menu/edit send fail.
    pub fn fail_send(&self) {
        self.fail_send.store(true, Ordering::SeqCst);
    }

    /// Makes plain `send_message` fail when the text contains `needle`; other sends still succeed.
    pub fn fail_text_containing(&self, needle: &str) {
        *self.fail_text_containing.lock().unwrap() = Some(needle.to_string());
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn documents(&self) -> Vec<Sent> {
        self.sent()
            .into_iter()
            .filter(|s| matches!(s, Sent::Document { .. }))
            .collect()
    }

    pub fn downloads(&self) -> Vec<PathBuf> {
        self.downloads.lock().unwrap().clone()
    }

    fn record(&self, sent: Sent) {
        self.sent.lock().unwrap().push(sent);
    }

    fn check_send(&self) -> Result<()> {
        if self.fail_send.load(Ordering::SeqCst) {
            return Err(RelayError::Bot("Forbidden: bot was blocked by the user".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.check_send()?;
        if let Some(needle) = self.fail_text_containing.lock().unwrap().as_deref() {
            if text.contains(needle) {
                return Err(RelayError::Bot("Bad Request: chat not found".to_string()));
            }
        }
        self.record(Sent::Text {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_message_with_buttons(
        &self,
        chat: &Chat,
        text: &str,
        buttons: &[InlineButton],
    ) -> Result<()> {
        self.check_send()?;
        self.record(Sent::Menu {
            chat_id: chat.id,
            text: text.to_string(),
            payloads: buttons.iter().map(|b| b.payload.clone()).collect(),
        });
        Ok(())
    }

    async fn edit_message(&self, chat: &Chat, message_id: &str, text: &str) -> Result<()> {
        self.check_send()?;
        self.record(Sent::Edit {
            chat_id: chat.id,
            message_id: message_id.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }

    async fn download_file(&self, _file_id: &str, destination: &Path) -> Result<u64> {
        self.downloads
            .lock()
            .unwrap()
            .push(destination.to_path_buf());
        if self.fail_download.load(Ordering::SeqCst) {
            return Err(RelayError::Download("A network error: timed out".to_string()));
        }
        tokio::fs::write(destination, &self.file_content).await?;
        Ok(self.file_content.len() as u64)
    }

    async fn send_document(
        &self,
        chat: &Chat,
        path: &Path,
        file_name: &str,
        caption: &str,
    ) -> Result<()> {
        let content = tokio::fs::read(path).await?;
        if self.fail_upload.load(Ordering::SeqCst) {
            return Err(RelayError::Upload("connection reset by peer".to_string()));
        }
        self.record(Sent::Document {
            chat_id: chat.id,
            file_name: file_name.to_string(),
            caption: caption.to_string(),
            content,
            temp_path: path.to_path_buf(),
        });
        Ok(())
    }
}
