//! Document uploads: validate the extension, then relay to the review chat.
//!
//! Rejections are answered directly. Relay failures are logged with their detail and answered
//! with one generic message; the error text itself never reaches the user.

use std::sync::Arc;

use async_trait::async_trait;
use relay_core::{Bot, Handler, HandlerResponse, Message, MessageKind, Result};
use tracing::{error, info, instrument};

use crate::relay::{FileRelay, IncomingAttachment};
use crate::texts;
use crate::validator::validate_file_name;

pub struct DocumentHandler {
    bot: Arc<dyn Bot>,
    relay: Arc<FileRelay>,
}

impl DocumentHandler {
    pub fn new(bot: Arc<dyn Bot>, relay: Arc<FileRelay>) -> Self {
        Self { bot, relay }
    }
}

#[async_trait]
impl Handler for DocumentHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let MessageKind::Document(attachment) = &message.kind else {
            return Ok(HandlerResponse::Ignore);
        };

        let file_name = attachment.file_name.as_deref();
        let kind = match validate_file_name(file_name) {
            Ok(kind) => kind,
            Err(reason) => {
                info!(
                    user_id = message.user.id,
                    file_name = %file_name.unwrap_or(""),
                    mime_type = ?attachment.mime_type,
                    reason = %reason,
                    "Rejected upload"
                );
                self.bot
                    .send_message(&message.chat, texts::UNSUPPORTED_FORMAT)
                    .await?;
                return Ok(HandlerResponse::Reply(texts::UNSUPPORTED_FORMAT.to_string()));
            }
        };

        let incoming =
            IncomingAttachment::new(&message.user, attachment, file_name.unwrap_or(""), kind);

        match self.relay.relay(&message.chat, &incoming).await {
            Ok(()) => Ok(HandlerResponse::Reply(texts::relay_success(
                &incoming.file_name,
            ))),
            Err(e) => {
                error!(
                    error = %e,
                    user_id = message.user.id,
                    file_name = %incoming.file_name,
                    "Failed to relay document"
                );
                self.bot
                    .send_message(&message.chat, texts::RELAY_FAILED)
                    .await?;
                Ok(HandlerResponse::Reply(texts::RELAY_FAILED.to_string()))
            }
        }
    }
}
