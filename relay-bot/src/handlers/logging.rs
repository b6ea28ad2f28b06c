//! Logs each event in before() and the outcome in after(); never stops routing.

use async_trait::async_trait;
use relay_core::{Handler, HandlerResponse, Message, Result};
use tracing::{debug, info, instrument};

pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            username = %message.user.username.as_deref().unwrap_or("unknown"),
            kind = message.kind_name(),
            message_content = %message.content,
            "Received event"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        let reply_len = match response {
            HandlerResponse::Reply(text) => Some(text.len()),
            _ => None,
        };
        debug!(
            message_id = %message.id,
            response = ?response,
            reply_len = ?reply_len,
            "Processed event"
        );
        Ok(())
    }
}
