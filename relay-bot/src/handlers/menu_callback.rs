//! Menu button presses. The reply replaces the text of the message that carried the keyboard.

use std::sync::Arc;

use async_trait::async_trait;
use relay_core::{Bot, Handler, HandlerResponse, Message, MessageKind, Result};
use tracing::{instrument, warn};

use crate::menu::MenuSelection;

pub struct MenuCallbackHandler {
    bot: Arc<dyn Bot>,
}

impl MenuCallbackHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for MenuCallbackHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let MessageKind::Callback {
            data,
            origin_message_id,
        } = &message.kind
        else {
            return Ok(HandlerResponse::Ignore);
        };

        // Payloads we never issued (stale keyboards, forged queries) end here without a reply.
        let selection = match data.parse::<MenuSelection>() {
            Ok(selection) => selection,
            Err(e) => {
                warn!(error = %e, user_id = message.user.id, "Unknown callback payload");
                return Ok(HandlerResponse::Stop);
            }
        };

        let text = selection.reply_text();
        match origin_message_id {
            Some(id) => self.bot.edit_message(&message.chat, id, text).await?,
            None => self.bot.send_message(&message.chat, text).await?,
        }
        Ok(HandlerResponse::Reply(text.to_string()))
    }
}
