//! Free text: plain text gets the menu, unrecognized commands get a pointer to `/start`.
//! Commands addressed to another bot (`/help@other_bot` in a group) are left alone.

use std::sync::Arc;

use async_trait::async_trait;
use relay_core::{Bot, Handler, HandlerResponse, Message, MessageKind, Result};
use tracing::{debug, instrument};

use crate::{menu, texts};

pub struct TextHandler {
    bot: Arc<dyn Bot>,
    bot_username: Option<String>,
}

impl TextHandler {
    pub fn new(bot: Arc<dyn Bot>, bot_username: Option<String>) -> Self {
        Self { bot, bot_username }
    }
}

#[async_trait]
impl Handler for TextHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.kind != MessageKind::Text {
            return Ok(HandlerResponse::Ignore);
        }

        if message.is_command() {
            let Some(command) = message.command_for(self.bot_username.as_deref()) else {
                debug!(content = %message.content, "Command addressed to another bot");
                return Ok(HandlerResponse::Stop);
            };
            debug!(command = %command, "Unrecognized command");
            self.bot
                .send_message(&message.chat, texts::UNKNOWN_COMMAND)
                .await?;
            return Ok(HandlerResponse::Reply(texts::UNKNOWN_COMMAND.to_string()));
        }

        let view = menu::render_menu();
        self.bot
            .send_message_with_buttons(&message.chat, view.text, &view.buttons)
            .await?;
        Ok(HandlerResponse::Reply(view.text.to_string()))
    }
}
