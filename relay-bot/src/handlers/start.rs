//! `/start`: welcome text with the menu keyboard.

use std::sync::Arc;

use async_trait::async_trait;
use relay_core::{Bot, Handler, HandlerResponse, Message, Result};
use tracing::instrument;

use crate::menu;

pub struct StartHandler {
    bot: Arc<dyn Bot>,
    bot_username: Option<String>,
}

impl StartHandler {
    /// `bot_username` decides which `/start@name` commands are ours; `None` accepts any suffix.
    pub fn new(bot: Arc<dyn Bot>, bot_username: Option<String>) -> Self {
        Self { bot, bot_username }
    }
}

#[async_trait]
impl Handler for StartHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.is_command_named("start", self.bot_username.as_deref()) {
            return Ok(HandlerResponse::Ignore);
        }

        let view = menu::render_welcome();
        self.bot
            .send_message_with_buttons(&message.chat, view.text, &view.buttons)
            .await?;
        Ok(HandlerResponse::Reply(view.text.to_string()))
    }
}
