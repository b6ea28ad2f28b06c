//! Message and kind types for the core model.

use super::{attachment::Attachment, chat::Chat, user::User};

/// What the incoming event carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageKind {
    /// Plain text or a command; the text is in [`Message::content`].
    Text,
    /// A document upload.
    Document(Attachment),
    /// An inline button press. `origin_message_id` is the message carrying the keyboard, when still accessible.
    Callback {
        data: String,
        origin_message_id: Option<String>,
    },
    /// Anything else (stickers, photos, service messages).
    Other,
}

/// A single incoming event with user, chat, text content and kind.
#[derive(Debug, Clone)]
pub struct Message {
    /// Transport id of the event (message id, or callback query id for button presses).
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub kind: MessageKind,
}

impl Message {
    /// Returns true for text starting with '/'.
    pub fn is_command(&self) -> bool {
        matches!(self.kind, MessageKind::Text) && self.content.starts_with('/')
    }

    /// Command name without the leading '/', e.g. `start` for `/start now`.
    ///
    /// A `@botname` suffix is stripped when it names `bot_username` (ASCII case-insensitive) or when
    /// the bot's own name is unknown. A command addressed to another bot yields `None`.
    pub fn command_for(&self, bot_username: Option<&str>) -> Option<&str> {
        if !self.is_command() {
            return None;
        }
        let first = self.content[1..].split_whitespace().next().unwrap_or("");
        match first.split_once('@') {
            None => Some(first),
            Some((name, target)) => match bot_username {
                Some(me) if !target.eq_ignore_ascii_case(me) => None,
                _ => Some(name),
            },
        }
    }

    /// True for the command `name` (ASCII case-insensitive) addressed to this bot.
    pub fn is_command_named(&self, name: &str, bot_username: Option<&str>) -> bool {
        self.command_for(bot_username)
            .is_some_and(|command| command.eq_ignore_ascii_case(name))
    }

    /// Short name of the kind for log fields.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            MessageKind::Text if self.is_command() => "command",
            MessageKind::Text => "text",
            MessageKind::Document(_) => "document",
            MessageKind::Callback { .. } => "callback",
            MessageKind::Other => "other",
        }
    }
}
