//! Adapters from Telegram (teloxide) types to relay_core types.
//! Depends only on teloxide and relay_core type definitions.

use relay_core::{Attachment, Chat, Message, MessageKind, ToCoreMessage, ToCoreUser, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
        }
    }
}

fn anonymous_user() -> User {
    User {
        id: 0,
        username: None,
        first_name: None,
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(anonymous_user),
            chat: Chat::with_id(self.0.chat.id.0),
            content: self.0.text().unwrap_or("").to_string(),
            kind: self.kind(),
        }
    }
}

impl<'a> TelegramMessageWrapper<'a> {
    fn kind(&self) -> MessageKind {
        if let Some(document) = self.0.document() {
            return MessageKind::Document(Attachment {
                file_id: document.file.id.to_string(),
                file_name: document.file_name.clone(),
                file_size: u64::from(document.file.size),
                mime_type: document.mime_type.as_ref().map(|m| m.to_string()),
            });
        }
        if self.0.text().is_some() {
            MessageKind::Text
        } else {
            MessageKind::Other
        }
    }
}

/// Wraps a teloxide CallbackQuery (inline button press) for conversion to core [`Message`].
pub struct TelegramCallbackWrapper<'a>(pub &'a teloxide::types::CallbackQuery);

impl<'a> ToCoreMessage for TelegramCallbackWrapper<'a> {
    fn to_core(&self) -> Message {
        let user = TelegramUserWrapper(&self.0.from).to_core();
        let origin = self.0.message.as_ref();
        // Without the origin message the only reachable chat is the user's private chat.
        let chat = origin
            .map(|m| Chat::with_id(m.chat().id.0))
            .unwrap_or_else(|| Chat::with_id(user.id));
        let data = self.0.data.clone().unwrap_or_default();

        Message {
            id: self.0.id.to_string(),
            user,
            chat,
            content: data.clone(),
            kind: MessageKind::Callback {
                data,
                origin_message_id: origin.map(|m| m.id().to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sender_json() -> serde_json::Value {
        json!({
            "id": 42,
            "is_bot": false,
            "first_name": "Ann",
            "username": "ann99"
        })
    }

    fn private_chat_json() -> serde_json::Value {
        json!({
            "id": 42,
            "type": "private",
            "first_name": "Ann",
            "username": "ann99"
        })
    }

    /// **Test: TelegramUserWrapper converts teloxide User to core User with correct id, username and first_name.**
    #[test]
    fn test_telegram_user_wrapper_to_core() {
        let user = teloxide::types::User {
            id: teloxide::types::UserId(123),
            is_bot: false,
            first_name: "Test".to_string(),
            last_name: Some("User".to_string()),
            username: Some("testuser".to_string()),
            language_code: Some("en".to_string()),
            is_premium: false,
            added_to_attachment_menu: false,
        };

        let core_user = TelegramUserWrapper(&user).to_core();

        assert_eq!(core_user.id, 123);
        assert_eq!(core_user.username, Some("testuser".to_string()));
        assert_eq!(core_user.first_name, Some("Test".to_string()));
    }

    /// **Test: a document message becomes MessageKind::Document with name, size and file id.**
    #[test]
    fn test_document_message_to_core() {
        let msg: teloxide::types::Message = serde_json::from_value(json!({
            "message_id": 7,
            "date": 1706529600,
            "chat": private_chat_json(),
            "from": sender_json(),
            "document": {
                "file_id": "BQACAgIAAxkBAAIB",
                "file_unique_id": "AgADBAAD",
                "file_name": "report.txt",
                "mime_type": "text/plain",
                "file_size": 10
            }
        }))
        .unwrap();

        let core = TelegramMessageWrapper(&msg).to_core();

        assert_eq!(core.id, "7");
        assert_eq!(core.user.id, 42);
        assert_eq!(core.user.username.as_deref(), Some("ann99"));
        assert_eq!(core.chat.id, 42);
        match core.kind {
            MessageKind::Document(attachment) => {
                assert_eq!(attachment.file_id, "BQACAgIAAxkBAAIB");
                assert_eq!(attachment.file_name.as_deref(), Some("report.txt"));
                assert_eq!(attachment.file_size, 10);
                assert_eq!(attachment.mime_type.as_deref(), Some("text/plain"));
            }
            other => panic!("expected document, got {:?}", other),
        }
    }

    /// **Test: a text message keeps its content and is MessageKind::Text.**
    #[test]
    fn test_text_message_to_core() {
        let msg: teloxide::types::Message = serde_json::from_value(json!({
            "message_id": 8,
            "date": 1706529600,
            "chat": private_chat_json(),
            "from": sender_json(),
            "text": "/start"
        }))
        .unwrap();

        let core = TelegramMessageWrapper(&msg).to_core();

        assert_eq!(core.content, "/start");
        assert_eq!(core.kind, MessageKind::Text);
        assert!(core.is_command_named("start", Some("relay_bot")));
    }

    /// **Test: a callback query carries its data and the id of the message with the keyboard.**
    #[test]
    fn test_callback_query_to_core() {
        let query: teloxide::types::CallbackQuery = serde_json::from_value(json!({
            "id": "4382bfdwdsb323b2d9",
            "from": sender_json(),
            "chat_instance": "-8213723543281",
            "data": "instruction",
            "message": {
                "message_id": 11,
                "date": 1706529600,
                "chat": private_chat_json(),
                "text": "menu"
            }
        }))
        .unwrap();

        let core = TelegramCallbackWrapper(&query).to_core();

        assert_eq!(core.id, "4382bfdwdsb323b2d9");
        assert_eq!(core.user.id, 42);
        assert_eq!(core.chat.id, 42);
        assert_eq!(
            core.kind,
            MessageKind::Callback {
                data: "instruction".to_string(),
                origin_message_id: Some("11".to_string()),
            }
        );
    }

    /// **Test: a callback whose origin message is gone is answered in the user's private chat.**
    #[test]
    fn test_callback_query_without_origin_falls_back_to_user_chat() {
        let query: teloxide::types::CallbackQuery = serde_json::from_value(json!({
            "id": "4382bfdwdsb323b2da",
            "from": sender_json(),
            "chat_instance": "-8213723543281",
            "data": "check_gifts"
        }))
        .unwrap();

        let core = TelegramCallbackWrapper(&query).to_core();

        assert_eq!(core.chat.id, 42);
        assert_eq!(
            core.kind,
            MessageKind::Callback {
                data: "check_gifts".to_string(),
                origin_message_id: None,
            }
        );
    }
}
