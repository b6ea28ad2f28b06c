//! Core types: user, chat, message, attachment, inline button, handler response, and Handler trait.
//!
//! One file per main type.

mod attachment;
mod button;
mod chat;
mod handler;
mod message;
mod response;
mod user;

pub use attachment::Attachment;
pub use button::InlineButton;
pub use chat::Chat;
pub use handler::{Handler, ToCoreMessage, ToCoreUser};
pub use message::{Message, MessageKind};
pub use response::HandlerResponse;
pub use user::User;
