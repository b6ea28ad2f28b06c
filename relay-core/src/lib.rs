//! # relay-core
//!
//! Core types and traits for the file relay bot: [`Bot`], [`Handler`], message, attachment and user
//! types, errors and tracing initialization. Transport-agnostic; used by event-router, relay-telegram
//! and relay-bot.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{parse_message_id, Bot};
pub use error::{HandlerError, RelayError, Result};
pub use logger::init_tracing;
pub use types::{
    Attachment, Chat, Handler, HandlerResponse, InlineButton, Message, MessageKind, ToCoreMessage,
    ToCoreUser, User,
};
