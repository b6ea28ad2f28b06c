//! # File relay bot
//!
//! Accepts `.txt`, `.zip` and `.json` uploads, forwards them with uploader details to a review
//! chat, and offers a two-button menu. Core types come from relay-core, routing from
//! event-router, Telegram connectivity from relay-telegram.

pub mod cli;
pub mod components;
pub mod config;
pub mod handlers;
pub mod menu;
pub mod relay;
pub mod runner;
pub mod texts;
pub mod validator;

pub use cli::{load_config, Cli, Commands};
pub use components::{build_bot_components, build_router, BotComponents};
pub use config::BotConfig;
pub use menu::{render_menu, render_welcome, MenuSelection, MenuView};
pub use relay::{build_caption, scratch_file, FileRelay, IncomingAttachment};
pub use runner::{prepare_temp_dir, run_bot};
pub use validator::{validate_file_name, FileKind};
