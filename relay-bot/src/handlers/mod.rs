//! Route handlers, in router order: logging, `/start`, menu buttons, documents, free text.

mod document;
mod logging;
mod menu_callback;
mod start;
mod text;

pub use document::DocumentHandler;
pub use logging::LoggingHandler;
pub use menu_callback::MenuCallbackHandler;
pub use start::StartHandler;
pub use text::TextHandler;
