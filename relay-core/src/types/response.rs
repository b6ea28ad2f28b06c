//! Handler result type.

/// Handler result for the router. `Reply(text)` carries the text sent to the user so later handlers can log it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop routing; the event was handled without a text reply.
    Stop,
    /// Not this handler's event, try next.
    Ignore,
    /// Stop routing; the event was answered with the given text.
    Reply(String),
}
