//! # Event router
//!
//! Routes each incoming event through an ordered list of handlers. Every handler has optional
//! before/handle/after: all before run in order (any false stops routing); then handle runs until
//! one returns Stop or Reply; then all after run in reverse.
//!
//! [`Router::dispatch`] is the entry point for event sources: it contains every error so one failing
//! event never affects another, and acts as the global error hook (logs, never replies).

use relay_core::{Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Ordered handlers: before (all) → handle (until Stop/Reply) → after (reverse).
#[derive(Clone, Default)]
pub struct Router {
    handlers: Vec<Arc<dyn Handler>>,
}

impl Router {
    /// Creates a router with no handlers.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Appends a handler.
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs all before → handle until Stop/Reply → all after in reverse. Errors propagate to the caller.
    #[instrument(skip(self, message), fields(kind = message.kind_name()))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let mut final_response = HandlerResponse::Continue;

        debug!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_id = %message.id,
            "step: routing started"
        );

        for h in &self.handlers {
            let name = std::any::type_name_of_val(h.as_ref());
            let should_continue = h.before(message).await?;
            if !should_continue {
                info!(user_id = message.user.id, handler = %name, "step: before returned false, routing stopped");
                return Ok(HandlerResponse::Stop);
            }
        }

        for h in &self.handlers {
            let name = std::any::type_name_of_val(h.as_ref());
            let response = h.handle(message).await?;
            debug!(handler = %name, response = ?response, "Handler processed");

            match response {
                HandlerResponse::Stop | HandlerResponse::Reply(_) => {
                    debug!(user_id = message.user.id, handler = %name, "step: event handled");
                    final_response = response;
                    break;
                }
                HandlerResponse::Continue | HandlerResponse::Ignore => {}
            }
        }

        for h in self.handlers.iter().rev() {
            h.after(message, &final_response).await?;
        }

        debug!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_id = %message.id,
            "step: routing finished"
        );

        Ok(final_response)
    }

    /// Routes one event and contains its failure. Returns the response, or `None` when a handler failed;
    /// the failure is logged with its detail and nothing is sent to the user.
    pub async fn dispatch(&self, message: &Message) -> Option<HandlerResponse> {
        match self.handle(message).await {
            Ok(response) => {
                if matches!(response, HandlerResponse::Continue | HandlerResponse::Ignore) {
                    warn!(
                        user_id = message.user.id,
                        chat_id = message.chat.id,
                        kind = message.kind_name(),
                        "No handler accepted the event"
                    );
                }
                Some(response)
            }
            Err(e) => {
                error!(
                    error = %e,
                    user_id = message.user.id,
                    chat_id = message.chat.id,
                    message_id = %message.id,
                    kind = message.kind_name(),
                    "Exception while handling an event"
                );
                None
            }
        }
    }
}

// Tests live in tests/router_test.rs
