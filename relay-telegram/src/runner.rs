//! Dispatcher runner: converts teloxide messages and callback queries to core::Message and passes
//! them to the [`Router`]. Each event is routed in its own task so slow relays never block other chats;
//! on Ctrl-C the runner waits (bounded) for events still in flight.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use event_router::Router;
use relay_core::ToCoreMessage;
use teloxide::dispatching::UpdateHandler;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::types::CallbackQuery;
use tokio::sync::Notify;
use tracing::{debug, info, instrument, warn};

use super::adapters::{TelegramCallbackWrapper, TelegramMessageWrapper};

/// How long shutdown waits for in-flight events (uploads included) before abandoning them.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(30);

/// Resolves the bot's own username with get_me and logs the identity. `None` when Telegram is
/// unreachable or the bot has no username; commands then match regardless of a `@botname` suffix.
#[instrument(skip(bot))]
pub async fn fetch_bot_username(bot: &teloxide::Bot) -> Option<String> {
    match bot.get_me().await {
        Ok(me) => {
            info!(
                bot_id = me.user.id.0,
                username = %me.user.username.as_deref().unwrap_or("unknown"),
                "Bot identity resolved"
            );
            me.user.username.clone()
        }
        Err(e) => {
            warn!(error = %e, "get_me failed, continuing without bot username");
            None
        }
    }
}

/// Starts long polling with the given teloxide Bot and router; returns after Ctrl-C once in-flight
/// events finished or the grace period elapsed.
#[instrument(skip(bot, router))]
pub async fn run_dispatcher(bot: teloxide::Bot, router: Router) -> Result<()> {
    info!(handlers = router.len(), "Bot started, dispatching updates");

    let in_flight = InFlight::default();

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![Arc::new(router), in_flight.clone()])
        .error_handler(LoggingErrorHandler::with_custom_text(
            "An error from the update listener",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    let pending = in_flight.len();
    if pending > 0 {
        info!(in_flight = pending, "Dispatcher stopped, waiting for in-flight events");
        if tokio::time::timeout(SHUTDOWN_GRACE, in_flight.wait_idle())
            .await
            .is_err()
        {
            warn!(
                in_flight = in_flight.len(),
                "Shutdown grace period elapsed, abandoning in-flight events"
            );
        }
    }

    info!("Dispatcher stopped");
    Ok(())
}

fn schema() -> UpdateHandler<teloxide::RequestError> {
    dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback_query))
}

async fn on_message(msg: Message, router: Arc<Router>, in_flight: InFlight) -> ResponseResult<()> {
    let core_msg = TelegramMessageWrapper(&msg).to_core();

    debug!(
        message_id = %core_msg.id,
        chat_id = core_msg.chat.id,
        "Routing message"
    );

    in_flight.spawn(async move {
        router.dispatch(&core_msg).await;
    });

    Ok(())
}

async fn on_callback_query(
    bot: Bot,
    q: CallbackQuery,
    router: Arc<Router>,
    in_flight: InFlight,
) -> ResponseResult<()> {
    // Clears the client's loading indicator; the reply itself comes from the router.
    if let Err(e) = bot.answer_callback_query(q.id.clone()).await {
        warn!(error = %e, user_id = q.from.id.0, "Failed to answer callback query");
    }

    let core_msg = TelegramCallbackWrapper(&q).to_core();

    debug!(
        query_id = %core_msg.id,
        chat_id = core_msg.chat.id,
        "Routing button press"
    );

    in_flight.spawn(async move {
        router.dispatch(&core_msg).await;
    });

    Ok(())
}

/// Counts routed events whose tasks are still running.
#[derive(Clone, Default)]
struct InFlight {
    count: Arc<AtomicUsize>,
    idle: Arc<Notify>,
}

/// Held by a spawned task; releases its slot on drop, panics included.
struct InFlightSlot(InFlight);

impl Drop for InFlightSlot {
    fn drop(&mut self) {
        if self.0.count.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.0.idle.notify_waiters();
        }
    }
}

impl InFlight {
    fn len(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.count.fetch_add(1, Ordering::SeqCst);
        let slot = InFlightSlot(self.clone());
        tokio::spawn(async move {
            let _slot = slot;
            task.await;
        });
    }

    /// Resolves once no task is in flight.
    async fn wait_idle(&self) {
        loop {
            // Registered before the check so a release in between is not missed.
            let idle = self.idle.notified();
            if self.len() == 0 {
                return;
            }
            idle.await;
        }
    }
}
