//! Shared fixtures: message builders, a router wired to [`MockBot`], test tracing and log capture.

pub mod mock_bot;

use std::io;
use std::sync::{Arc, Mutex, Once};

use event_router::Router;
use relay_bot::{build_router, FileRelay};
use relay_core::{Attachment, Chat, Message, MessageKind, User};
use tempfile::TempDir;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, EnvFilter};

use mock_bot::MockBot;

pub const USER_CHAT_ID: i64 = 42;
pub const REVIEW_CHAT_ID: i64 = -1003171884825;
pub const BOT_USERNAME: &str = "relay_bot";

static TRACING_INIT: Once = Once::new();

/// Initialize tracing once per test process; `RUST_LOG` controls the level.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("debug,relay_bot=debug"));
        let _ = fmt()
            .with_env_filter(env_filter)
            .with_test_writer()
            .try_init();
    });
}

/// Log lines written while a [`capture_logs`] guard is alive on this thread.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Lines containing `needle`.
    pub fn lines_with(&self, needle: &str) -> Vec<String> {
        self.contents()
            .lines()
            .filter(|line| line.contains(needle))
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Routes this thread's events into a buffer until the guard drops. `#[tokio::test]` runs on a
/// current-thread runtime, so everything awaited in the test body is captured.
pub fn capture_logs() -> (CapturedLogs, DefaultGuard) {
    let logs = CapturedLogs::default();
    let subscriber = fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}

/// Router, mock bot and the scratch directory the relay writes into.
pub struct Harness {
    pub bot: Arc<MockBot>,
    pub router: Router,
    pub temp_dir: TempDir,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_content(b"0123456789")
    }

    pub fn with_content(content: &[u8]) -> Self {
        init_tracing();
        let bot = Arc::new(MockBot::new(content));
        let temp_dir = tempfile::tempdir().unwrap();
        let relay = Arc::new(FileRelay::new(
            bot.clone(),
            Chat::with_id(REVIEW_CHAT_ID),
            temp_dir.path().to_path_buf(),
        ));
        let router = build_router(bot.clone(), relay, Some(BOT_USERNAME.to_string()));
        Self {
            bot,
            router,
            temp_dir,
        }
    }

    /// Files left behind in the scratch directory.
    pub fn leftover_files(&self) -> usize {
        std::fs::read_dir(self.temp_dir.path()).unwrap().count()
    }
}

pub fn ann() -> User {
    User {
        id: USER_CHAT_ID,
        username: Some("ann99".to_string()),
        first_name: Some("Ann".to_string()),
    }
}

fn message(id: &str, content: &str, kind: MessageKind) -> Message {
    Message {
        id: id.to_string(),
        user: ann(),
        chat: Chat::with_id(USER_CHAT_ID),
        content: content.to_string(),
        kind,
    }
}

pub fn text_message(content: &str) -> Message {
    message("1", content, MessageKind::Text)
}

pub fn document_message(file_name: &str, file_size: u64) -> Message {
    message(
        "2",
        "",
        MessageKind::Document(Attachment {
            file_id: format!("file-{}", file_name),
            file_name: Some(file_name.to_string()),
            file_size,
            mime_type: None,
        }),
    )
}

pub fn callback_message(data: &str, origin_message_id: Option<&str>) -> Message {
    message(
        "cbq-1",
        data,
        MessageKind::Callback {
            data: data.to_string(),
            origin_message_id: origin_message_id.map(str::to_string),
        },
    )
}

pub fn other_message() -> Message {
    message("3", "", MessageKind::Other)
}
