//! User-facing status notifications.
//!
//! Every operation surfaces its outcome through one of three notice
//! states; this trait is that side-effect seam. Production forwards to
//! tracing, tests record.

use std::sync::RwLock;

use tracing::{error, info};

/// One of the three fixed notice states shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Pending(String),
    Success(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Self::Pending(m) | Self::Success(m) | Self::Error(m) => m,
        }
    }
}

/// Non-blocking notification sink for operation status.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Production notifier that forwards notices to tracing.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match &notice {
            Notice::Pending(message) => info!(status = "pending", "{message}"),
            Notice::Success(message) => info!(status = "success", "{message}"),
            Notice::Error(message) => error!(status = "error", "{message}"),
        }
    }
}

/// Recording notifier for tests.
#[derive(Default)]
pub struct RecordingNotifier {
    notices: RwLock<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.read().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.notices()
            .into_iter()
            .filter_map(|n| match n {
                Notice::Error(m) => Some(m),
                _ => None,
            })
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.write().unwrap().push(notice);
    }
}
