use serde::{Deserialize, Serialize};

/// Represents a normalized poll as served to the presentation layer.
///
/// This struct is the application-side projection of the on-chain poll
/// record. Addresses in `director` and `voters` are lower-cased hex strings;
/// `avatars` are passed through exactly as the contract returned them.
/// Timestamps are unix milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Poll {
    pub id: u64,
    pub image: String,
    pub title: String,
    pub description: String,
    pub votes: u64,
    pub contestants: u64,
    pub deleted: bool,
    pub director: String,
    pub starts_at: u64,
    pub ends_at: u64,
    pub timestamp: u64,
    pub voters: Vec<String>,
    pub avatars: Vec<String>,
}

impl Poll {
    /// Returns where `now_ms` falls relative to this poll's voting window.
    pub fn window(&self, now_ms: u64) -> PollWindow {
        if now_ms < self.starts_at {
            PollWindow::Upcoming
        } else if now_ms <= self.ends_at {
            PollWindow::Open
        } else {
            PollWindow::Closed
        }
    }
}

/// The position of a point in time relative to a poll's voting window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PollWindow {
    Upcoming,
    Open,
    Closed,
}

/// Parameters accepted by the poll creation and update operations.
///
/// `starts_at` and `ends_at` are unix milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PollParams {
    pub image: String,
    pub title: String,
    pub description: String,
    pub starts_at: u64,
    pub ends_at: u64,
}
