#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod error;
pub mod pagination;

pub use error::{Error, Result};
pub use pagination::PAGE_SIZE;

/// One currency line of a rate feed. Rates are kept verbatim as published.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RateEntry {
    pub currency_code: String,
    pub currency_name: String,
    pub buy: String,
    pub transfer: String,
    pub sell: String,
}

/// One fetched copy of the full rate list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateFeedSnapshot {
    /// Publication time as printed by the upstream document
    pub timestamp: String,
    pub entries: Vec<RateEntry>,
    pub source: String,
    /// When this process received the document
    pub fetched_at: DateTime<Utc>,
}

impl RateFeedSnapshot {
    #[must_use]
    pub fn new(timestamp: String, entries: Vec<RateEntry>, source: String) -> Self {
        Self {
            timestamp,
            entries,
            source,
            fetched_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A single quick-reply control shown under a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickReplyOption {
    pub title: String,
    pub payload: String,
}

/// What the bot says back to a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    QuickReplies {
        text: String,
        options: Vec<QuickReplyOption>,
    },
}

impl Reply {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) | Self::QuickReplies { text, .. } => text,
        }
    }
}

/// Chat indicators sent around the handling of every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SenderAction {
    MarkSeen,
    TypingOn,
    TypingOff,
}

impl SenderAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MarkSeen => "mark_seen",
            Self::TypingOn => "typing_on",
            Self::TypingOff => "typing_off",
        }
    }
}

/// Upstream source of exchange rates.
#[async_trait]
pub trait RateFeed: Send + Sync {
    /// Fetch a fresh snapshot. Every call goes to the network.
    async fn fetch_snapshot(&self) -> Result<RateFeedSnapshot>;
}

/// Outbound side of the messaging platform.
#[async_trait]
pub trait MessagingGateway: Send + Sync {
    async fn send_reply(&self, recipient_id: &str, reply: &Reply) -> anyhow::Result<()>;
    async fn send_action(&self, recipient_id: &str, action: SenderAction) -> anyhow::Result<()>;
}
