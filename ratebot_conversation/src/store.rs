//! Per-user paging state.
//!
//! Each user remembers the page they are looking at and the snapshot that
//! page was rendered from. Sessions are forgotten after an idle period.

use moka::future::Cache;
use ratebot_core::{RateFeedSnapshot, pagination};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::debug;

/// Paging state of one user.
#[derive(Debug, Clone)]
pub struct UserSession {
    /// 1-based page currently shown
    pub page: usize,
    /// Snapshot the page refers to; `None` until the first successful fetch
    pub snapshot: Option<Arc<RateFeedSnapshot>>,
}

impl Default for UserSession {
    fn default() -> Self {
        Self {
            page: 1,
            snapshot: None,
        }
    }
}

/// Shared conversation state, cheap to clone.
#[derive(Clone)]
pub struct ConversationStore {
    /// `user_id` -> session, evicted when idle
    sessions: Cache<String, UserSession>,
    /// Most recently fetched snapshot, used by sessions that have none pinned
    latest: Arc<RwLock<Option<Arc<RateFeedSnapshot>>>>,
}

impl ConversationStore {
    #[must_use]
    pub fn new(idle_ttl: Duration, max_capacity: u64) -> Self {
        let sessions = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_idle(idle_ttl)
            .build();

        Self {
            sessions,
            latest: Arc::new(RwLock::new(None)),
        }
    }

    /// Page the user is on, 1 for unknown users.
    pub async fn page(&self, user_id: &str) -> usize {
        self.sessions
            .get(user_id)
            .await
            .map_or(1, |session| session.page)
    }

    pub async fn set_page(&self, user_id: &str, page: usize) {
        self.sessions
            .entry(user_id.to_string())
            .and_upsert_with(|existing| {
                let mut session = existing.map(|e| e.into_value()).unwrap_or_default();
                session.page = page;
                std::future::ready(session)
            })
            .await;
    }

    /// Pin a freshly fetched snapshot to the user at page 1 and publish it as
    /// the latest one.
    pub async fn start(&self, user_id: &str, snapshot: Arc<RateFeedSnapshot>) {
        *self.latest.write().await = Some(Arc::clone(&snapshot));
        self.sessions
            .insert(
                user_id.to_string(),
                UserSession {
                    page: 1,
                    snapshot: Some(snapshot),
                },
            )
            .await;
    }

    pub async fn latest(&self) -> Option<Arc<RateFeedSnapshot>> {
        self.latest.read().await.clone()
    }

    /// The user's page and the snapshot it refers to, with the page wrapped
    /// into range. `None` when no snapshot is available at all.
    pub async fn current(&self, user_id: &str) -> Option<(usize, Arc<RateFeedSnapshot>)> {
        let session = self.sessions.get(user_id).await.unwrap_or_default();
        let snapshot = match session.snapshot {
            Some(snapshot) => snapshot,
            None => self.latest().await?,
        };
        let page = pagination::normalize(session.page, &snapshot);
        Some((page, snapshot))
    }

    /// Move the user to the next page, wrapping after the last one, and
    /// return the new page with its snapshot.
    pub async fn advance(&self, user_id: &str) -> Option<(usize, Arc<RateFeedSnapshot>)> {
        let latest = self.latest().await;
        let entry = self
            .sessions
            .entry(user_id.to_string())
            .and_upsert_with(|existing| {
                let mut session = existing.map(|e| e.into_value()).unwrap_or_default();
                if let Some(snapshot) = session.snapshot.clone().or(latest) {
                    let page = pagination::normalize(session.page, &snapshot);
                    session.page = pagination::advance(page, &snapshot);
                    session.snapshot = Some(snapshot);
                }
                std::future::ready(session)
            })
            .await;

        let session = entry.into_value();
        debug!("User {user_id} advanced to page {}", session.page);
        session.snapshot.map(|snapshot| (session.page, snapshot))
    }

    /// Number of live sessions. Eviction is lazy, so this may lag.
    #[must_use]
    pub fn session_count(&self) -> u64 {
        self.sessions.entry_count()
    }
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new(Duration::from_secs(6 * 60 * 60), 100_000)
    }
}
