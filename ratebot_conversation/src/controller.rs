//! Turns inbound chat events into replies.

use crate::render;
use crate::store::ConversationStore;
use crate::texts::{APOLOGY, GET_STARTED_PAYLOAD, MORE_PAYLOAD, NOT_FOUND, RATE_KEYWORD};
use ratebot_core::{MessagingGateway, RateFeed, Reply, SenderAction, pagination};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// An event from one user, already stripped of the platform envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    /// Free text typed by the user
    Text(String),
    /// Payload of a tapped quick reply
    QuickReply(String),
    /// Payload of a tapped button (welcome screen, persistent menu)
    Postback(String),
}

pub struct ConversationController {
    feed: Arc<dyn RateFeed>,
    gateway: Arc<dyn MessagingGateway>,
    store: ConversationStore,
}

impl ConversationController {
    pub fn new(
        feed: Arc<dyn RateFeed>,
        gateway: Arc<dyn MessagingGateway>,
        store: ConversationStore,
    ) -> Self {
        Self {
            feed,
            gateway,
            store,
        }
    }

    #[must_use]
    pub const fn store(&self) -> &ConversationStore {
        &self.store
    }

    /// Handle one event end to end: seen, typing on, reply, typing off.
    ///
    /// Nothing here fails the caller; gateway errors are logged and dropped.
    pub async fn handle(&self, user_id: &str, event: InboundEvent) {
        self.acknowledge(user_id, SenderAction::MarkSeen).await;
        self.acknowledge(user_id, SenderAction::TypingOn).await;

        if let Some(reply) = self.respond(user_id, event).await {
            if let Err(e) = self.gateway.send_reply(user_id, &reply).await {
                warn!("Failed to send reply to {user_id}: {e}");
            }
        }

        self.acknowledge(user_id, SenderAction::TypingOff).await;
    }

    /// Decide the reply for an event and update the user's session.
    pub async fn respond(&self, user_id: &str, event: InboundEvent) -> Option<Reply> {
        match event {
            InboundEvent::Text(text) => {
                info!("[{user_id}] Message: {text}");
                if is_trigger(&text) {
                    Some(self.show_list(user_id).await)
                } else if text.is_empty() {
                    None
                } else {
                    Some(Reply::Text(text.to_uppercase()))
                }
            }
            InboundEvent::Postback(payload) => {
                info!("[{user_id}] Postback: {payload}");
                if payload == RATE_KEYWORD || payload == GET_STARTED_PAYLOAD {
                    Some(self.show_list(user_id).await)
                } else {
                    debug!("Ignoring unknown postback payload {payload:?}");
                    None
                }
            }
            InboundEvent::QuickReply(payload) => {
                info!("[{user_id}] Quick reply: {payload}");
                if payload == MORE_PAYLOAD {
                    Some(self.next_page(user_id).await)
                } else {
                    Some(self.select_currency(user_id, &payload).await)
                }
            }
        }
    }

    /// Fetch a fresh list and show its first page.
    async fn show_list(&self, user_id: &str) -> Reply {
        self.store.set_page(user_id, 1).await;

        match self.feed.fetch_snapshot().await {
            Ok(snapshot) => {
                let snapshot = Arc::new(snapshot);
                self.store.start(user_id, Arc::clone(&snapshot)).await;
                render::menu(&snapshot, 1)
            }
            Err(e) => {
                error!("Failed to fetch exchange rates for {user_id}: {e}");
                Reply::Text(APOLOGY.to_string())
            }
        }
    }

    async fn next_page(&self, user_id: &str) -> Reply {
        match self.store.advance(user_id).await {
            Some((page, snapshot)) => render::menu(&snapshot, page),
            None => {
                warn!("[{user_id}] asked for more but no rate list was fetched yet");
                Reply::Text(APOLOGY.to_string())
            }
        }
    }

    async fn select_currency(&self, user_id: &str, code: &str) -> Reply {
        let Some((page, snapshot)) = self.store.current(user_id).await else {
            return Reply::Text(NOT_FOUND.to_string());
        };

        match pagination::resolve(&snapshot, page, code) {
            Ok(entry) => Reply::Text(render::rate_details(entry)),
            Err(e) => {
                debug!("[{user_id}] {e}");
                Reply::Text(NOT_FOUND.to_string())
            }
        }
    }

    async fn acknowledge(&self, user_id: &str, action: SenderAction) {
        if let Err(e) = self.gateway.send_action(user_id, action).await {
            warn!("Failed to send {} to {user_id}: {e}", action.as_str());
        }
    }
}

fn is_trigger(text: &str) -> bool {
    text.trim().to_lowercase() == RATE_KEYWORD
}
