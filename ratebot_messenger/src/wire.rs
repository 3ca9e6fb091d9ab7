//! JSON envelopes of the Messenger platform.
//!
//! Inbound types only model the fields the bot reads; unknown fields are
//! ignored. Outbound types omit empty fields.

use ratebot_conversation::InboundEvent;
use ratebot_core::{Error, Reply, SenderAction};
use serde::{Deserialize, Serialize};

/// Body of a webhook delivery.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookRequest {
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub entry: Vec<Entry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub time: i64,
    #[serde(default)]
    pub messaging: Vec<Messaging>,
}

/// A single user event inside an entry.
#[derive(Debug, Clone, Deserialize)]
pub struct Messaging {
    pub sender: Option<User>,
    pub recipient: Option<User>,
    #[serde(default)]
    pub timestamp: i64,
    pub message: Option<Message>,
    pub postback: Option<Postback>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub mid: String,
    #[serde(default)]
    pub text: String,
    pub quick_reply: Option<QuickReply>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuickReply {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    pub payload: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Postback {
    #[serde(default)]
    pub title: String,
    pub payload: String,
}

/// The only `object` the bot subscribes to.
pub const PAGE_OBJECT: &str = "page";

impl WebhookRequest {
    /// Decode a delivery body, rejecting anything that is not a page event.
    pub fn parse(body: &[u8]) -> ratebot_core::Result<Self> {
        let request: Self =
            serde_json::from_slice(body).map_err(|e| Error::Unsupported(e.to_string()))?;
        if request.object != PAGE_OBJECT {
            return Err(Error::Unsupported(format!("object {:?}", request.object)));
        }
        Ok(request)
    }
}

impl Messaging {
    #[must_use]
    pub fn sender_id(&self) -> Option<&str> {
        self.sender.as_ref().map(|user| user.id.as_str())
    }

    /// The conversation event carried by this item, if any. A quick reply
    /// takes precedence over the text it was sent with.
    #[must_use]
    pub fn event(&self) -> Option<InboundEvent> {
        if let Some(message) = &self.message {
            return Some(match &message.quick_reply {
                Some(reply) => InboundEvent::QuickReply(reply.payload.clone()),
                None => InboundEvent::Text(message.text.clone()),
            });
        }
        self.postback
            .as_ref()
            .map(|postback| InboundEvent::Postback(postback.payload.clone()))
    }
}

/// Messaging type for replies to a user message.
pub const MESSAGING_TYPE_RESPONSE: &str = "RESPONSE";

/// Body posted to the Send API.
#[derive(Debug, Clone, Serialize)]
pub struct SendRequest {
    pub messaging_type: &'static str,
    pub recipient: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<OutboundMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_action: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutboundMessage {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub quick_replies: Vec<QuickReply>,
}

impl SendRequest {
    #[must_use]
    pub fn reply(recipient_id: &str, reply: &Reply) -> Self {
        let message = match reply {
            Reply::Text(text) => OutboundMessage {
                text: text.clone(),
                quick_replies: Vec::new(),
            },
            Reply::QuickReplies { text, options } => OutboundMessage {
                text: text.clone(),
                quick_replies: options
                    .iter()
                    .map(|option| QuickReply {
                        content_type: "text".to_string(),
                        title: option.title.clone(),
                        payload: option.payload.clone(),
                    })
                    .collect(),
            },
        };

        Self {
            messaging_type: MESSAGING_TYPE_RESPONSE,
            recipient: User {
                id: recipient_id.to_string(),
            },
            message: Some(message),
            sender_action: None,
        }
    }

    #[must_use]
    pub fn action(recipient_id: &str, action: SenderAction) -> Self {
        Self {
            messaging_type: MESSAGING_TYPE_RESPONSE,
            recipient: User {
                id: recipient_id.to_string(),
            },
            message: None,
            sender_action: Some(action.as_str()),
        }
    }
}
