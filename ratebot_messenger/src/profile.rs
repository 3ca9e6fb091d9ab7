//! Welcome screen and persistent menu.
//!
//! The profile is pushed once with `ratebot register-profile`; the platform
//! only shows changes after the conversation is reopened.

use ratebot_conversation::texts::{GET_STARTED_PAYLOAD, GREETING, MENU_RATE_TITLE, RATE_KEYWORD};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PageProfile {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub greeting: Vec<Greeting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get_started: Option<GetStarted>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub persistent_menu: Vec<PersistentMenu>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Greeting {
    pub locale: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GetStarted {
    pub payload: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PersistentMenu {
    pub locale: String,
    pub composer_input_disabled: bool,
    pub call_to_actions: Vec<CallToAction>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CallToAction {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub payload: String,
}

impl PageProfile {
    /// Greeting, "Get Started" button and a one-item menu opening the rate list.
    #[must_use]
    pub fn rate_bot() -> Self {
        Self {
            greeting: vec![Greeting {
                locale: "default".to_string(),
                text: GREETING.to_string(),
            }],
            get_started: Some(GetStarted {
                payload: GET_STARTED_PAYLOAD.to_string(),
            }),
            persistent_menu: vec![PersistentMenu {
                locale: "default".to_string(),
                composer_input_disabled: false,
                call_to_actions: vec![CallToAction {
                    kind: "postback".to_string(),
                    title: MENU_RATE_TITLE.to_string(),
                    payload: RATE_KEYWORD.to_string(),
                }],
            }],
        }
    }
}
