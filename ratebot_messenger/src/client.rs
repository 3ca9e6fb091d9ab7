use crate::profile::PageProfile;
use crate::wire::SendRequest;
use crate::{Error, Result};
use async_trait::async_trait;
use ratebot_core::{MessagingGateway, Reply, SenderAction};
use reqwest::{Client, Url};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

/// Client for the Graph API endpoints the bot posts to.
#[derive(Clone)]
pub struct GraphClient {
    client: Client,
    message_url: Url,
    profile_url: Url,
}

impl GraphClient {
    pub fn new(
        message_url: &str,
        profile_url: &str,
        access_token: &str,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            message_url: with_token(message_url, access_token)?,
            profile_url: with_token(profile_url, access_token)?,
        })
    }

    /// Install the greeting, "Get Started" button and persistent menu.
    pub async fn register_profile(&self, profile: &PageProfile) -> Result<()> {
        self.post(self.profile_url.clone(), profile).await?;
        info!("Messenger profile registered");
        Ok(())
    }

    async fn post<T: Serialize + Sync>(&self, url: Url, body: &T) -> Result<()> {
        debug!("POST {}: {}", url.path(), serde_json::to_string(body)?);

        let response = self.client.post(url).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}

fn with_token(url: &str, access_token: &str) -> Result<Url> {
    Url::parse_with_params(url, &[("access_token", access_token)])
        .map_err(|e| Error::Config(format!("Invalid Graph API URL {url}: {e}")))
}

#[async_trait]
impl MessagingGateway for GraphClient {
    async fn send_reply(&self, recipient_id: &str, reply: &Reply) -> anyhow::Result<()> {
        let body = SendRequest::reply(recipient_id, reply);
        self.post(self.message_url.clone(), &body).await?;
        Ok(())
    }

    async fn send_action(&self, recipient_id: &str, action: SenderAction) -> anyhow::Result<()> {
        let body = SendRequest::action(recipient_id, action);
        self.post(self.message_url.clone(), &body).await?;
        Ok(())
    }
}
