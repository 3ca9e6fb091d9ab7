use super::load_config;
use crate::command::CommandStrategy;
use ratebot_conversation::{ConversationController, ConversationStore};
use ratebot_core::{MessagingGateway, RateFeed};
use ratebot_messenger::{AppState, GraphClient};
use ratebot_providers::VietcombankFeed;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Input for the webhook server command.
pub struct ServeInput {
    /// Optional port (overrides config and `PORT`)
    pub port: Option<u16>,
    /// Optional config file path
    pub config: Option<PathBuf>,
}

/// Strategy for running the webhook server.
pub struct ServeStrategy;

impl CommandStrategy for ServeStrategy {
    type Input = ServeInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = load_config(input.config.as_ref())?;
        config.validate()?;

        let port = input.port.unwrap_or(config.server.port);

        let feed: Arc<dyn RateFeed> =
            Arc::new(VietcombankFeed::new(&config.feed.url, config.feed.timeout())?);
        let gateway: Arc<dyn MessagingGateway> = Arc::new(GraphClient::new(
            &config.messenger.message_url,
            &config.messenger.profile_url,
            &config.messenger.page_access_token,
            config.messenger.timeout(),
        )?);
        let store =
            ConversationStore::new(config.session.idle_ttl(), config.session.max_capacity);

        info!(
            "Starting ratebot (feed: {}, session idle TTL: {}s)",
            config.feed.url, config.session.idle_ttl_secs
        );

        let controller = ConversationController::new(feed, gateway, store);
        let state = AppState::new(controller, &config.messenger.verify_token);

        info!("Webhook server is running. Press Ctrl+C to stop.");
        ratebot_messenger::serve(port, state).await?;

        Ok(())
    }
}
