use super::{ConfigInput, load_config};
use crate::command::CommandStrategy;
use ratebot_messenger::{GraphClient, PageProfile};
use tracing::info;

/// Strategy for pushing the greeting and persistent menu to the page.
///
/// Only needed when the profile changes; Messenger shows the new menu after
/// the conversation is reopened.
#[derive(Debug, Clone, Copy)]
pub struct RegisterProfileStrategy;

impl CommandStrategy for RegisterProfileStrategy {
    type Input = ConfigInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = load_config(input.config.as_ref())?;
        config.validate()?;

        let client = GraphClient::new(
            &config.messenger.message_url,
            &config.messenger.profile_url,
            &config.messenger.page_access_token,
            config.messenger.timeout(),
        )?;

        info!("Registering Messenger profile at {}", config.messenger.profile_url);
        client.register_profile(&PageProfile::rate_bot()).await?;

        println!("✅ Greeting and menu registered");
        Ok(())
    }
}
