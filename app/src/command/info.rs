use super::{ConfigInput, load_config};
use crate::command::CommandStrategy;

/// Strategy for displaying the effective configuration, tokens masked.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl CommandStrategy for InfoStrategy {
    type Input = ConfigInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = load_config(input.config.as_ref())?;

        println!("=== ratebot Configuration ===\n");

        println!("🌐 Server:");
        println!("  Port: {}", config.server.port);
        println!();

        println!("💬 Messenger:");
        println!("  Verify token: {}", mask(&config.messenger.verify_token));
        println!(
            "  Page access token: {}",
            mask(&config.messenger.page_access_token)
        );
        println!("  Message URL: {}", config.messenger.message_url);
        println!("  Profile URL: {}", config.messenger.profile_url);
        println!("  Timeout: {}s", config.messenger.timeout_secs);
        println!();

        println!("💱 Rate feed:");
        println!("  URL: {}", config.feed.url);
        println!("  Timeout: {}s", config.feed.timeout_secs);
        println!();

        println!("👤 Sessions:");
        println!("  Idle TTL: {}s", config.session.idle_ttl_secs);
        println!("  Max sessions: {}", config.session.max_capacity);
        println!();

        match config.validate() {
            Ok(()) => println!("✅ Configuration is complete"),
            Err(e) => println!("⚠️  {e}"),
        }

        Ok(())
    }
}

/// Keep the first and last four characters of a secret.
fn mask(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}
