use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

const PLACEHOLDER_PREFIX: &str = "your-";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub messenger: MessengerConfig,
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "ServerConfig::default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: Self::default_port(),
        }
    }
}

impl ServerConfig {
    const fn default_port() -> u16 {
        8080
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MessengerConfig {
    /// Token echoed back by the platform during webhook verification
    pub verify_token: String,
    /// Page access token for the Send and Messenger Profile APIs
    pub page_access_token: String,
    #[serde(default = "MessengerConfig::default_message_url")]
    pub message_url: String,
    #[serde(default = "MessengerConfig::default_profile_url")]
    pub profile_url: String,
    #[serde(default = "MessengerConfig::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl MessengerConfig {
    fn default_message_url() -> String {
        "https://graph.facebook.com/v2.6/me/messages".to_string()
    }

    fn default_profile_url() -> String {
        "https://graph.facebook.com/v2.6/me/messenger_profile".to_string()
    }

    const fn default_timeout_secs() -> u64 {
        30
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FeedConfig {
    #[serde(default = "FeedConfig::default_url")]
    pub url: String,
    #[serde(default = "FeedConfig::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: Self::default_url(),
            timeout_secs: Self::default_timeout_secs(),
        }
    }
}

impl FeedConfig {
    fn default_url() -> String {
        "http://www.vietcombank.com.vn/ExchangeRates/ExrateXML.aspx".to_string()
    }

    const fn default_timeout_secs() -> u64 {
        30
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SessionConfig {
    /// Sessions untouched for this long are forgotten
    #[serde(default = "SessionConfig::default_idle_ttl_secs")]
    pub idle_ttl_secs: u64,
    #[serde(default = "SessionConfig::default_max_capacity")]
    pub max_capacity: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_ttl_secs: Self::default_idle_ttl_secs(),
            max_capacity: Self::default_max_capacity(),
        }
    }
}

impl SessionConfig {
    const fn default_idle_ttl_secs() -> u64 {
        6 * 60 * 60
    }

    const fn default_max_capacity() -> u64 {
        100_000
    }

    #[must_use]
    pub const fn idle_ttl(&self) -> Duration {
        Duration::from_secs(self.idle_ttl_secs)
    }
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("ratebot"))
    }

    /// Load `~/ratebot/config.json` and apply environment overrides.
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_dir()?.join("config.json");
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> anyhow::Result<Self> {
        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'ratebot init' to create config.",
                config_path.display()
            );
        }

        let content = std::fs::read_to_string(config_path)?;
        let mut config: Self = serde_json::from_str(&content)?;
        config.apply_overrides(|key| std::env::var(key).ok());

        info!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Override file values from a key lookup (normally the process
    /// environment). Unparseable values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT").and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }
        if let Some(token) = lookup("RATEBOT_VERIFY_TOKEN") {
            self.messenger.verify_token = token;
        }
        if let Some(token) = lookup("RATEBOT_PAGE_ACCESS_TOKEN") {
            self.messenger.page_access_token = token;
        }
        if let Some(url) = lookup("RATEBOT_FEED_URL") {
            self.feed.url = url;
        }
    }

    /// Reject configs that still carry empty or template tokens.
    pub fn validate(&self) -> anyhow::Result<()> {
        let tokens = [
            ("messenger.verify_token", &self.messenger.verify_token),
            (
                "messenger.page_access_token",
                &self.messenger.page_access_token,
            ),
        ];
        for (name, value) in tokens {
            if value.trim().is_empty() || value.starts_with(PLACEHOLDER_PREFIX) {
                anyhow::bail!("\"{name}\" is not configured");
            }
        }
        Ok(())
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let config_template = r#"{
  "server": {
    "port": 8080
  },
  "messenger": {
    "verify_token": "your-verify-token-here",
    "page_access_token": "your-page-access-token-here",
    "message_url": "https://graph.facebook.com/v2.6/me/messages",
    "profile_url": "https://graph.facebook.com/v2.6/me/messenger_profile",
    "timeout_secs": 30
  },
  "feed": {
    "url": "http://www.vietcombank.com.vn/ExchangeRates/ExrateXML.aspx",
    "timeout_secs": 30
  },
  "session": {
    "idle_ttl_secs": 21600,
    "max_capacity": 100000
  }
}"#;

        std::fs::write(&config_path, config_template)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Set messenger.verify_token to the token entered on the webhook page");
        println!("   2. Set messenger.page_access_token to the page's access token");
        println!("   3. Run 'ratebot register-profile' once to install greeting and menu");
        println!("   4. Run 'ratebot serve' and point the webhook at it");
        println!();
        println!("🔧 Environment overrides:");
        println!("   - PORT, RATEBOT_VERIFY_TOKEN, RATEBOT_PAGE_ACCESS_TOKEN, RATEBOT_FEED_URL");
        println!();
        Ok(())
    }
}
