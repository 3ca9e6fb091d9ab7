//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type with its own input, dispatched
//! statically from `main`.

use ratebot_config::Config;
use std::path::PathBuf;

mod info;
mod init;
mod register_profile;
mod serve;
mod version;

pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use register_profile::RegisterProfileStrategy;
pub use serve::{ServeInput, ServeStrategy};
pub use version::VersionStrategy;

/// Input for commands that only need the configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigInput {
    /// Explicit config file; `~/ratebot/config.json` when absent
    pub config: Option<PathBuf>,
}

/// Load the config from an explicit path or the default location.
fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Core trait defining the contract for all command strategies.
///
/// # Design Principles
/// - **Static dispatch**: All calls are monomorphized at compile time
/// - **Type safety**: Each strategy defines its own input type via associated type
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
