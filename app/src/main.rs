#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use clap::{Parser, Subcommand};
use command::{
    CommandStrategy, ConfigInput, InfoStrategy, InitStrategy, RegisterProfileStrategy, ServeInput,
    ServeStrategy, VersionStrategy,
};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "ratebot")]
#[command(about = "Messenger bot for Vietcombank exchange rates", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the webhook server
    Serve {
        /// Port to listen on (overrides config and PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Config file (defaults to ~/ratebot/config.json)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Install greeting, "Get Started" button and menu on the page
    RegisterProfile {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Show the effective configuration
    Info {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, config } => {
            ServeStrategy.execute(ServeInput { port, config }).await
        }
        Commands::RegisterProfile { config } => {
            RegisterProfileStrategy.execute(ConfigInput { config }).await
        }
        Commands::Info { config } => InfoStrategy.execute(ConfigInput { config }).await,
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}
