use clap::{Parser, Subcommand};
use std::sync::Arc;

use welcome_bot::application::errors::ServerError;
use welcome_bot::domain::traits::Platform;
use welcome_bot::infrastructure::adapters::{LocalPlatform, MattermostPlatform};
use welcome_bot::infrastructure::config::Config;
use welcome_bot::infrastructure::manifest::Manifest;
use welcome_bot::infrastructure::server::{self, AppState};

#[derive(Parser)]
#[command(name = "welcome-bot")]
#[command(about = "Mattermost app managing per-channel welcome messages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the app server
    Run {
        /// Keep welcome messages in process memory instead of the Mattermost KV store
        #[arg(long)]
        in_memory: bool,
    },
    /// Show version
    Version,
    /// Print the app manifest for the current environment
    Manifest,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { in_memory } => run_server(in_memory),
        Commands::Version => {
            println!("welcome-bot v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Manifest => print_manifest(),
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run_server(in_memory: bool) -> Result<(), ServerError> {
    let config = Config::load_env()?;

    let platform: Arc<dyn Platform> = if in_memory {
        tracing::warn!("Using in-memory store; welcome messages are lost on restart");
        Arc::new(LocalPlatform::new())
    } else {
        Arc::new(MattermostPlatform::new())
    };

    let state = AppState::new(&config, platform);

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(server::serve(&config, state))
}

fn print_manifest() -> Result<(), ServerError> {
    let config = Config::load_env()?;
    let manifest = Manifest::new(&config);
    println!("{}", serde_json::to_string_pretty(&manifest)?);
    Ok(())
}
