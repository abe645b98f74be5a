//! Jellyfin browse tool
//!
//! Browses a Jellyfin catalog or resolves an item to its stream URL and
//! prints the result as JSON.
//!
//! Server settings come from the config file and `JELLYFIN_` environment
//! variables, e.g. `JELLYFIN_SERVER__TOKEN`.

use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use jellyfin_client::JellyfinClient;
use jellyfin_media_source::{logging::init_logging, Config, JellyfinSource};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "jellyfin-browse", about = "Browse a Jellyfin catalog")]
struct Cli {
    /// Configuration file
    #[arg(short, long, env = "JELLYFIN_CONFIG")]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the node for an item, or the library root
    Browse {
        /// Item id; omit for the root
        id: Option<String>,
    },
    /// Print the stream URL and MIME type of an item
    Resolve {
        id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    init_logging(&config.logging)?;
    config.validate().context("Invalid configuration")?;

    let client = JellyfinClient::with_credentials(
        &config.server.url,
        &config.server.token,
        &config.server.user_id,
        &config.server.device_id,
    )?;
    info!("Using Jellyfin server at {}", client.host());

    let source = JellyfinSource::with_client(&config.source.name, Arc::new(client));

    let output = match cli.command {
        Command::Browse { id } => serde_json::to_string_pretty(&source.browse_media(id.as_deref()).await?)?,
        Command::Resolve { id } => serde_json::to_string_pretty(&source.resolve_media(&id).await?)?,
    };
    println!("{output}");

    Ok(())
}
