//! TunisBot Daemon - HTTP chat service for the Tunis tourist guide.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::{info, warn};
use tunisbot_shared::{Config, TunisBot};
use tunisbotd::AppState;

#[derive(Parser, Debug)]
#[command(name = "tunisbotd", version, about = "TunisBot HTTP service")]
struct Args {
    /// Config file (overrides $TUNISBOT_CONFIG and the default search paths)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Listen address, overrides [server].bind
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("TunisBot Daemon v{} starting", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let config = Config::load(args.config.as_deref()).context("Failed to load configuration")?;

    let bind = args.bind.unwrap_or_else(|| config.server.bind.clone());
    let addr: SocketAddr = bind
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", bind))?;

    // The embedding check uses a blocking HTTP client
    let bot = tokio::task::spawn_blocking(move || TunisBot::from_config(&config))
        .await
        .context("Startup task failed")?
        .context("Failed to initialize TunisBot")?;

    if !bot.semantic_available() {
        warn!("Running without embeddings: lexical matching only");
    }

    tunisbotd::run(AppState::new(bot), addr).await
}
