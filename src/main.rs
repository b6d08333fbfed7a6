use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use logbook::config::Config;
use logbook::LogStore;

#[derive(Parser)]
#[command(name = "logbook", about = "In-memory log record store over HTTP")]
struct Cli {
    /// TOML config file layered over the built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Listen host. Overrides the config file.
    #[arg(long)]
    host: Option<String>,
    /// Listen port. Overrides the config file and SERVERPORT.
    #[arg(long)]
    port: Option<u16>,
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    tracing::debug!(?config, "configuration loaded");

    let store = Arc::new(LogStore::new());
    logbook::http::serve(store, &config.server).await
}
