use clap::Parser;
use logbook_client::ShipOptions;

#[derive(Parser)]
#[command(name = "logbook-ship", about = "Forward sshd journal entries to a logbook server")]
struct Cli {
    /// Server address, e.g. http://localhost:8080 or a full /log/ URL.
    #[arg(long, env = "AS_ADDRESS", default_value = "http://localhost:8080")]
    address: String,
    /// Only follow journal entries from this command, e.g. `sshd`.
    #[arg(long)]
    comm: Option<String>,
    /// Print records as JSON lines instead of sending them.
    #[arg(long)]
    dry_run: bool,
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    // stdout carries --dry-run output, so diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    logbook_client::run(ShipOptions {
        address: cli.address,
        comm: cli.comm,
        dry_run: cli.dry_run,
    })
    .await
}
