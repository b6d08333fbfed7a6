//! logbook-client — follows the systemd journal and ships sshd connection
//! lines to a logbook server.
//!
//! # Pipeline
//!
//! ```text
//! journalctl -f -o json ──► parser ──► CreateLogRequest ──► POST /log/
//! ```
//!
//! Lines that are not sshd connection messages are skipped. A failed POST
//! is logged and the stream keeps going.

pub mod error;
pub mod journal;
pub mod parser;
pub mod sender;

pub use error::{ParseError, ShipError};
pub use journal::{journalctl_command, JournalFeed};
pub use parser::{parse_line, SshEvent};
pub use sender::LogSender;

/// Options for [`run`], normally filled from the CLI.
#[derive(Debug, Clone)]
pub struct ShipOptions {
    /// Server address; see [`sender::endpoint_from_address`].
    pub address: String,
    /// Restrict the journal to one `_COMM` (e.g. `sshd`).
    pub comm: Option<String>,
    /// Print requests to stdout instead of sending them.
    pub dry_run: bool,
}

/// What [`Shipper::handle_line`] did with a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Skipped,
    Printed,
    Sent(u64),
}

/// Turns journal lines into records and delivers them.
pub struct Shipper {
    sender: Option<LogSender>,
}

impl Shipper {
    pub fn new(sender: LogSender) -> Self {
        Self {
            sender: Some(sender),
        }
    }

    /// A shipper that prints each request as one JSON line.
    pub fn dry_run() -> Self {
        Self { sender: None }
    }

    /// Parse one journal line and ship it if it is an sshd connection line.
    ///
    /// Unparseable lines are skipped, not errors; only delivery fails.
    pub async fn handle_line(&self, line: &str) -> Result<Outcome, ShipError> {
        let event = match parse_line(line) {
            Ok(Some(event)) => event,
            Ok(None) => return Ok(Outcome::Skipped),
            Err(e) => {
                tracing::debug!(error = %e, "skipping journal line");
                return Ok(Outcome::Skipped);
            }
        };

        tracing::debug!(
            host = %event.hostname,
            ip = %event.ip,
            port = event.port,
            pid = ?event.pid,
            "sshd connection line"
        );
        let request = event.into_request();

        match &self.sender {
            Some(sender) => {
                let id = sender.send(&request).await?;
                tracing::info!(id, "log reported");
                Ok(Outcome::Sent(id))
            }
            None => {
                println!("{}", serde_json::to_string(&request)?);
                Ok(Outcome::Printed)
            }
        }
    }
}

/// Follow the journal until it closes, shipping every matching line.
pub async fn run(opts: ShipOptions) -> anyhow::Result<()> {
    let shipper = if opts.dry_run {
        Shipper::dry_run()
    } else {
        Shipper::new(LogSender::new(&opts.address)?)
    };

    let mut feed = JournalFeed::spawn(journalctl_command(opts.comm.as_deref()))?;
    tracing::info!(pid = ?feed.id(), "following journal");

    let mut shipped = 0u64;
    while let Some(line) = feed.next_line().await? {
        match shipper.handle_line(&line).await {
            Ok(Outcome::Skipped) => {}
            Ok(_) => shipped += 1,
            Err(e) => tracing::warn!(error = %e, "failed to ship log line"),
        }
    }

    tracing::info!(shipped, "journal stream ended");
    Ok(())
}
