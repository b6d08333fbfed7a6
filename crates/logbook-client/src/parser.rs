//! Parsing of `journalctl -o json` lines into sshd connection events.
//!
//! Only messages carrying `<ipv4> port <n>` are of interest; every other
//! line parses to `Ok(None)`.

use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset};
use logbook_core::CreateLogRequest;
use regex::Regex;
use serde::Deserialize;

use crate::error::ParseError;

static IP_AND_PORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        ([0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3})
        \s+ port \s+
        ([0-9]+)
        ",
    )
    .expect("static sshd pattern must compile")
});

/// The journal fields we read. Everything in the export format is a string.
#[derive(Debug, Deserialize)]
struct JournalFields {
    #[serde(rename = "MESSAGE")]
    message: Option<serde_json::Value>,
    #[serde(rename = "_HOSTNAME")]
    hostname: Option<String>,
    #[serde(rename = "_PID")]
    pid: Option<String>,
    #[serde(rename = "_SOURCE_REALTIME_TIMESTAMP")]
    source_realtime: Option<String>,
    #[serde(rename = "__REALTIME_TIMESTAMP")]
    realtime: Option<String>,
}

/// One sshd line with a client address in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshEvent {
    pub hostname: String,
    pub pid: Option<String>,
    pub ip: String,
    pub port: u16,
    pub message: String,
    /// Truncated to whole seconds, UTC.
    pub timestamp: DateTime<FixedOffset>,
}

impl SshEvent {
    /// Map onto the server's create body: host becomes `server_id`, the
    /// message is the content.
    pub fn into_request(self) -> CreateLogRequest {
        CreateLogRequest {
            server_id: self.hostname,
            content: self.message,
            source_ip: self.ip,
            log_time: self.timestamp,
        }
    }
}

/// Parse a single journal JSON line.
pub fn parse_line(line: &str) -> Result<Option<SshEvent>, ParseError> {
    let fields: JournalFields = serde_json::from_str(line)?;

    let message = match fields.message {
        Some(serde_json::Value::String(s)) => s,
        Some(_) => return Err(ParseError::NonTextMessage),
        None => return Err(ParseError::MissingField("MESSAGE")),
    };

    let Some((ip, port)) = extract_ip_and_port(&message) else {
        return Ok(None);
    };

    let hostname = fields
        .hostname
        .ok_or(ParseError::MissingField("_HOSTNAME"))?;
    // Prefer the time the sender logged it; fall back to journal receive time.
    let raw_ts = fields
        .source_realtime
        .or(fields.realtime)
        .ok_or(ParseError::MissingField("_SOURCE_REALTIME_TIMESTAMP"))?;

    Ok(Some(SshEvent {
        hostname,
        pid: fields.pid,
        ip,
        port,
        message,
        timestamp: micros_to_time(&raw_ts)?,
    }))
}

/// Pull `(ip, port)` out of an sshd message.
pub fn extract_ip_and_port(message: &str) -> Option<(String, u16)> {
    let caps = IP_AND_PORT.captures(message)?;
    let port = caps.get(2)?.as_str().parse().ok()?;
    Some((caps.get(1)?.as_str().to_string(), port))
}

fn micros_to_time(raw: &str) -> Result<DateTime<FixedOffset>, ParseError> {
    let micros: i64 = raw
        .parse()
        .map_err(|_| ParseError::BadTimestamp(raw.to_string()))?;
    DateTime::from_timestamp(micros.div_euclid(1_000_000), 0)
        .map(|t| t.fixed_offset())
        .ok_or_else(|| ParseError::BadTimestamp(raw.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
