//! Test builders — ergonomic constructors for store inputs and HTTP bodies.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use chrono::{DateTime, FixedOffset};
use logbook_core::{LogRecord, LogStore};

// ---------------------------------------------------------------------------
// LogInput
// ---------------------------------------------------------------------------

/// Everything a caller supplies to `create`, minus the id.
#[derive(Debug, Clone, PartialEq)]
pub struct LogInput {
    pub content: String,
    pub server_id: String,
    pub source_ip: String,
    pub log_time: DateTime<FixedOffset>,
}

impl LogInput {
    /// Insert into `store` and return the assigned id.
    pub fn create_in(&self, store: &LogStore) -> u64 {
        store.create(
            self.content.clone(),
            self.server_id.clone(),
            self.source_ip.clone(),
            self.log_time,
        )
    }

    /// The record the store should hold for this input under `id`.
    pub fn expected_record(&self, id: u64) -> LogRecord {
        LogRecord {
            id,
            server_id: self.server_id.clone(),
            content: self.content.clone(),
            source_ip: self.source_ip.clone(),
            log_time: self.log_time,
        }
    }

    /// JSON body for `POST /log/`.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "server_id": self.server_id,
            "content": self.content,
            "source_ip": self.source_ip,
            "log_time": self.log_time.to_rfc3339(),
        })
    }
}

/// Fluent builder for [`LogInput`] fixtures.
///
/// # Example
///
/// ```rust
/// let input = LogInputBuilder::new("disk full")
///     .server("srv1")
///     .ip("10.0.0.1")
///     .at("2024-01-05T10:00:00Z")
///     .build();
/// ```
pub struct LogInputBuilder {
    content: String,
    server_id: String,
    source_ip: String,
    log_time: DateTime<FixedOffset>,
}

impl LogInputBuilder {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            server_id: "test-server".to_string(),
            source_ip: "127.0.0.1".to_string(),
            log_time: ts("2024-01-05T10:00:00Z"),
        }
    }

    pub fn server(mut self, server_id: impl Into<String>) -> Self {
        self.server_id = server_id.into();
        self
    }

    pub fn ip(mut self, source_ip: impl Into<String>) -> Self {
        self.source_ip = source_ip.into();
        self
    }

    /// Set `log_time` from an RFC 3339 string.
    pub fn at(mut self, rfc3339: &str) -> Self {
        self.log_time = ts(rfc3339);
        self
    }

    pub fn build(self) -> LogInput {
        LogInput {
            content: self.content,
            server_id: self.server_id,
            source_ip: self.source_ip,
            log_time: self.log_time,
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Parse an RFC 3339 timestamp, panicking on bad input.
pub fn ts(rfc3339: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(rfc3339)
        .unwrap_or_else(|e| panic!("bad test timestamp {rfc3339:?}: {e}"))
}

/// The "hello" record of the reference scenario.
pub fn hello_input() -> LogInput {
    LogInputBuilder::new("hello")
        .server("srv1")
        .ip("10.0.0.1")
        .at("2024-01-05T10:00:00Z")
        .build()
}

/// The "world" record of the reference scenario.
pub fn world_input() -> LogInput {
    LogInputBuilder::new("world")
        .server("srv2")
        .ip("10.0.0.2")
        .at("2024-01-06T10:00:00Z")
        .build()
}

/// Build `n` inputs spread over three servers and the first ten days of
/// January 2024.
pub fn build_inputs(n: usize) -> Vec<LogInput> {
    (0..n)
        .map(|i| {
            LogInputBuilder::new(format!("log line {i}"))
                .server(format!("srv-{}", i % 3))
                .ip(format!("10.0.0.{}", i % 250))
                .at(&format!("2024-01-{:02}T{:02}:00:00Z", i % 10 + 1, i % 24))
                .build()
        })
        .collect()
}
