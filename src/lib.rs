//! logbook — in-memory log record store behind a small HTTP API.
//!
//! Clients POST log entries (server id, content, source IP, timestamp) and
//! later fetch, filter by calendar date, or delete them. Nothing is
//! persisted; restarting the process empties the store.
//!
//! # Architecture
//!
//! ```text
//! main ──► logbook_http::serve ──► router ──► handlers ──► LogStore
//!                                                     (one Mutex)
//! ```
//!
//! `logbook_client` is the producer side: it follows the systemd journal and
//! posts sshd connection lines to the server.
//!
//! This crate re-exports all three so integration tests and the binary can
//! import them from one place.

pub use logbook_core::{config, error, store, types};
pub use logbook_core::{CreateLogRequest, CreateLogResponse, LogRecord, LogStore, StoreError};
pub use logbook_client as client;
pub use logbook_http as http;
