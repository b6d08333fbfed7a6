//! Core types for logbook-core.
//!
//! [`LogRecord`] is the only entity the store holds. Records are immutable
//! once created; there is no update path.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single stored log entry.
///
/// Everything except `id` is supplied by the caller and stored verbatim;
/// the store does not validate `source_ip` or interpret `content`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Assigned by the store at creation time. Never reused.
    pub id: u64,
    /// Identifier of the originating server. Opaque to the store.
    pub server_id: String,
    /// Free-text log content.
    pub content: String,
    /// Source address as reported by the client.
    pub source_ip: String,
    /// Caller-supplied timestamp. The offset is kept so calendar-date
    /// queries run in the timestamp's own timezone.
    pub log_time: DateTime<FixedOffset>,
}

/// Body of `POST /log/`: a record minus its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateLogRequest {
    pub server_id: String,
    pub content: String,
    pub source_ip: String,
    pub log_time: DateTime<FixedOffset>,
}

/// Response of `POST /log/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateLogResponse {
    pub id: u64,
}

impl LogRecord {
    /// True when `log_time` falls on `date` in its own offset.
    pub fn falls_on(&self, date: NaiveDate) -> bool {
        self.log_time.date_naive() == date
    }
}
