//! Store — in-memory collection of [`LogRecord`] values keyed by id.
//!
//! Every operation takes the one store lock for its whole body, including
//! while building returned vectors, so operations are linearizable with
//! respect to each other. No operation does I/O while holding the lock.
//!
//! Ids come from a counter that only moves forward. Neither `delete` nor
//! `delete_all` rolls it back, so a retired id is never handed out again.
//!
//! Listing operations return records in ascending id order, which is also
//! creation order.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, NaiveDate};
use parking_lot::Mutex;

use crate::error::StoreError;
use crate::types::LogRecord;

#[derive(Debug, Default)]
struct Inner {
    records: BTreeMap<u64, LogRecord>,
    next_id: u64,
}

/// Lock-guarded in-memory log record store.
///
/// Construct one per server (or per test); instances share nothing.
#[derive(Debug, Default)]
pub struct LogStore {
    inner: Mutex<Inner>,
}

impl LogStore {
    /// An empty store whose first id will be 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new record and return its id.
    ///
    /// Inputs are not validated: empty strings and any timestamp are accepted.
    pub fn create(
        &self,
        content: impl Into<String>,
        server_id: impl Into<String>,
        source_ip: impl Into<String>,
        log_time: DateTime<FixedOffset>,
    ) -> u64 {
        // Build the record before locking; it only becomes visible on insert.
        let mut record = LogRecord {
            id: 0,
            server_id: server_id.into(),
            content: content.into(),
            source_ip: source_ip.into(),
            log_time,
        };

        let mut inner = self.inner.lock();
        let id = inner.next_id;
        record.id = id;
        inner.records.insert(id, record);
        inner.next_id += 1;
        id
    }

    /// Fetch a copy of the record with `id`.
    pub fn get(&self, id: u64) -> Result<LogRecord, StoreError> {
        self.inner
            .lock()
            .records
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Remove the record with `id`.
    pub fn delete(&self, id: u64) -> Result<(), StoreError> {
        self.inner
            .lock()
            .records
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    /// Remove every record in one step. The id counter keeps its value.
    pub fn delete_all(&self) {
        self.inner.lock().records.clear();
    }

    /// Every stored record, ascending by id.
    pub fn list_all(&self) -> Vec<LogRecord> {
        self.inner.lock().records.values().cloned().collect()
    }

    /// Every stored record whose `log_time` falls on the given calendar date,
    /// ascending by id. A date that does not exist (month 13, Feb 30) matches
    /// nothing.
    pub fn list_by_date(&self, year: i32, month: u32, day: u32) -> Vec<LogRecord> {
        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            return Vec::new();
        };

        self.inner
            .lock()
            .records
            .values()
            .filter(|r| r.falls_on(date))
            .cloned()
            .collect()
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.inner.lock().records.len()
    }

    /// True when no live records remain.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
