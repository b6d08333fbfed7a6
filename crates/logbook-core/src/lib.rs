//! logbook-core — the record type and the lock-guarded store behind logbook.
//!
//! # Architecture
//!
//! ```text
//! HTTP handlers ──► LogStore (one Mutex) ──► BTreeMap<id, LogRecord>
//! ```
//!
//! The store is the single source of truth. Callers only ever receive
//! clones of stored records; nothing outside [`store`] can mutate them.

pub mod config;
pub mod error;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use store::LogStore;
pub use types::{CreateLogRequest, CreateLogResponse, LogRecord};
