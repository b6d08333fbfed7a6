//! Store error type.

/// The only failure the store reports. Raised by `get` and `delete` when the
/// id has no live record, whether it was deleted or never assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("log with id={0} not found")]
    NotFound(u64),
}
