//! Domain-specific assertion macros for logbook harnesses.
//!
//! These add context-rich failure messages that make it clear *which* store
//! invariant was violated.

use logbook_core::LogRecord;
use std::collections::HashSet;

// ---------------------------------------------------------------------------
// Store result assertions
// ---------------------------------------------------------------------------

/// Assert that a store call failed with `NotFound` for the given id.
///
/// ```rust
/// assert_not_found!(store.get(3), 3);
/// ```
#[macro_export]
macro_rules! assert_not_found {
    ($result:expr, $id:expr) => {{
        let id: u64 = $id;
        match $result {
            Err(logbook_core::StoreError::NotFound(actual)) if actual == id => {}
            Err(logbook_core::StoreError::NotFound(actual)) => panic!(
                "assert_not_found! failed: NotFound carried id {} but expected {}",
                actual, id
            ),
            Ok(v) => panic!(
                "assert_not_found! failed: id {} is still live: {:?}",
                id, v
            ),
        }
    }};
}

/// Assert that a listing contains exactly the given contents, in order.
///
/// ```rust
/// assert_contents!(store.list_all(), ["hello", "world"]);
/// ```
#[macro_export]
macro_rules! assert_contents {
    ($records:expr, [$($content:expr),* $(,)?]) => {{
        let records: Vec<logbook_core::LogRecord> = $records;
        let actual: Vec<&str> = records.iter().map(|r| r.content.as_str()).collect();
        let expected: Vec<&str> = vec![$($content),*];
        pretty_assertions::assert_eq!(actual, expected, "record contents differ");
    }};
}

// ---------------------------------------------------------------------------
// Id invariant helpers
// ---------------------------------------------------------------------------

/// Panic unless `ids` is strictly increasing.
pub fn assert_strictly_increasing(ids: &[u64]) {
    for pair in ids.windows(2) {
        assert!(
            pair[0] < pair[1],
            "ids must be strictly increasing, found {} then {}",
            pair[0],
            pair[1]
        );
    }
}

/// Panic if any record id appears more than once.
pub fn assert_unique_ids(records: &[LogRecord]) {
    let mut seen = HashSet::with_capacity(records.len());
    for r in records {
        assert!(seen.insert(r.id), "record id {} appears twice", r.id);
    }
}
