//! logbook-http — axum routing layer over [`logbook_core::LogStore`].
//!
//! | Method | Path                             | Store op       |
//! |--------|----------------------------------|----------------|
//! | POST   | `/log/`                          | `create`       |
//! | GET    | `/log/`                          | `list_all`     |
//! | DELETE | `/log/`                          | `delete_all`   |
//! | GET    | `/log/{id}`                      | `get`          |
//! | DELETE | `/log/{id}`                      | `delete`       |
//! | GET    | `/log/date/{year}/{month}/{day}` | `list_by_date` |
//!
//! The collection routes also answer on `/log` without the trailing slash.
//! Any other method on a routed path gets `405 Method Not Allowed`.

pub mod error;
pub mod handlers;
pub mod server;

pub use error::ApiError;
pub use server::{router, serve};
