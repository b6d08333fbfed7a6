//! Error types for the shipper.

use hyper::StatusCode;

/// Why a journal line could not be turned into an [`SshEvent`](crate::SshEvent).
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("journal line is not JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("journal line has no {0} field")]
    MissingField(&'static str),
    #[error("MESSAGE is not text")]
    NonTextMessage,
    #[error("bad journal timestamp {0:?}")]
    BadTimestamp(String),
}

/// Failures reading the journal or delivering records.
#[derive(Debug, thiserror::Error)]
pub enum ShipError {
    #[error("starting journal reader: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("journal reader has no stdout")]
    NoStdout,
    #[error("reading journal: {0}")]
    Read(#[source] std::io::Error),
    #[error("invalid server address {0:?}")]
    Address(String),
    #[error("building request: {0}")]
    Request(#[from] hyper::http::Error),
    #[error("encoding request: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("sending to server: {0}")]
    Send(#[from] hyper_util::client::legacy::Error),
    #[error("reading response: {0}")]
    Body(#[from] hyper::Error),
    #[error("server answered {status}: {body}")]
    Status { status: StatusCode, body: String },
}
