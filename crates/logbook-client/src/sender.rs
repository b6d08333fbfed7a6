//! HTTP delivery of records to a logbook server.

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::header;
use hyper::{Request, Uri};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use logbook_core::{CreateLogRequest, CreateLogResponse};

use crate::error::ShipError;

/// Posts [`CreateLogRequest`]s to `<server>/log/`.
pub struct LogSender {
    client: Client<HttpConnector, Full<Bytes>>,
    endpoint: Uri,
}

impl LogSender {
    pub fn new(address: &str) -> Result<Self, ShipError> {
        Ok(Self {
            client: Client::builder(TokioExecutor::new()).build_http(),
            endpoint: endpoint_from_address(address)?,
        })
    }

    pub fn endpoint(&self) -> &Uri {
        &self.endpoint
    }

    /// POST one record and return the id the server assigned.
    pub async fn send(&self, record: &CreateLogRequest) -> Result<u64, ShipError> {
        let body = serde_json::to_vec(record)?;
        let request = Request::post(self.endpoint.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .body(Full::new(Bytes::from(body)))?;

        let response = self.client.request(request).await?;
        let status = response.status();
        let bytes = response.into_body().collect().await?.to_bytes();

        if !status.is_success() {
            return Err(ShipError::Status {
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        let created: CreateLogResponse = serde_json::from_slice(&bytes)?;
        Ok(created.id)
    }
}

/// Resolve a server address to the create endpoint.
///
/// Accepts `host:port`, `http://host:port` (posts to `/log/`), or a full
/// `http://` URL with a path, which is used as is. Only plain HTTP is
/// supported.
pub fn endpoint_from_address(address: &str) -> Result<Uri, ShipError> {
    let trimmed = address.trim();
    let with_scheme = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    };

    let invalid = || ShipError::Address(address.to_string());
    let uri: Uri = with_scheme.parse().map_err(|_| invalid())?;
    if uri.scheme_str() != Some("http") {
        return Err(invalid());
    }
    let authority = uri.authority().cloned().ok_or_else(invalid)?;

    match uri.path() {
        "" | "/" => Ok(Uri::builder()
            .scheme("http")
            .authority(authority)
            .path_and_query("/log/")
            .build()?),
        _ => Ok(uri),
    }
}
