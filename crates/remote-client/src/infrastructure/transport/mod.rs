//! HTTP transport for the remote-control server, built on `reqwest`.
//!
//! Implements [`RemoteTransport`] against a base URL:
//!
//! - `GET` requests carry `Cache-Control: no-cache`, `Pragma: no-cache` and
//!   `Expires: 0` so no proxy in between serves stale telemetry.
//! - `POST` requests carry `Content-Type: application/json` and, for
//!   commands, the serialized `{command, x?, y?}` body.
//! - Any non-2xx status is an error.
//!
//! No timeout is configured on the client: a request that never completes
//! only blocks the task awaiting it.

pub mod mock;

use async_trait::async_trait;
use remote_core::{endpoint_url, CommandRequest};
use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE, EXPIRES, PRAGMA};
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::{debug, trace};

use crate::application::remote_api::{RemoteTransport, TransportError};

const APPLICATION_JSON: &str = "application/json";

/// `reqwest`-backed implementation of [`RemoteTransport`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Creates a transport with a default `reqwest` client.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Client`] if the HTTP client cannot be built
    /// (for example when the TLS backend fails to initialise).
    pub fn new(base_url: impl Into<String>) -> Result<Self, TransportError> {
        let client = Client::builder()
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;
        Ok(Self::with_client(base_url, client))
    }

    /// Creates a transport around an existing `reqwest` client.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// The base URL every path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn network_error(path: &str, e: reqwest::Error) -> TransportError {
        TransportError::Network {
            path: path.to_string(),
            message: e.to_string(),
        }
    }

    fn check_status(path: &str, response: &Response) -> Result<(), TransportError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(TransportError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            })
        }
    }
}

#[async_trait]
impl RemoteTransport for HttpTransport {
    async fn get_json(&self, path: &str) -> Result<Value, TransportError> {
        let url = endpoint_url(&self.base_url, path);
        trace!("GET {url}");

        let response = self
            .client
            .get(&url)
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .header(EXPIRES, "0")
            .send()
            .await
            .map_err(|e| Self::network_error(path, e))?;
        Self::check_status(path, &response)?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Self::network_error(path, e))?;
        serde_json::from_slice(&bytes).map_err(|source| TransportError::Decode {
            path: path.to_string(),
            source,
        })
    }

    async fn post(&self, path: &str, body: Option<CommandRequest>) -> Result<(), TransportError> {
        let url = endpoint_url(&self.base_url, path);
        trace!("POST {url} {body:?}");

        let mut request = self.client.post(&url).header(CONTENT_TYPE, APPLICATION_JSON);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Self::network_error(path, e))?;
        Self::check_status(path, &response)?;
        debug!("POST {path} -> {}", response.status());
        Ok(())
    }
}
