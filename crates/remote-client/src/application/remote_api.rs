//! The transport seam between the use cases and the HTTP client.
//!
//! Use cases talk to the remote-control server only through the
//! [`RemoteTransport`] trait.  The infrastructure layer provides the real
//! implementation (`HttpTransport`, built on `reqwest`) and a recording
//! `MockTransport` for tests and offline runs.

use async_trait::async_trait;
use remote_core::CommandRequest;
use serde_json::Value;
use thiserror::Error;

/// Failures of a single HTTP exchange with the server.
///
/// All three kinds end up logged and ignored by the presentation layer; they
/// are kept distinct so the log line says what actually went wrong.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    /// The request never produced a response (unreachable host, DNS, reset).
    #[error("request to {path} failed: {message}")]
    Network { path: String, message: String },

    /// The server answered with a non-2xx status.
    #[error("{path} returned HTTP {status}")]
    Status { path: String, status: u16 },

    /// The response body was not valid JSON.
    #[error("{path} returned malformed JSON: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// HTTP operations the client needs from the remote-control server.
///
/// `path` is always one of the constants in `remote_core::protocol::endpoints`
/// (or a [`remote_core::PowerAction::path`]); the implementation prepends the
/// base URL.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteTransport: Send + Sync {
    /// Sends a cache-disabled `GET` and parses the body as JSON.
    async fn get_json(&self, path: &str) -> Result<Value, TransportError>;

    /// Sends a `POST` with an optional JSON body.  The response body is not read.
    async fn post(&self, path: &str, body: Option<CommandRequest>) -> Result<(), TransportError>;
}
