//! In-memory transport that records requests instead of sending them.
//!
//! # Why a mock transport?
//!
//! The real [`HttpTransport`](super::HttpTransport) needs a running
//! remote-control server, and the things worth asserting (how many moves a
//! held button sent, which body a click produced) are awkward to observe on
//! the wire.  `MockTransport` pushes every call into a `Mutex<Vec<...>>` so
//! tests can inspect exactly what was sent and in what order.
//!
//! It also backs the binary's `--offline` mode, serving canned telemetry.
//!
//! # Usage in tests
//!
//! ```ignore
//! let transport = Arc::new(MockTransport::with_sample_telemetry());
//! let dispatcher = CommandDispatcher::new(transport.clone());
//!
//! dispatcher.send_volume_command(Command::VolumeUp).await.unwrap();
//!
//! assert_eq!(transport.command_posts(), vec![CommandRequest::bare(Command::VolumeUp)]);
//! ```

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use remote_core::protocol::endpoints::{COMMAND, CPU_LOAD, DISK_INFO, MEMORY_INFO, SYSTEM_INFO};
use remote_core::CommandRequest;
use serde_json::{json, Value};
use tracing::debug;

use crate::application::remote_api::{RemoteTransport, TransportError};

/// A canned GET outcome: a JSON body or an HTTP error status.
#[derive(Debug, Clone)]
pub enum CannedResponse {
    Json(Value),
    Status(u16),
}

/// A transport that records all calls without any network I/O.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Every `(path, body)` passed to `post`, in call order.
    pub posts: Mutex<Vec<(String, Option<CommandRequest>)>>,
    /// Every path passed to `get_json`, in call order.
    pub gets: Mutex<Vec<String>>,
    /// Response served per GET path; unknown paths answer 404.
    responses: Mutex<HashMap<String, CannedResponse>>,
    /// When set, every POST fails with this status (after being recorded).
    post_failure: Option<u16>,
}

impl MockTransport {
    /// Creates a mock with no canned responses; every POST succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock whose POSTs all fail with `status`.
    pub fn failing(status: u16) -> Self {
        Self {
            post_failure: Some(status),
            ..Self::default()
        }
    }

    /// Creates a mock serving a plausible reading on all four telemetry endpoints.
    pub fn with_sample_telemetry() -> Self {
        let mock = Self::new();
        mock.respond(SYSTEM_INFO, CannedResponse::Json(json!({ "temperature": 47.5 })));
        mock.respond(CPU_LOAD, CannedResponse::Json(json!({ "load": 12.25 })));
        mock.respond(
            MEMORY_INFO,
            CannedResponse::Json(json!({
                "total": 17179869184u64,
                "free": 5368709120u64,
                "used": 11811160064u64,
                "active": 7516192768u64,
                "available": 9663676416u64
            })),
        );
        mock.respond(
            DISK_INFO,
            CannedResponse::Json(json!([
                { "fs": "/dev/sda2", "type": "ext4", "used": 128849018880u64, "size": 498216206336u64 }
            ])),
        );
        mock
    }

    /// Sets (or replaces) the response for GET `path`.
    pub fn respond(&self, path: &str, response: CannedResponse) {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), response);
    }

    /// Bodies of every POST to `/`, in call order.
    pub fn command_posts(&self) -> Vec<CommandRequest> {
        self.posts
            .lock()
            .unwrap()
            .iter()
            .filter(|(path, _)| path == COMMAND)
            .filter_map(|(_, body)| *body)
            .collect()
    }

    /// Paths of every POST, in call order.
    pub fn post_paths(&self) -> Vec<String> {
        self.posts
            .lock()
            .unwrap()
            .iter()
            .map(|(path, _)| path.clone())
            .collect()
    }

    /// Number of GET calls made so far.
    pub fn get_count(&self) -> usize {
        self.gets.lock().unwrap().len()
    }
}

#[async_trait]
impl RemoteTransport for MockTransport {
    async fn get_json(&self, path: &str) -> Result<Value, TransportError> {
        self.gets.lock().unwrap().push(path.to_string());
        let canned = self.responses.lock().unwrap().get(path).cloned();
        match canned {
            Some(CannedResponse::Json(value)) => Ok(value),
            Some(CannedResponse::Status(status)) => Err(TransportError::Status {
                path: path.to_string(),
                status,
            }),
            None => Err(TransportError::Status {
                path: path.to_string(),
                status: 404,
            }),
        }
    }

    async fn post(&self, path: &str, body: Option<CommandRequest>) -> Result<(), TransportError> {
        debug!("mock POST {path} {body:?}");
        self.posts.lock().unwrap().push((path.to_string(), body));
        match self.post_failure {
            Some(status) => Err(TransportError::Status {
                path: path.to_string(),
                status,
            }),
            None => Ok(()),
        }
    }
}
