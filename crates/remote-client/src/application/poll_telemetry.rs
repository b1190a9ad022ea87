//! TelemetryPoller: fetches the four telemetry endpoints and merges them.
//!
//! The four GETs run concurrently on the current task with `tokio::try_join!`.
//! The first failure short-circuits the join, so either all four bodies are
//! available and merged, or the poll fails as a whole.

use std::sync::Arc;

use remote_core::protocol::endpoints::{CPU_LOAD, DISK_INFO, MEMORY_INFO, SYSTEM_INFO};
use remote_core::{MergeError, SystemInfo, TelemetryResponses};
use thiserror::Error;
use tracing::{debug, warn};

use crate::application::remote_api::{RemoteTransport, TransportError};

/// Why a telemetry poll produced no record.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// One of the four GETs failed (transport, status or JSON).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// All four bodies arrived but could not be merged.
    #[error(transparent)]
    Merge(#[from] MergeError),
}

/// Polls telemetry from the remote-control server.
pub struct TelemetryPoller {
    transport: Arc<dyn RemoteTransport>,
}

impl TelemetryPoller {
    pub fn new(transport: Arc<dyn RemoteTransport>) -> Self {
        Self { transport }
    }

    /// Fetches `/system-info`, `/cpu-load`, `/memory-info` and `/disk-info` in
    /// parallel and merges them into one [`SystemInfo`].
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError`] if any request fails or the bodies do not
    /// merge.  No partial record is ever returned.
    pub async fn fetch_system_info(&self) -> Result<SystemInfo, TelemetryError> {
        let t = &self.transport;
        let (system_info, cpu_load, memory_info, disk_info) = tokio::try_join!(
            t.get_json(SYSTEM_INFO),
            t.get_json(CPU_LOAD),
            t.get_json(MEMORY_INFO),
            t.get_json(DISK_INFO),
        )?;

        let info = SystemInfo::merge(TelemetryResponses {
            system_info,
            cpu_load,
            memory_info,
            disk_info,
        })?;
        debug!("telemetry: {:.2}ºC, load {:.2}%", info.temperature, info.cpu_load);
        Ok(info)
    }
}

/// Applies a poll result to the held value.
///
/// A success replaces `current` wholesale.  A failure is logged and leaves
/// `current` untouched, whether it holds an older record or nothing at all.
/// Returns `true` when `current` was replaced.
pub fn apply_poll_result(
    current: &mut Option<SystemInfo>,
    result: Result<SystemInfo, TelemetryError>,
) -> bool {
    match result {
        Ok(info) => {
            *current = Some(info);
            true
        }
        Err(e) => {
            warn!("failed to fetch system info: {e}");
            false
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
