//! Telemetry model: the merged `SystemInfo` record.
//!
//! The server exposes system metrics through four separate endpoints.  The
//! client fetches all four and folds them into a single record:
//!
//! ```text
//! GET /system-info  ─┐  {temperature, ...}        (base object)
//! GET /cpu-load     ─┤  {load}            ──►  cpuLoad
//! GET /memory-info  ─┤  {total, free, ...} ──►  memory   (whole object)
//! GET /disk-info    ─┘  [{fs, type, ...}]  ──►  disk     (whole array)
//! ```
//!
//! The base object is spread first and the three derived keys are written on
//! top of it, so a `cpuLoad`, `memory` or `disk` key sent by `/system-info`
//! is always overridden.  Any other base key is kept verbatim in
//! [`SystemInfo::extra`].
//!
//! Merging is all-or-nothing: [`SystemInfo::merge`] either returns a complete
//! record or an error, never a half-filled one.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

/// Number of bytes in one gigabyte as displayed by the client (1024³).
pub const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Converts a byte count to gigabytes (1024³ bytes per GB).
pub fn gigabytes(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_GB
}

/// Errors produced while merging the four telemetry responses.
#[derive(Debug, Error)]
pub enum MergeError {
    /// `/system-info` did not return a JSON object.
    #[error("system-info response is not a JSON object")]
    BaseNotAnObject,

    /// `/cpu-load` did not carry a numeric `load` field.
    #[error("cpu-load response has no numeric `load` field")]
    MissingLoad,

    /// The merged object did not match the `SystemInfo` shape (for example a
    /// missing `temperature`, or `/disk-info` not returning an array).
    #[error("telemetry payload does not match the expected shape: {0}")]
    Shape(#[from] serde_json::Error),
}

/// Memory figures reported by `/memory-info`, all in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryInfo {
    pub total: u64,
    pub free: u64,
    pub used: u64,
    pub active: u64,
    pub available: u64,
}

/// One mounted filesystem as reported by `/disk-info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskInfo {
    /// Filesystem / device name (e.g. `/dev/sda1`).
    pub fs: String,
    /// Filesystem type (e.g. `ext4`).
    #[serde(rename = "type")]
    pub fs_type: String,
    /// Bytes in use.
    pub used: u64,
    /// Total capacity in bytes.
    pub size: u64,
}

/// The four raw JSON bodies returned by the telemetry endpoints.
///
/// Kept as untyped [`Value`]s so the merge rule can reproduce "spread the
/// base object, then override" exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryResponses {
    pub system_info: Value,
    pub cpu_load: Value,
    pub memory_info: Value,
    pub disk_info: Value,
}

/// The merged telemetry record shown in the System Info view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfo {
    /// CPU temperature in °C.
    pub temperature: f64,
    /// CPU load in percent.
    pub cpu_load: f64,
    pub memory: MemoryInfo,
    /// Filesystems in the order the server listed them.
    pub disk: Vec<DiskInfo>,
    /// Every other key from the `/system-info` response.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SystemInfo {
    /// Merges the four telemetry responses into one record.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError`] if the base response is not an object, the
    /// cpu-load response has no numeric `load`, or the merged object does not
    /// have the `SystemInfo` shape.
    pub fn merge(responses: TelemetryResponses) -> Result<Self, MergeError> {
        let TelemetryResponses {
            system_info,
            cpu_load,
            memory_info,
            disk_info,
        } = responses;

        let mut merged: Map<String, Value> = match system_info {
            Value::Object(map) => map,
            _ => return Err(MergeError::BaseNotAnObject),
        };

        let load = cpu_load
            .get("load")
            .filter(|v| v.is_number())
            .cloned()
            .ok_or(MergeError::MissingLoad)?;

        merged.insert("cpuLoad".to_string(), load);
        merged.insert("memory".to_string(), memory_info);
        merged.insert("disk".to_string(), disk_info);

        let info: SystemInfo = serde_json::from_value(Value::Object(merged))?;
        debug!(
            "merged telemetry: {} disk(s), {} extra field(s)",
            info.disk.len(),
            info.extra.len()
        );
        Ok(info)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
