//! # remote-core
//!
//! Shared library for the remote-control client containing the HTTP wire
//! types, the endpoint table, and the telemetry model.
//!
//! This crate has zero dependencies on sockets, HTTP clients, or async
//! runtimes.  Everything here can be unit-tested without a server.
//!
//! # Architecture overview (for beginners)
//!
//! The remote-control client drives a remote computer (mouse, volume, power)
//! and shows a few system metrics of that computer.  The computer runs a small
//! HTTP server; the client talks to it with plain JSON requests.
//!
//! - **`protocol`** – What travels over the wire: the `{command, x?, y?}`
//!   request body, the recognised command names, the power actions, and the
//!   path of every endpoint.
//!
//! - **`domain`** – Pure client-side concepts: the merged `SystemInfo`
//!   telemetry record (built from four server responses) and the directional
//!   controls used by press-and-hold mouse movement.

pub mod domain;
pub mod protocol;

// Re-export the most-used types at the crate root so callers can write
// `remote_core::SystemInfo` instead of `remote_core::domain::telemetry::SystemInfo`.
pub use domain::controls::{Direction, UnknownDirection, DEFAULT_MOVE_STEP, REPEAT_INTERVAL};
pub use domain::telemetry::{DiskInfo, MemoryInfo, MergeError, SystemInfo, TelemetryResponses};
pub use protocol::endpoints::{endpoint_url, PowerAction, DEFAULT_BASE_URL};
pub use protocol::messages::{Command, CommandRequest};
