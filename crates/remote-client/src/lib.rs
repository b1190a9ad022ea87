//! remote-client library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does remote-client do? (for beginners)
//!
//! A small server process runs on the machine being controlled and exposes a
//! handful of HTTP endpoints.  This client is the remote control for it:
//!
//! 1. Four directional controls move the remote mouse.  While one is held the
//!    client re-sends a `move_mouse` command every 100 ms.
//! 2. One-shot controls click, raise or lower the volume.
//! 3. The action panel turns the machine off, restarts or suspends it.
//! 4. The System Info view fetches temperature, CPU load, memory and disk
//!    usage from four endpoints at once and shows the merged result.
//!
//! Nothing is retried and nothing blocks the view: failed commands are
//! logged, and a failed telemetry fetch keeps the last good reading on
//! screen.

/// Application layer: use cases for the client.
pub mod application;

/// Infrastructure layer: HTTP transport, config, UI bridge and console.
pub mod infrastructure;
