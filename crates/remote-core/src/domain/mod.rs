//! Domain entities for the remote-control client.
//!
//! This module contains pure client-side logic with no infrastructure
//! dependencies: no HTTP client, no timers, no terminal I/O.
//!
//! # What lives here?
//!
//! - **`telemetry`** – The `SystemInfo` record and the rule that merges the
//!   four telemetry responses into it.
//! - **`controls`** – The four directional controls and the displacement each
//!   one produces while held.

pub mod controls;
pub mod telemetry;
