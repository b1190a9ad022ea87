//! Application layer use cases for the remote-control client.
//!
//! # What use cases does the client have?
//!
//! - **`dispatch_command`** – Turns a control action (click, volume, power,
//!   one mouse move) into a single POST on the server.
//!
//! - **`repeat_press`** – Keeps re-sending a mouse move every 100 ms for as
//!   long as a directional control is held.
//!
//! - **`poll_telemetry`** – Fetches the four telemetry endpoints concurrently
//!   and merges them into one `SystemInfo`, all or nothing.
//!
//! All three reach the server through the [`remote_api::RemoteTransport`]
//! trait, which is injected at construction time.

pub mod dispatch_command;
pub mod poll_telemetry;
pub mod remote_api;
pub mod repeat_press;

pub use dispatch_command::{log_ignored, CommandDispatcher};
pub use poll_telemetry::{apply_poll_result, TelemetryError, TelemetryPoller};
pub use remote_api::{RemoteTransport, TransportError};
pub use repeat_press::RepeatPressController;
