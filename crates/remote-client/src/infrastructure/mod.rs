//! Infrastructure layer for the client application.
//!
//! Contains the outward-facing adapters: the HTTP transport, config file
//! storage, the UI bridge and the console command parser.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `remote_core`, but MUST NOT be imported by the `application` layer outside
//! of tests.
//!
//! # Sub-modules
//!
//! - **`transport`** – `reqwest` implementation of `RemoteTransport`, plus a
//!   recording `MockTransport` for tests and `--offline` runs.
//!
//! - **`storage`** – the optional TOML config file (`--config <PATH>`).
//!
//! - **`ui_bridge`** – `RemoteApp`, the view state and control bindings, and
//!   the pure text renderer for both views.
//!
//! - **`console`** – parses stdin lines into commands for `RemoteApp`.

pub mod console;
pub mod storage;
pub mod transport;
pub mod ui_bridge;
