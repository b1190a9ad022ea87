//! Storage infrastructure: configuration file reading and writing.
//!
//! The client keeps no state between runs; the only thing on disk is an
//! optional TOML config naming the server and tuning the controls.

pub mod config;
