//! JSON request body for `POST /`.
//!
//! Every discrete or repeated control action is sent as one JSON object:
//!
//! ```json
//! {"command":"move_mouse","x":45,"y":0}
//! {"command":"volume_up"}
//! ```
//!
//! `x` and `y` are signed deltas.  They are left out of the body entirely
//! (not sent as `null`) when the command carries no coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Command names recognised by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Relative cursor move; requires `x` and `y`.
    MoveMouse,
    /// Primary-button click at the current cursor position.
    ClickMouse,
    VolumeUp,
    VolumeDown,
}

impl Command {
    /// The wire name of the command.
    pub fn as_str(self) -> &'static str {
        match self {
            Command::MoveMouse => "move_mouse",
            Command::ClickMouse => "click_mouse",
            Command::VolumeUp => "volume_up",
            Command::VolumeDown => "volume_down",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of a `POST /` command request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRequest {
    pub command: Command,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,
}

impl CommandRequest {
    /// Builds a request from optional coordinates, as `send_command` receives them.
    pub fn new(command: Command, x: Option<i32>, y: Option<i32>) -> Self {
        Self { command, x, y }
    }

    /// Builds a request that carries no coordinates.
    pub fn bare(command: Command) -> Self {
        Self::new(command, None, None)
    }

    /// Builds a `move_mouse` request with the given deltas.
    pub fn move_mouse(x: i32, y: i32) -> Self {
        Self::new(Command::MoveMouse, Some(x), Some(y))
    }
}
