//! Directional controls for press-and-hold mouse movement.
//!
//! Each of the four arrow controls moves the remote cursor by a fixed step on
//! one axis while it is held.  Screen coordinates grow rightwards and
//! downwards, so "up" is a negative `y` displacement.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Displacement, in pixels, applied on every repeat tick.
pub const DEFAULT_MOVE_STEP: i32 = 45;

/// Cadence at which a held control re-sends its move command.
pub const REPEAT_INTERVAL: Duration = Duration::from_millis(100);

/// Error returned when a direction name cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown direction '{0}' (expected right, left, up or down)")]
pub struct UnknownDirection(pub String);

/// One of the four directional controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
}

impl Direction {
    /// All directions in the order the control view lists them.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
    ];

    /// Returns the `(x, y)` displacement for a step of `step` pixels.
    pub fn displacement(self, step: i32) -> (i32, i32) {
        match self {
            Direction::Right => (step, 0),
            Direction::Left => (-step, 0),
            Direction::Up => (0, -step),
            Direction::Down => (0, step),
        }
    }

    /// The label shown on the control.
    pub fn label(self) -> &'static str {
        match self {
            Direction::Right => "Mover Derecha",
            Direction::Left => "Mover Izquierda",
            Direction::Up => "Mover Arriba",
            Direction::Down => "Mover Abajo",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Right => "right",
            Direction::Left => "left",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        f.write_str(name)
    }
}

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "right" | "r" => Ok(Direction::Right),
            "left" | "l" => Ok(Direction::Left),
            "up" | "u" => Ok(Direction::Up),
            "down" | "d" => Ok(Direction::Down),
            other => Err(UnknownDirection(other.to_string())),
        }
    }
}
