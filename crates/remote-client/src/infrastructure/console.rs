//! Line-oriented console commands for the terminal front end.
//!
//! Each line read from stdin is parsed into a [`ConsoleCommand`]; `main.rs`
//! maps the command onto a [`RemoteApp`](super::ui_bridge::RemoteApp) call.
//!
//! ```text
//! control | info                 switch view
//! press <dir> | release          start / stop repeating a move
//! hold <dir> <ms>                press, then release after <ms>
//! click | vol+ | vol-            one-shot controls
//! off | restart | suspend        action panel
//! help | quit
//! ```
//!
//! `<dir>` is `right`, `left`, `up` or `down` (or their initials).

use std::time::Duration;

use remote_core::{Direction, PowerAction, UnknownDirection};
use thiserror::Error;

use super::ui_bridge::{ActiveView, ButtonAction};

/// Help text printed by the `help` command.
pub const HELP: &str = "\
commands:
  control            show the Control Remoto view
  info               show the Información del Sistema view (refreshes it)
  press <dir>        hold a direction (right, left, up, down)
  release            release the held direction
  hold <dir> <ms>    hold a direction for <ms> milliseconds
  click              Hacer Clic
  vol+ / vol-        Subir Volumen / Bajar Volumen
  off                Apagar
  restart            Reiniciar
  suspend            Suspender
  help               this text
  quit               exit";

/// A parsed console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    View(ActiveView),
    Press(Direction),
    Release,
    Hold(Direction, Duration),
    Button(ButtonAction),
    Help,
    Quit,
}

/// Why a console line could not be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command '{0}' (type 'help')")]
    UnknownCommand(String),

    #[error("'{0}' needs a direction")]
    MissingDirection(&'static str),

    #[error(transparent)]
    Direction(#[from] UnknownDirection),

    #[error("'hold' needs a duration in milliseconds, got '{0}'")]
    BadDuration(String),

    #[error("unexpected argument '{0}'")]
    TrailingArgument(String),
}

/// Parses one line.  Blank lines yield `Ok(None)`.
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first problem found.
pub fn parse_line(line: &str) -> Result<Option<ConsoleCommand>, ParseError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };

    let command = match head.to_ascii_lowercase().as_str() {
        "control" => ConsoleCommand::View(ActiveView::Control),
        "info" => ConsoleCommand::View(ActiveView::SystemInfo),
        "press" => ConsoleCommand::Press(direction_arg(words.next(), "press")?),
        "release" => ConsoleCommand::Release,
        "hold" => {
            let direction = direction_arg(words.next(), "hold")?;
            let raw = words.next().unwrap_or_default();
            let ms: u64 = raw
                .parse()
                .map_err(|_| ParseError::BadDuration(raw.to_string()))?;
            ConsoleCommand::Hold(direction, Duration::from_millis(ms))
        }
        "click" => ConsoleCommand::Button(ButtonAction::Click),
        "vol+" => ConsoleCommand::Button(ButtonAction::VolumeUp),
        "vol-" => ConsoleCommand::Button(ButtonAction::VolumeDown),
        "off" => ConsoleCommand::Button(ButtonAction::Power(PowerAction::TurnOff)),
        "restart" => ConsoleCommand::Button(ButtonAction::Power(PowerAction::Restart)),
        "suspend" => ConsoleCommand::Button(ButtonAction::Power(PowerAction::Suspend)),
        "help" | "?" => ConsoleCommand::Help,
        "quit" | "exit" => ConsoleCommand::Quit,
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };

    if let Some(extra) = words.next() {
        return Err(ParseError::TrailingArgument(extra.to_string()));
    }
    Ok(Some(command))
}

fn direction_arg(word: Option<&str>, command: &'static str) -> Result<Direction, ParseError> {
    let word = word.ok_or(ParseError::MissingDirection(command))?;
    Ok(word.parse::<Direction>()?)
}
