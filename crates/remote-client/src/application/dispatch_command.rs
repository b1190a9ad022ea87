//! CommandDispatcher: turns a logical control action into one POST request.
//!
//! Every method returns a `Result` instead of swallowing the error.  Call
//! sites that do not care about the outcome (all of the UI, today) pass the
//! result through [`log_ignored`], which makes the "ignore" decision visible.

use std::sync::Arc;

use remote_core::protocol::endpoints::COMMAND;
use remote_core::{Command, CommandRequest, PowerAction};
use tracing::{debug, warn};

use crate::application::remote_api::{RemoteTransport, TransportError};

/// Sends control commands to the remote-control server.
pub struct CommandDispatcher {
    transport: Arc<dyn RemoteTransport>,
}

impl CommandDispatcher {
    /// Creates a dispatcher that sends through `transport`.
    pub fn new(transport: Arc<dyn RemoteTransport>) -> Self {
        Self { transport }
    }

    /// POSTs `{command, x, y}` to `/`; absent coordinates are left out of the body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the request fails or the server answers
    /// with a non-2xx status.
    pub async fn send_command(
        &self,
        command: Command,
        x: Option<i32>,
        y: Option<i32>,
    ) -> Result<(), TransportError> {
        let request = CommandRequest::new(command, x, y);
        debug!("sending {request:?}");
        self.transport.post(COMMAND, Some(request)).await
    }

    /// Sends a volume command (no coordinates).
    ///
    /// # Errors
    ///
    /// See [`CommandDispatcher::send_command`].
    pub async fn send_volume_command(&self, command: Command) -> Result<(), TransportError> {
        self.send_command(command, None, None).await
    }

    /// POSTs an empty body to `/turn-off`.
    ///
    /// # Errors
    ///
    /// See [`CommandDispatcher::send_command`].
    pub async fn handle_turn_off(&self) -> Result<(), TransportError> {
        self.power(PowerAction::TurnOff).await
    }

    /// POSTs an empty body to `/restart`.
    ///
    /// Bound to the "Reiniciar" button; the name is kept from the client this
    /// replaces even though the endpoint restarts the machine.
    ///
    /// # Errors
    ///
    /// See [`CommandDispatcher::send_command`].
    pub async fn handle_turn_on(&self) -> Result<(), TransportError> {
        self.power(PowerAction::Restart).await
    }

    /// POSTs an empty body to `/suspend`.
    ///
    /// # Errors
    ///
    /// See [`CommandDispatcher::send_command`].
    pub async fn handle_turn_suspend(&self) -> Result<(), TransportError> {
        self.power(PowerAction::Suspend).await
    }

    /// POSTs an empty body to the path of `action`.
    ///
    /// # Errors
    ///
    /// See [`CommandDispatcher::send_command`].
    pub async fn power(&self, action: PowerAction) -> Result<(), TransportError> {
        debug!("sending power action {action:?}");
        self.transport.post(action.path(), None).await
    }
}

/// Logs a failed fire-and-forget action and drops the error.
pub fn log_ignored(action: &str, result: Result<(), TransportError>) {
    if let Err(e) = result {
        warn!("{action} failed (ignored): {e}");
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
