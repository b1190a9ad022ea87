//! RepeatPressController: re-sends a move command while a control is held.
//!
//! # State machine
//!
//! ```text
//!            start_moving (Idle only)
//!   ┌──────┐ ───────────────────────► ┌────────┐
//!   │ Idle │                          │ Moving │──► tick every `period`:
//!   └──────┘ ◄─────────────────────── └────────┘    spawn send_command(cmd, x, y)
//!            stop_moving / drop
//! ```
//!
//! The first tick fires one `period` after the press, so a control held for
//! `D` ms produces `floor(D / period)` commands.  Each tick spawns its POST
//! and moves on without waiting for it: ticks follow the wall clock, not the
//! network.  POSTs may therefore reach the server out of order.
//!
//! The timer lives in a private [`RepeatHandle`]; dropping the handle aborts
//! the timer task, so a controller that goes away while Moving cannot leak a
//! running timer.  POSTs already in flight are not cancelled.

use std::sync::Arc;
use std::time::Duration;

use remote_core::{Command, CommandRequest, REPEAT_INTERVAL};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::application::dispatch_command::{log_ignored, CommandDispatcher};

/// Owns the running timer task; aborts it on drop.
struct RepeatHandle {
    task: JoinHandle<()>,
    request: CommandRequest,
}

impl Drop for RepeatHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Press-and-hold controller for directional movement.
pub struct RepeatPressController {
    dispatcher: Arc<CommandDispatcher>,
    period: Duration,
    active: Option<RepeatHandle>,
}

impl RepeatPressController {
    /// Creates an Idle controller ticking at the standard 100 ms cadence.
    pub fn new(dispatcher: Arc<CommandDispatcher>) -> Self {
        Self::with_period(dispatcher, REPEAT_INTERVAL)
    }

    /// Creates an Idle controller with a custom tick period.
    ///
    /// A zero period is clamped to one millisecond because `tokio::time`
    /// intervals cannot be zero.
    pub fn with_period(dispatcher: Arc<CommandDispatcher>, period: Duration) -> Self {
        Self {
            dispatcher,
            period: period.max(Duration::from_millis(1)),
            active: None,
        }
    }

    /// Starts repeating `command` with the fixed deltas `(x, y)`.
    ///
    /// Only takes effect from Idle.  While Moving, the call is a no-op and
    /// returns `false`; the running timer keeps its first command.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start_moving(&mut self, command: Command, x: i32, y: i32) -> bool {
        if let Some(handle) = &self.active {
            debug!("start_moving ignored; already repeating {:?}", handle.request);
            return false;
        }

        let request = CommandRequest::new(command, Some(x), Some(y));
        let dispatcher = Arc::clone(&self.dispatcher);
        let period = self.period;

        let task = tokio::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                let dispatcher = Arc::clone(&dispatcher);
                tokio::spawn(async move {
                    let result = dispatcher
                        .send_command(request.command, request.x, request.y)
                        .await;
                    log_ignored("repeat move", result);
                });
            }
        });

        info!("repeating {command} ({x}, {y}) every {period:?}");
        self.active = Some(RepeatHandle { task, request });
        true
    }

    /// Stops the active timer.  Returns `false` (and does nothing) when Idle.
    pub fn stop_moving(&mut self) -> bool {
        match self.active.take() {
            Some(handle) => {
                info!("stopped repeating {}", handle.request.command);
                drop(handle);
                true
            }
            None => false,
        }
    }

    /// `true` while a timer is live.
    pub fn is_moving(&self) -> bool {
        self.active.is_some()
    }

    /// The command being repeated, if any.
    pub fn active_request(&self) -> Option<CommandRequest> {
        self.active.as_ref().map(|h| h.request)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
