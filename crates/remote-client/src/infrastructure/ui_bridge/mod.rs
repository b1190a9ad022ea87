//! UI bridge: the state behind the client's views and the actions bound to
//! its controls.
//!
//! Only this module references both the application layer (dispatcher,
//! poller, repeat controller) and the presentation layer ([`render`]).  The
//! front end (the console loop in `main.rs`) calls the methods on
//! [`RemoteApp`] and re-renders when told to.
//!
//! # Never blocking the view (for beginners)
//!
//! Every method on `RemoteApp` is synchronous and returns immediately.  Work
//! that touches the network is `tokio::spawn`ed:
//!
//! ```text
//! front end                RemoteApp                 spawned task
//! ──────────────────────────────────────────────────────────────────────
//! select_view(SystemInfo) ─► spawn fetch ──────────► fetch_system_info()
//!                                                         │
//! events.recv()  ◄──────── AppEvent::TelemetryFetched ◄───┘
//! handle_event(ev) ──────► apply_poll_result → re-render
//! ```
//!
//! Results come back as [`AppEvent`]s on an `mpsc` channel, the same way the
//! network layer reports to a dispatch loop.  Fire-and-forget commands
//! (click, volume, power) send nothing back; their failures are only logged.
//!
//! # Press-and-hold
//!
//! `press` / `release` drive the [`RepeatPressController`].  A console cannot
//! observe a physical key being held, so [`RemoteApp::hold`] presses and
//! schedules an [`AppEvent::HoldElapsed`] that releases it later.  Each press
//! gets an id; a stale `HoldElapsed` from an earlier press is ignored.

pub mod render;

use std::sync::Arc;
use std::time::Duration;

use remote_core::{Command, Direction, PowerAction, SystemInfo, DEFAULT_MOVE_STEP, REPEAT_INTERVAL};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::application::{
    apply_poll_result, log_ignored, CommandDispatcher, RemoteTransport, RepeatPressController,
    TelemetryError, TelemetryPoller,
};
use crate::infrastructure::storage::config::ClientConfig;

/// Capacity of the event channel between spawned work and the front end.
const EVENT_CHANNEL_CAPACITY: usize = 64;

// ── View state ────────────────────────────────────────────────────────────────

/// Which of the two mutually exclusive views is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Control,
    SystemInfo,
}

/// Completion notices delivered back to the front end.
#[derive(Debug)]
pub enum AppEvent {
    /// A telemetry fetch finished (successfully or not).
    TelemetryFetched(Result<SystemInfo, TelemetryError>),
    /// The timed hold started by press `press_id` has run its course.
    HoldElapsed { press_id: u64 },
}

/// One-shot controls in the Control view and the action panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Click,
    VolumeUp,
    VolumeDown,
    Power(PowerAction),
}

impl ButtonAction {
    fn name(self) -> &'static str {
        match self {
            ButtonAction::Click => "click",
            ButtonAction::VolumeUp => "volume up",
            ButtonAction::VolumeDown => "volume down",
            ButtonAction::Power(PowerAction::TurnOff) => "turn off",
            ButtonAction::Power(PowerAction::Restart) => "restart",
            ButtonAction::Power(PowerAction::Suspend) => "suspend",
        }
    }
}

/// Tunables for the controls, usually taken from [`ClientConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppSettings {
    pub move_step: i32,
    pub repeat_interval: Duration,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            move_step: DEFAULT_MOVE_STEP,
            repeat_interval: REPEAT_INTERVAL,
        }
    }
}

impl From<&ClientConfig> for AppSettings {
    fn from(config: &ClientConfig) -> Self {
        Self {
            move_step: config.controls.move_step,
            repeat_interval: config.repeat_interval(),
        }
    }
}

// ── RemoteApp ─────────────────────────────────────────────────────────────────

/// Root of the client UI.
pub struct RemoteApp {
    view: ActiveView,
    system_info: Option<SystemInfo>,
    repeat: RepeatPressController,
    dispatcher: Arc<CommandDispatcher>,
    poller: Arc<TelemetryPoller>,
    events: mpsc::Sender<AppEvent>,
    move_step: i32,
    press_id: u64,
}

impl RemoteApp {
    /// Builds the app around `transport` and returns the receiving end of its
    /// event channel.
    pub fn new(
        transport: Arc<dyn RemoteTransport>,
        settings: AppSettings,
    ) -> (Self, mpsc::Receiver<AppEvent>) {
        let (events, rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        let dispatcher = Arc::new(CommandDispatcher::new(Arc::clone(&transport)));
        let poller = Arc::new(TelemetryPoller::new(transport));
        let repeat = RepeatPressController::with_period(Arc::clone(&dispatcher), settings.repeat_interval);

        let app = Self {
            view: ActiveView::default(),
            system_info: None,
            repeat,
            dispatcher,
            poller,
            events,
            move_step: settings.move_step,
            press_id: 0,
        };
        (app, rx)
    }

    /// The view currently showing.
    pub fn view(&self) -> ActiveView {
        self.view
    }

    /// The last successfully fetched telemetry, if any.
    pub fn system_info(&self) -> Option<&SystemInfo> {
        self.system_info.as_ref()
    }

    /// `true` while a directional control is held.
    pub fn is_moving(&self) -> bool {
        self.repeat.is_moving()
    }

    /// Initial mount: kicks off the first telemetry fetch.
    pub fn mount(&self) {
        info!("mounting remote-control UI");
        self.request_system_info();
    }

    /// Switches views.  Selecting System Info always triggers a fresh fetch,
    /// even when it is already the active view.
    pub fn select_view(&mut self, view: ActiveView) {
        debug!("view {:?} -> {view:?}", self.view);
        self.view = view;
        if view == ActiveView::SystemInfo {
            self.request_system_info();
        }
    }

    /// Spawns a telemetry fetch; the result arrives as
    /// [`AppEvent::TelemetryFetched`].
    pub fn request_system_info(&self) {
        let poller = Arc::clone(&self.poller);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = poller.fetch_system_info().await;
            // A closed channel means the front end is shutting down.
            let _ = events.send(AppEvent::TelemetryFetched(result)).await;
        });
    }

    /// Applies a completion notice.  Returns `true` when the screen changed
    /// and should be rendered again.
    pub fn handle_event(&mut self, event: AppEvent) -> bool {
        match event {
            AppEvent::TelemetryFetched(result) => apply_poll_result(&mut self.system_info, result),
            AppEvent::HoldElapsed { press_id } => {
                if press_id == self.press_id {
                    self.release()
                } else {
                    debug!("ignoring stale hold for press {press_id}");
                    false
                }
            }
        }
    }

    /// Presses a directional control.  Returns `false` if another control is
    /// already held.
    pub fn press(&mut self, direction: Direction) -> bool {
        let (x, y) = direction.displacement(self.move_step);
        let started = self.repeat.start_moving(Command::MoveMouse, x, y);
        if started {
            self.press_id += 1;
        }
        started
    }

    /// Releases whichever directional control is held.
    pub fn release(&mut self) -> bool {
        self.repeat.stop_moving()
    }

    /// Presses `direction` and releases it after `duration`.
    pub fn hold(&mut self, direction: Direction, duration: Duration) -> bool {
        if !self.press(direction) {
            return false;
        }
        let press_id = self.press_id;
        let events = self.events.clone();
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let _ = events.send(AppEvent::HoldElapsed { press_id }).await;
        });
        true
    }

    /// Fires a one-shot control without waiting for the server.
    pub fn trigger(&self, action: ButtonAction) {
        let dispatcher = Arc::clone(&self.dispatcher);
        tokio::spawn(async move {
            let result = match action {
                ButtonAction::Click => dispatcher.send_command(Command::ClickMouse, None, None).await,
                ButtonAction::VolumeUp => dispatcher.send_volume_command(Command::VolumeUp).await,
                ButtonAction::VolumeDown => dispatcher.send_volume_command(Command::VolumeDown).await,
                ButtonAction::Power(PowerAction::TurnOff) => dispatcher.handle_turn_off().await,
                // "Reiniciar" is wired to the turn-on handler, which hits /restart.
                ButtonAction::Power(PowerAction::Restart) => dispatcher.handle_turn_on().await,
                ButtonAction::Power(PowerAction::Suspend) => dispatcher.handle_turn_suspend().await,
            };
            log_ignored(action.name(), result);
        });
    }

    /// Renders the current screen.
    pub fn render(&self) -> String {
        render::render_screen(self.view, self.system_info.as_ref())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::transport::mock::{CannedResponse, MockTransport};
    use remote_core::CommandRequest;
    use tokio::time;

    fn make_app(transport: Arc<MockTransport>) -> (RemoteApp, mpsc::Receiver<AppEvent>) {
        RemoteApp::new(transport, AppSettings::default())
    }

    /// Lets spawned fire-and-forget tasks run to completion.
    async fn settle() {
        time::sleep(Duration::from_millis(1)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_starts_on_control_view_without_info() {
        let (app, _rx) = make_app(Arc::new(MockTransport::new()));

        assert_eq!(app.view(), ActiveView::Control);
        assert!(app.system_info().is_none());
        assert!(!app.is_moving());
    }

    #[tokio::test(start_paused = true)]
    async fn test_mount_fetches_and_event_fills_info() {
        // Arrange
        let transport = Arc::new(MockTransport::with_sample_telemetry());
        let (mut app, mut rx) = make_app(transport.clone());

        // Act
        app.mount();
        let event = rx.recv().await.expect("event");
        let changed = app.handle_event(event);

        // Assert
        assert!(changed);
        assert_eq!(transport.get_count(), 4);
        let info = app.system_info().expect("info");
        assert_eq!(info.cpu_load, 12.25);
    }

    #[tokio::test(start_paused = true)]
    async fn test_selecting_system_info_refetches_every_time() {
        // Arrange
        let transport = Arc::new(MockTransport::with_sample_telemetry());
        let (mut app, mut rx) = make_app(transport.clone());

        // Act
        app.select_view(ActiveView::SystemInfo);
        app.handle_event(rx.recv().await.expect("first"));
        app.select_view(ActiveView::SystemInfo);
        app.handle_event(rx.recv().await.expect("second"));

        // Assert: two fetches of four GETs each
        assert_eq!(transport.get_count(), 8);
        assert_eq!(app.view(), ActiveView::SystemInfo);
    }

    #[tokio::test(start_paused = true)]
    async fn test_selecting_control_view_does_not_fetch() {
        let transport = Arc::new(MockTransport::new());
        let (mut app, _rx) = make_app(transport.clone());

        app.select_view(ActiveView::Control);
        settle().await;

        assert_eq!(transport.get_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_fetch_keeps_previous_info() {
        // Arrange: one good fetch
        let transport = Arc::new(MockTransport::with_sample_telemetry());
        let (mut app, mut rx) = make_app(transport.clone());
        app.mount();
        app.handle_event(rx.recv().await.expect("event"));
        let before = app.system_info().cloned();

        // Act: disk endpoint starts failing
        transport.respond("/disk-info", CannedResponse::Status(500));
        app.select_view(ActiveView::SystemInfo);
        let changed = app.handle_event(rx.recv().await.expect("event"));

        // Assert
        assert!(!changed);
        assert_eq!(app.system_info().cloned(), before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_first_fetch_leaves_info_unset() {
        let transport = Arc::new(MockTransport::new());
        let (mut app, mut rx) = make_app(transport);

        app.mount();
        let changed = app.handle_event(rx.recv().await.expect("event"));

        assert!(!changed);
        assert!(app.system_info().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_press_right_350ms_then_release_sends_three_moves() {
        // Arrange
        let transport = Arc::new(MockTransport::new());
        let (mut app, _rx) = make_app(transport.clone());

        // Act
        assert!(app.press(Direction::Right));
        time::sleep(Duration::from_millis(350)).await;
        assert!(app.release());
        time::sleep(Duration::from_millis(500)).await;

        // Assert
        assert_eq!(transport.command_posts(), vec![CommandRequest::move_mouse(45, 0); 3]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_press_while_held_is_ignored() {
        let (mut app, _rx) = make_app(Arc::new(MockTransport::new()));

        assert!(app.press(Direction::Up));
        assert!(!app.press(Direction::Down));

        assert!(app.is_moving());
    }

    #[tokio::test(start_paused = true)]
    async fn test_hold_releases_after_duration() {
        // Arrange
        let transport = Arc::new(MockTransport::new());
        let (mut app, mut rx) = make_app(transport.clone());

        // Act
        assert!(app.hold(Direction::Left, Duration::from_millis(250)));
        let event = rx.recv().await.expect("hold elapsed");
        let released = app.handle_event(event);
        time::sleep(Duration::from_millis(500)).await;

        // Assert
        assert!(released);
        assert!(!app.is_moving());
        assert_eq!(transport.command_posts(), vec![CommandRequest::move_mouse(-45, 0); 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_hold_does_not_release_newer_press() {
        // Arrange: a hold, manually released, then a fresh press
        let (mut app, mut rx) = make_app(Arc::new(MockTransport::new()));
        app.hold(Direction::Down, Duration::from_millis(200));
        app.release();
        app.press(Direction::Up);

        // Act
        let event = rx.recv().await.expect("hold elapsed");
        let released = app.handle_event(event);

        // Assert
        assert!(!released);
        assert!(app.is_moving());
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_step_scales_displacement() {
        let transport = Arc::new(MockTransport::new());
        let settings = AppSettings {
            move_step: 10,
            repeat_interval: Duration::from_millis(50),
        };
        let (mut app, _rx) = RemoteApp::new(transport.clone(), settings);

        app.press(Direction::Up);
        time::sleep(Duration::from_millis(120)).await;
        app.release();
        settle().await;

        assert_eq!(transport.command_posts(), vec![CommandRequest::move_mouse(0, -10); 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_buttons_post_expected_requests() {
        // Arrange
        let transport = Arc::new(MockTransport::new());
        let (app, _rx) = make_app(transport.clone());

        // Act
        app.trigger(ButtonAction::Click);
        settle().await;
        app.trigger(ButtonAction::VolumeUp);
        settle().await;
        app.trigger(ButtonAction::VolumeDown);
        settle().await;

        // Assert
        assert_eq!(
            transport.command_posts(),
            vec![
                CommandRequest::bare(Command::ClickMouse),
                CommandRequest::bare(Command::VolumeUp),
                CommandRequest::bare(Command::VolumeDown),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_action_panel_hits_power_endpoints() {
        let transport = Arc::new(MockTransport::new());
        let (app, _rx) = make_app(transport.clone());

        for action in PowerAction::ALL {
            app.trigger(ButtonAction::Power(action));
            settle().await;
        }

        assert_eq!(transport.post_paths(), vec!["/turn-off", "/restart", "/suspend"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_command_is_swallowed() {
        let transport = Arc::new(MockTransport::failing(500));
        let (app, _rx) = make_app(transport.clone());

        app.trigger(ButtonAction::Click);
        settle().await;

        assert_eq!(transport.post_paths(), vec!["/"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_render_system_info_view_after_fetch() {
        // Arrange
        let (mut app, mut rx) = make_app(Arc::new(MockTransport::with_sample_telemetry()));
        app.select_view(ActiveView::SystemInfo);
        assert!(!app.render().contains("Temperatura CPU"));

        // Act
        app.handle_event(rx.recv().await.expect("event"));

        // Assert
        let screen = app.render();
        assert!(screen.contains("Temperatura CPU: 47.50ºC"));
        assert!(screen.contains("Apagar"));
    }

    #[test]
    fn test_settings_from_config() {
        let mut config = ClientConfig::default();
        config.controls.move_step = 30;
        config.controls.repeat_interval_ms = 250;

        let settings = AppSettings::from(&config);

        assert_eq!(settings.move_step, 30);
        assert_eq!(settings.repeat_interval, Duration::from_millis(250));
    }
}
