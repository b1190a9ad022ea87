//! Endpoint table of the remote-control server.
//!
//! | Method | Path           | Body                     | Response                    |
//! |--------|----------------|--------------------------|-----------------------------|
//! | GET    | `/system-info` | –                        | `{temperature, ...}`        |
//! | GET    | `/cpu-load`    | –                        | `{load}`                    |
//! | GET    | `/memory-info` | –                        | `{total, free, used, ...}`  |
//! | GET    | `/disk-info`   | –                        | `[{fs, type, used, size}]`  |
//! | POST   | `/`            | `{command, x?, y?}`      | ignored                     |
//! | POST   | `/turn-off`    | empty                    | ignored                     |
//! | POST   | `/restart`     | empty                    | ignored                     |
//! | POST   | `/suspend`     | empty                    | ignored                     |

/// Server address used when no other base URL is configured.
pub const DEFAULT_BASE_URL: &str = "http://movilserver.zapto.org:3000";

/// Command endpoint (`POST`).
pub const COMMAND: &str = "/";
pub const SYSTEM_INFO: &str = "/system-info";
pub const CPU_LOAD: &str = "/cpu-load";
pub const MEMORY_INFO: &str = "/memory-info";
pub const DISK_INFO: &str = "/disk-info";

/// Telemetry endpoints in the order their responses are merged.
pub const TELEMETRY: [&str; 4] = [SYSTEM_INFO, CPU_LOAD, MEMORY_INFO, DISK_INFO];

/// Joins a base URL and an endpoint path, tolerating a trailing `/` on the base.
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// Power actions offered by the always-visible action panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerAction {
    TurnOff,
    Restart,
    Suspend,
}

impl PowerAction {
    /// All actions in panel order.
    pub const ALL: [PowerAction; 3] = [
        PowerAction::TurnOff,
        PowerAction::Restart,
        PowerAction::Suspend,
    ];

    /// The `POST` path that triggers this action.
    pub fn path(self) -> &'static str {
        match self {
            PowerAction::TurnOff => "/turn-off",
            PowerAction::Restart => "/restart",
            PowerAction::Suspend => "/suspend",
        }
    }

    /// The label shown on the action panel button.
    pub fn label(self) -> &'static str {
        match self {
            PowerAction::TurnOff => "Apagar",
            PowerAction::Restart => "Reiniciar",
            PowerAction::Suspend => "Suspender",
        }
    }
}
