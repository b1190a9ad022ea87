//! TOML-based configuration for the remote-control client.
//!
//! The config file is optional.  It is only read when a path is given on the
//! command line (`--config <PATH>`); without one the built-in defaults apply
//! and the client talks to [`DEFAULT_BASE_URL`].
//!
//! ```toml
//! [server]
//! base_url = "http://movilserver.zapto.org:3000"
//!
//! [controls]
//! repeat_interval_ms = 100
//! move_step = 45
//!
//! [logging]
//! log_level = "info"
//! ```
//!
//! # Serde default values
//!
//! Every field is annotated with `#[serde(default = "some_fn")]`, so a file
//! that only sets `base_url` (or an empty file) is valid and fills the rest
//! from the defaults above.

use std::path::{Path, PathBuf};
use std::time::Duration;

use remote_core::{DEFAULT_BASE_URL, DEFAULT_MOVE_STEP, REPEAT_INTERVAL};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The file parsed but a value is out of range.
    #[error("invalid config value: {0}")]
    Invalid(String),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level client configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ClientConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub controls: ControlsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the remote-control server lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Base URL, e.g. `http://192.168.1.20:3000`.  A trailing `/` is tolerated.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Press-and-hold behaviour of the directional controls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ControlsConfig {
    /// Milliseconds between repeated move commands while a control is held.
    #[serde(default = "default_repeat_interval_ms")]
    pub repeat_interval_ms: u64,
    /// Pixels moved per repeat tick.
    #[serde(default = "default_move_step")]
    pub move_step: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `tracing` log level used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_repeat_interval_ms() -> u64 {
    REPEAT_INTERVAL.as_millis() as u64
}
fn default_move_step() -> i32 {
    DEFAULT_MOVE_STEP
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            repeat_interval_ms: default_repeat_interval_ms(),
            move_step: default_move_step(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ClientConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let cfg: ClientConfig = toml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Checks value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("server.base_url must not be empty".into()));
        }
        if self.controls.repeat_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "controls.repeat_interval_ms must be greater than zero".into(),
            ));
        }
        if self.controls.move_step <= 0 {
            return Err(ConfigError::Invalid(
                "controls.move_step must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// The repeat cadence as a `Duration`.
    pub fn repeat_interval(&self) -> Duration {
        Duration::from_millis(self.controls.repeat_interval_ms)
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Loads a `ClientConfig` from `path`.
///
/// Unlike a first-run settings file, an explicitly requested config that does
/// not exist is an error.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read, plus any error of
/// [`ClientConfig::from_toml`].
pub fn load_config(path: &Path) -> Result<ClientConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ClientConfig::from_toml(&content)
}

/// Writes `config` to `path` as pretty TOML, creating parent directories.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config(path: &Path, config: &ClientConfig) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
