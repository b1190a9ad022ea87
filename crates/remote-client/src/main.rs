//! Remote-control client entry point.
//!
//! Parses the command line, loads the optional config file, wires the HTTP
//! transport into a [`RemoteApp`] and runs the console loop.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ Cli::parse() + resolve_config()
//!  └─ tracing_subscriber (stderr)
//!  └─ current-thread Tokio runtime
//!       └─ run()
//!            ├─ RemoteApp::mount()         -- first telemetry fetch
//!            └─ select! loop
//!                 ├─ stdin line  -> parse_line -> RemoteApp call
//!                 ├─ AppEvent    -> RemoteApp::handle_event -> re-render
//!                 └─ Ctrl+C / EOF / quit -> release held control, exit
//! ```
//!
//! # Why stderr for logs?
//!
//! The rendered views go to stdout.  Sending `tracing` output to stderr keeps
//! the two streams apart, so `remote-client 2>client.log` gives a clean
//! screen.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use remote_client::application::RemoteTransport;
use remote_client::infrastructure::{
    console::{parse_line, ConsoleCommand, HELP},
    storage::config::{load_config, save_config, ClientConfig},
    transport::{mock::MockTransport, HttpTransport},
    ui_bridge::{AppSettings, RemoteApp},
};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Remote control for a machine running the remote-control server.
#[derive(Debug, Parser)]
#[command(
    name = "remote-client",
    about = "Mouse, volume and power remote control with system telemetry",
    version
)]
struct Cli {
    /// TOML config file.  Without it the built-in defaults apply.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Server base URL; overrides `[server] base_url` from the config file.
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Serve canned telemetry and record commands locally instead of
    /// talking to a server.
    #[arg(long)]
    offline: bool,

    /// Write the effective config to PATH and exit.
    #[arg(long, value_name = "PATH")]
    write_config: Option<PathBuf>,
}

impl Cli {
    /// Loads the config file (if any) and applies command-line overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed, or if an
    /// override produces an invalid config.
    fn resolve_config(&self) -> anyhow::Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => ClientConfig::default(),
        };
        if let Some(base_url) = &self.base_url {
            config.server.base_url = base_url.clone();
        }
        config.validate().context("invalid --base-url")?;
        Ok(config)
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    // `RUST_LOG` wins; otherwise the configured level.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.log_level)),
        )
        .init();

    if let Some(path) = &cli.write_config {
        save_config(path, &config)
            .with_context(|| format!("writing config to {}", path.display()))?;
        info!("wrote config to {}", path.display());
        return Ok(());
    }

    let transport: Arc<dyn RemoteTransport> = if cli.offline {
        info!("offline mode: using canned telemetry");
        Arc::new(MockTransport::with_sample_telemetry())
    } else {
        Arc::new(HttpTransport::new(config.server.base_url.clone()).context("building HTTP client")?)
    };

    // A single logical thread drives the view; the network work it spawns
    // interleaves on the same thread.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("building Tokio runtime")?;
    let result = runtime.block_on(run(transport, AppSettings::from(&config), &config));

    // The stdin reader blocks a helper thread that cannot be cancelled;
    // don't wait for it.
    runtime.shutdown_background();
    result
}

/// Runs the console loop until `quit`, EOF or Ctrl+C.
async fn run(
    transport: Arc<dyn RemoteTransport>,
    settings: AppSettings,
    config: &ClientConfig,
) -> anyhow::Result<()> {
    info!("remote-client starting against {}", config.server.base_url);

    let (mut app, mut events) = RemoteApp::new(transport, settings);
    app.mount();
    println!("{}", app.render());
    println!("type 'help' for commands");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("reading stdin")? else {
                    info!("stdin closed");
                    break;
                };
                match parse_line(&line) {
                    Ok(None) => {}
                    Ok(Some(ConsoleCommand::Quit)) => break,
                    Ok(Some(command)) => {
                        if execute(&mut app, command) {
                            println!("{}", app.render());
                        }
                    }
                    Err(e) => println!("{e}"),
                }
            }
            Some(event) = events.recv() => {
                if app.handle_event(event) {
                    println!("{}", app.render());
                }
            }
            signal = &mut ctrl_c => {
                if let Err(e) = signal {
                    warn!("failed to listen for Ctrl+C: {e}");
                }
                info!("received Ctrl+C");
                break;
            }
        }
    }

    // Leaving the view releases any held control.
    app.release();
    info!("remote-client stopped");
    Ok(())
}

/// Applies one console command.  Returns `true` when the screen should be
/// rendered again right away.
fn execute(app: &mut RemoteApp, command: ConsoleCommand) -> bool {
    match command {
        ConsoleCommand::View(view) => {
            app.select_view(view);
            true
        }
        ConsoleCommand::Press(direction) => {
            if !app.press(direction) {
                println!("a direction is already held; 'release' it first");
            }
            false
        }
        ConsoleCommand::Release => {
            app.release();
            false
        }
        ConsoleCommand::Hold(direction, duration) => {
            if !app.hold(direction, duration) {
                println!("a direction is already held; 'release' it first");
            }
            false
        }
        ConsoleCommand::Button(action) => {
            app.trigger(action);
            false
        }
        ConsoleCommand::Help => {
            println!("{HELP}");
            false
        }
        ConsoleCommand::Quit => false,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
