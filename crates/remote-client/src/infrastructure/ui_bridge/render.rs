//! Plain-text rendering of the client's two views.
//!
//! Every function here is pure: it takes state and returns a `String`, so the
//! exact output can be asserted in unit tests without a terminal.
//!
//! # Layout
//!
//! ```text
//! [Control Remoto] | Información del Sistema      <- menu, active view bracketed
//!
//! Controles de Ratón                              <- active view body
//!   press right  Mover Derecha
//!   ...
//!
//! Acciones                                        <- always rendered
//!   off      Apagar
//!   restart  Reiniciar
//!   suspend  Suspender
//! ```

use std::fmt::Write as _;

use remote_core::domain::telemetry::gigabytes;
use remote_core::{Direction, PowerAction, SystemInfo};

use super::ActiveView;

const MENU_CONTROL: &str = "Control Remoto";
const MENU_SYSTEM_INFO: &str = "Información del Sistema";

/// Renders the navigation menu with the active entry in brackets.
pub fn render_menu(active: ActiveView) -> String {
    let entry = |label: &str, selected: bool| {
        if selected {
            format!("[{label}]")
        } else {
            label.to_string()
        }
    };
    format!(
        "{} | {}",
        entry(MENU_CONTROL, active == ActiveView::Control),
        entry(MENU_SYSTEM_INFO, active == ActiveView::SystemInfo),
    )
}

/// Renders the mouse, volume and click controls with the console command
/// that triggers each.
pub fn render_control_view() -> String {
    let mut out = String::from("Controles de Ratón\n");
    for direction in Direction::ALL {
        let key = format!("press {direction}");
        let _ = writeln!(out, "  {key:<12} {}", direction.label());
    }
    let _ = writeln!(out, "  {:<12} {}", "vol+", "Subir Volumen");
    let _ = writeln!(out, "  {:<12} {}", "vol-", "Bajar Volumen");
    let _ = writeln!(out, "  {:<12} {}", "click", "Hacer Clic");
    out
}

/// Renders a telemetry record.
pub fn render_system_info(info: &SystemInfo) -> String {
    let mut out = String::from("Información del Sistema\n");
    let _ = writeln!(out, "  Temperatura CPU: {:.2}ºC", info.temperature);
    let _ = writeln!(out, "  Carga de la CPU: {:.2}%", info.cpu_load);

    let memory = &info.memory;
    for (label, bytes) in [
        ("Total", memory.total),
        ("Libre", memory.free),
        ("Usada", memory.used),
        ("Activa", memory.active),
        ("Disponible", memory.available),
    ] {
        let _ = writeln!(out, "  Memoria {label}: {:.2} GB", gigabytes(bytes));
    }

    let _ = writeln!(out, "  Disco:");
    for disk in &info.disk {
        let _ = writeln!(
            out,
            "    {} ({}): {:.2} GB usados de {:.2} GB",
            disk.fs,
            disk.fs_type,
            gigabytes(disk.used),
            gigabytes(disk.size),
        );
    }
    out
}

/// Renders the power action panel.
pub fn render_actions() -> String {
    let mut out = String::from("Acciones\n");
    for action in PowerAction::ALL {
        let key = match action {
            PowerAction::TurnOff => "off",
            PowerAction::Restart => "restart",
            PowerAction::Suspend => "suspend",
        };
        let _ = writeln!(out, "  {key:<12} {}", action.label());
    }
    out
}

/// Renders the whole screen: menu, the active view, then the action panel.
///
/// The System Info view renders nothing until a record exists; the menu and
/// action panel are always present.
pub fn render_screen(active: ActiveView, info: Option<&SystemInfo>) -> String {
    let mut out = render_menu(active);
    out.push_str("\n\n");
    match (active, info) {
        (ActiveView::Control, _) => {
            out.push_str(&render_control_view());
            out.push('\n');
        }
        (ActiveView::SystemInfo, Some(info)) => {
            out.push_str(&render_system_info(info));
            out.push('\n');
        }
        (ActiveView::SystemInfo, None) => {}
    }
    out.push_str(&render_actions());
    out
}
