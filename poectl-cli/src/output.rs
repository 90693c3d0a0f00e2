//! Output rendering for command results.
//!
//! Every renderer returns the line(s) to print on stdout, or `None` when
//! quiet mode suppresses them. JSON output always renders; quiet only trims
//! the human-readable forms down to their essential values. Numbers are
//! rounded to the precision the console itself displays.

use serde_json::json;

use crate::commands::{ControlResult, PortAction, PowerResult, StatsResult, TotalPowerResult};
use poectl_switch::PortStats;

/// Render a control command result.
pub fn render_control(result: &ControlResult, json_output: bool, quiet: bool) -> Option<String> {
    if json_output {
        let mut value = json!({
            "port": result.port,
            "action": result.action.as_str(),
            "success": true,
        });
        if let Some(delay) = result.delay_ms {
            value["delay"] = json!(delay);
        }
        return Some(value.to_string());
    }
    if quiet {
        return None;
    }
    Some(match result.action {
        PortAction::On => format!("Port {} turned ON", result.port),
        PortAction::Off => format!("Port {} turned OFF", result.port),
        PortAction::Cycle => format!(
            "Port {} power cycled ({} ms delay)",
            result.port,
            result.delay_ms.unwrap_or_default()
        ),
    })
}

/// Render a single port's status record.
pub fn render_status(stats: &PortStats, json_output: bool, quiet: bool) -> Option<String> {
    if json_output {
        return Some(port_json(stats).to_string());
    }
    if quiet {
        return Some(stats.status.clone());
    }
    Some(format!(
        "Port {}: {}\n  Class: {}  |  Voltage: {:.1} V  |  Current: {:.0} mA\n  Power: {:.1} W  |  Temperature: {:.0} °C  |  Fault: {}",
        stats.port,
        stats.status,
        stats.power_class,
        stats.voltage,
        stats.current,
        stats.power,
        stats.temperature,
        stats.fault,
    ))
}

/// Render a single-port power reading (`-1.0` sentinel passes through).
pub fn render_power(result: &PowerResult, json_output: bool, quiet: bool) -> Option<String> {
    if json_output {
        return Some(
            json!({
                "port": result.port,
                "power": round1(result.power),
            })
            .to_string(),
        );
    }
    if quiet {
        return Some(format!("{:.1}", result.power));
    }
    Some(format!("Port {} power: {:.1} W", result.port, result.power))
}

/// Render the total-power summary.
pub fn render_total_power(
    result: &TotalPowerResult,
    json_output: bool,
    quiet: bool,
) -> Option<String> {
    if json_output {
        return Some(json!({ "total_power": round1(result.total_power) }).to_string());
    }
    if quiet {
        return Some(format!("{:.1}", result.total_power));
    }
    Some(format!("Total PoE power: {:.1} W", result.total_power))
}

/// Render the all-ports statistics table.
pub fn render_stats(result: &StatsResult, json_output: bool, quiet: bool) -> Option<String> {
    if json_output {
        let ports: Vec<_> = result.ports.iter().map(port_json).collect();
        return Some(
            json!({
                "ports": ports,
                "total_power": round1(result.total_power),
            })
            .to_string(),
        );
    }
    if quiet {
        return None;
    }

    let mut out = String::from("=== PoE Port Statistics ===\n");
    for stats in &result.ports {
        out.push_str(&format!(
            "\nPort {}: {}\n  Class: {}  |  Voltage: {:.1} V  |  Current: {:.0} mA\n  Power: {:.1} W  |  Temperature: {:.0} °C  |  Fault: {}\n",
            stats.port,
            stats.status,
            stats.power_class,
            stats.voltage,
            stats.current,
            stats.power,
            stats.temperature,
            stats.fault,
        ));
    }
    out.push_str(&format!("\nTotal power: {:.1} W", result.total_power));
    Some(out)
}

/// JSON object for one port, mirroring the console's field set. Floats are
/// rounded so f32 readings don't serialize with conversion noise.
fn port_json(stats: &PortStats) -> serde_json::Value {
    json!({
        "port": stats.port,
        "enabled": stats.enabled,
        "status": stats.status,
        "class": stats.power_class,
        "voltage": round1(stats.voltage),
        "current": round0(stats.current),
        "power": round1(stats.power),
        "temperature": round0(stats.temperature),
        "fault": stats.fault,
    })
}

fn round1(value: f32) -> f64 {
    (f64::from(value) * 10.0).round() / 10.0
}

fn round0(value: f32) -> f64 {
    f64::from(value).round()
}
