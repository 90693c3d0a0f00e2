//! Telemetry extraction from one status-page snapshot.
//!
//! The status page lays each port out around a `value="<port>"` marker: the
//! power mode and PoE class sit shortly before it, the measurement labels
//! (`ml570` volts, `ml572` milliamps, `ml574` watts, `ml575` degrees,
//! `ml581` fault text) shortly after. All lookups are relative to that
//! anchor; a missing anchor means the port is absent from the page, while a
//! missing individual field just defaults so partial readings still come
//! through.
//!
//! Everything here is pure over an already-fetched HTML snapshot, no HTTP.

use poectl_extract::{extract_bounded_span, extract_tag_text, SearchDirection};
use serde::{Deserialize, Serialize};

use crate::port::{MAX_PORT, MIN_PORT};

/// PoE status page path.
pub const STATUS_PATH: &str = "/getPoePortStatus.cgi";

/// Backward search window for status and class markers, in bytes.
///
/// Generous bound, not an invariant; firmware revisions shuffle whitespace.
pub const STATUS_BACK_WINDOW: usize = 500;

/// Forward search window for measurement labels, in bytes.
pub const FIELD_FWD_WINDOW: usize = 2000;

/// Status reported when a port is delivering power; drives `enabled`.
const DELIVERING: &str = "Delivering Power";

/// One port's readings, assembled fresh per extraction call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortStats {
    pub port: u8,
    pub enabled: bool,
    pub status: String,
    #[serde(rename = "class")]
    pub power_class: String,
    pub voltage: f32,
    pub current: f32,
    pub power: f32,
    pub temperature: f32,
    pub fault: String,
}

impl PortStats {
    /// Record with every field at its default, before any lookup succeeds.
    fn unknown(port: u8) -> Self {
        Self {
            port,
            enabled: false,
            status: "Unknown".to_string(),
            power_class: "Unknown".to_string(),
            voltage: 0.0,
            current: 0.0,
            power: 0.0,
            temperature: 0.0,
            fault: "Unknown".to_string(),
        }
    }
}

/// Position of a port's marker in the snapshot, if the port is present.
pub fn port_anchor(html: &str, port: u8) -> Option<usize> {
    let marker = format!("value=\"{}\"", port);
    html.find(&marker)
}

/// Power draw in watts for one port. `None` when the port marker or the
/// `ml574` label is absent, or the span does not parse as a number.
pub fn port_power(html: &str, port: u8) -> Option<f32> {
    let anchor = port_anchor(html, port)?;
    let text = forward_field(html, anchor, "ml574")?;
    text.parse().ok()
}

/// Decode the vendor's class token.
///
/// `ml003@4@` reads as "Class 4"; anything else passes through verbatim
/// (the page shows plain `Unknown` for unclassified ports).
pub fn decode_power_class(raw: &str) -> String {
    if let Some(rest) = raw.strip_prefix("ml003@") {
        if let Some(at) = rest.find('@') {
            if at > 0 {
                return format!("Class {}", &rest[..at]);
            }
        }
    }
    raw.to_string()
}

/// Full readings for one port.
///
/// A missing anchor is the only total failure. Every other field degrades
/// to its default independently; a snapshot with a missing temperature
/// span still yields voltage and power.
pub fn port_stats(html: &str, port: u8) -> Option<PortStats> {
    let anchor = port_anchor(html, port)?;
    let mut stats = PortStats::unknown(port);

    if let Some(status) = extract_bounded_span(
        html,
        anchor,
        "poe-power-mode",
        SearchDirection::Backward,
        STATUS_BACK_WINDOW,
    ) {
        stats.status = status.to_string();
        stats.enabled = status == DELIVERING;
    }

    if let Some(raw) = extract_tag_text(
        html,
        anchor,
        "powClassShow",
        SearchDirection::Backward,
        STATUS_BACK_WINDOW,
    ) {
        stats.power_class = decode_power_class(raw);
    }

    stats.voltage = forward_float(html, anchor, "ml570");
    stats.current = forward_float(html, anchor, "ml572");
    stats.power = port_power(html, port).unwrap_or(0.0);
    stats.temperature = forward_float(html, anchor, "ml575");
    if let Some(fault) = forward_field(html, anchor, "ml581") {
        stats.fault = fault.to_string();
    }

    Some(stats)
}

/// Readings for every port present in the snapshot, in port order.
///
/// Ports whose marker is absent are omitted, not padded with placeholders.
pub fn all_stats(html: &str) -> Vec<PortStats> {
    (MIN_PORT..=MAX_PORT)
        .filter_map(|port| port_stats(html, port))
        .collect()
}

/// Total power draw across a set of readings, in watts.
pub fn total_power(stats: &[PortStats]) -> f32 {
    stats.iter().map(|s| s.power).sum()
}

fn forward_field<'a>(html: &'a str, anchor: usize, label: &str) -> Option<&'a str> {
    extract_bounded_span(html, anchor, label, SearchDirection::Forward, FIELD_FWD_WINDOW)
}

fn forward_float(html: &str, anchor: usize, label: &str) -> f32 {
    forward_field(html, anchor, label)
        .and_then(|text| text.parse().ok())
        .unwrap_or(0.0)
}
