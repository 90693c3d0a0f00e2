//! Telemetry commands: status, power, total-power, stats.
//!
//! Each command fetches the status page once and extracts from that single
//! snapshot; per-field gaps come back as defaults rather than failures.

use poectl_switch::{
    all_stats, login, port_power, port_stats, total_power, Credentials, PortStats, Session,
    STATUS_PATH,
};
use poectl_transport::{Method, Transport};

use crate::logger::Logger;

use super::{CommandError, CommandResult};

/// Result of the power command.
///
/// `power` is `-1.0` when the reading is absent, the sentinel contract at
/// the tool boundary, distinct from a true 0 W reading.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerResult {
    pub port: u8,
    pub power: f32,
}

/// Result of the total-power command.
#[derive(Debug, Clone, PartialEq)]
pub struct TotalPowerResult {
    pub total_power: f32,
    /// Ports that contributed a reading.
    pub port_count: usize,
}

/// Result of the stats command.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsResult {
    pub ports: Vec<PortStats>,
    pub total_power: f32,
}

/// Execute the status command: one port's full record.
pub fn execute_status<T: Transport>(
    transport: &T,
    credentials: &Credentials,
    port: u8,
    logger: &dyn Logger,
) -> CommandResult<PortStats> {
    let session = login(transport, credentials)?;
    let html = fetch_status_page(transport, &session, logger)?;

    port_stats(&html, port).ok_or(CommandError::NoTelemetry(port))
}

/// Execute the power command.
pub fn execute_power<T: Transport>(
    transport: &T,
    credentials: &Credentials,
    port: u8,
    logger: &dyn Logger,
) -> CommandResult<PowerResult> {
    let session = login(transport, credentials)?;
    let html = fetch_status_page(transport, &session, logger)?;

    let power = port_power(&html, port).unwrap_or(-1.0);
    Ok(PowerResult { port, power })
}

/// Execute the total-power command.
pub fn execute_total_power<T: Transport>(
    transport: &T,
    credentials: &Credentials,
    logger: &dyn Logger,
) -> CommandResult<TotalPowerResult> {
    let session = login(transport, credentials)?;
    let html = fetch_status_page(transport, &session, logger)?;

    let stats = all_stats(&html);
    Ok(TotalPowerResult {
        total_power: total_power(&stats),
        port_count: stats.len(),
    })
}

/// Execute the stats command: every port present in the snapshot.
pub fn execute_stats<T: Transport>(
    transport: &T,
    credentials: &Credentials,
    logger: &dyn Logger,
) -> CommandResult<StatsResult> {
    let session = login(transport, credentials)?;
    let html = fetch_status_page(transport, &session, logger)?;

    let ports = all_stats(&html);
    if ports.is_empty() {
        return Err(CommandError::EmptyStatusPage);
    }
    let total_power = total_power(&ports);
    Ok(StatsResult { ports, total_power })
}

/// Fetch the status page with the session cookie attached.
fn fetch_status_page<T: Transport>(
    transport: &T,
    session: &Session,
    logger: &dyn Logger,
) -> CommandResult<String> {
    logger.debug(&format!("fetching {}", STATUS_PATH));
    let response = transport.send(Method::Get, STATUS_PATH, None, Some(&session.cookie_header()))?;
    if response.status != 200 {
        return Err(CommandError::BadStatus(response.status));
    }
    Ok(response.body)
}
