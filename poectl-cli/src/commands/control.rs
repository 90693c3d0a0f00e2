//! Port control commands: on, off, cycle.

use poectl_switch::{cycle_port, login, set_port_state, Credentials, Sleeper};
use poectl_transport::Transport;

use crate::logger::Logger;

use super::CommandResult;

/// What a control command did to a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortAction {
    On,
    Off,
    Cycle,
}

impl PortAction {
    /// Wire/output name of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            PortAction::On => "on",
            PortAction::Off => "off",
            PortAction::Cycle => "cycle",
        }
    }
}

/// Result of a control command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlResult {
    pub port: u8,
    pub action: PortAction,
    /// Delay used between cycle steps; `None` for on/off.
    pub delay_ms: Option<u64>,
}

/// Execute the on command.
pub fn execute_on<T: Transport>(
    transport: &T,
    credentials: &Credentials,
    port: u8,
    logger: &dyn Logger,
) -> CommandResult<ControlResult> {
    let session = login(transport, credentials)?;
    logger.verbose(&format!("authenticated against {}", credentials.host));

    set_port_state(transport, &session, port, true)?;
    logger.verbose(&format!("port {} turned on", port));

    Ok(ControlResult {
        port,
        action: PortAction::On,
        delay_ms: None,
    })
}

/// Execute the off command.
pub fn execute_off<T: Transport>(
    transport: &T,
    credentials: &Credentials,
    port: u8,
    logger: &dyn Logger,
) -> CommandResult<ControlResult> {
    let session = login(transport, credentials)?;
    logger.verbose(&format!("authenticated against {}", credentials.host));

    set_port_state(transport, &session, port, false)?;
    logger.verbose(&format!("port {} turned off", port));

    Ok(ControlResult {
        port,
        action: PortAction::Off,
        delay_ms: None,
    })
}

/// Execute the cycle command.
pub fn execute_cycle<T: Transport, S: Sleeper>(
    transport: &T,
    credentials: &Credentials,
    port: u8,
    delay_ms: u64,
    sleeper: &S,
    logger: &dyn Logger,
) -> CommandResult<ControlResult> {
    let session = login(transport, credentials)?;
    logger.verbose(&format!("authenticated against {}", credentials.host));
    logger.verbose(&format!("cycling port {} with {} ms delay", port, delay_ms));

    cycle_port(transport, &session, port, delay_ms, sleeper)?;

    Ok(ControlResult {
        port,
        action: PortAction::Cycle,
        delay_ms: Some(delay_ms),
    })
}
