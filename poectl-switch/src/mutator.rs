//! Per-port power state changes.
//!
//! Every state change is a two-step exchange: fetch the configuration page
//! to lift out the `hash` token, then POST the new state with that token
//! attached. The token is scoped to a single POST and goes stale, so it is
//! re-fetched immediately before every mutation and never cached.

use poectl_extract::extract_quoted_attribute;
use poectl_transport::{Method, Transport, TransportError};
use thiserror::Error;

use crate::auth::Session;
use crate::port::is_valid_port;
use crate::sleeper::Sleeper;

/// PoE port configuration page path.
pub const POE_CONFIG_PATH: &str = "/PoEPortConfig.cgi";

/// Failures of a single mutating operation.
#[derive(Debug, Error)]
pub enum MutationError {
    #[error("port {0} is outside the valid range 1-8")]
    InvalidPort(u8),

    #[error("session is not authenticated")]
    Unauthenticated,

    #[error("no mutation token in configuration page")]
    NoToken,

    #[error("state change rejected with status {0}")]
    BadStatus(u16),

    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),
}

/// Enable or disable PoE on one port.
///
/// The form constants select 802.3at mode with IEEE 802 detection, matching
/// what the vendor UI submits. `portID` on the wire is zero-indexed.
/// Success is judged by HTTP status 200.
pub fn set_port_state<T: Transport>(
    transport: &T,
    session: &Session,
    port: u8,
    enabled: bool,
) -> Result<(), MutationError> {
    if !is_valid_port(port) {
        return Err(MutationError::InvalidPort(port));
    }
    if !session.authenticated {
        return Err(MutationError::Unauthenticated);
    }

    let cookie = session.cookie_header();

    // Fetch the token right before the POST; one fetched earlier may be
    // stale and the switch rejects stale tokens.
    let page = transport.send(Method::Get, POE_CONFIG_PATH, None, Some(&cookie))?;
    let token = extract_quoted_attribute(&page.body, "hash").ok_or(MutationError::NoToken)?;

    let body = format!(
        "ACTION=Apply&portID={}&ADMIN_MODE={}&PORT_PRIO=0&POW_MOD=3&POW_LIMT_TYP=0&DETEC_TYP=2&DISCONNECT_TYP=2&hash={}",
        port - 1,
        u8::from(enabled),
        token,
    );

    let response = transport.send(Method::Post, POE_CONFIG_PATH, Some(&body), Some(&cookie))?;
    if response.status != 200 {
        return Err(MutationError::BadStatus(response.status));
    }
    Ok(())
}

/// Power cycle one port: off, blocking delay, on.
///
/// If the off step fails the on step is never attempted. There is no
/// compensation if the process dies during the delay; the port stays off.
pub fn cycle_port<T: Transport, S: Sleeper>(
    transport: &T,
    session: &Session,
    port: u8,
    delay_ms: u64,
    sleeper: &S,
) -> Result<(), MutationError> {
    set_port_state(transport, session, port, false)?;
    sleeper.sleep_ms(delay_ms);
    set_port_state(transport, session, port, true)
}
