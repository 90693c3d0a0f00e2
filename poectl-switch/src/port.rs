//! Port numbering.
//!
//! The switch has eight PoE ports, numbered 1-8 in the UI. The wire protocol
//! is zero-indexed; that translation happens at the POST boundary, never in
//! caller-facing APIs.

/// First valid port number.
pub const MIN_PORT: u8 = 1;

/// Last valid port number.
pub const MAX_PORT: u8 = 8;

/// Whether `port` names a physical PoE port.
pub fn is_valid_port(port: u8) -> bool {
    (MIN_PORT..=MAX_PORT).contains(&port)
}
