//! Core logic for driving a PoE switch through its HTML management console.
//!
//! The console exposes no API, so everything here is built on two legs: the
//! marker grammar from `poectl-extract` and the abstract `Transport` from
//! `poectl-transport`. Three concerns live in this crate:
//!
//! - `auth`: the merge-hash login handshake producing a [`Session`]
//! - `mutator`: per-port power state changes behind a single-use page token
//! - `telemetry`: per-port statistics scraped from one status-page snapshot

pub mod auth;
pub mod mutator;
pub mod port;
pub mod sleeper;
pub mod telemetry;

pub use auth::{login, md5_hex, merge_hash, AuthError, Credentials, Session, LOGIN_PATH};
pub use mutator::{cycle_port, set_port_state, MutationError, POE_CONFIG_PATH};
pub use port::{is_valid_port, MAX_PORT, MIN_PORT};
pub use sleeper::{MockSleeper, RealSleeper, Sleeper};
pub use telemetry::{
    all_stats, decode_power_class, port_anchor, port_power, port_stats, total_power, PortStats,
    FIELD_FWD_WINDOW, STATUS_BACK_WINDOW, STATUS_PATH,
};
