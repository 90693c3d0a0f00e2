//! Command orchestration for CLI subcommands.
//!
//! Each `execute_*` function logs in, performs its operation, and returns a
//! result struct for the output layer to render. Everything is generic over
//! `Transport` and `Sleeper` so full flows run against mocks in tests.

pub mod control;
pub mod telemetry;

pub use control::{execute_cycle, execute_off, execute_on, ControlResult, PortAction};
pub use telemetry::{
    execute_power, execute_stats, execute_status, execute_total_power, PowerResult, StatsResult,
    TotalPowerResult,
};

use crate::cli::CliError;
use poectl_switch::{AuthError, MutationError};
use poectl_transport::TransportError;
use thiserror::Error;

/// Errors from command execution.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] CliError),

    #[error("authentication failed: {0}")]
    Auth(#[from] AuthError),

    #[error("mutation failed: {0}")]
    Mutation(#[from] MutationError),

    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),

    #[error("status page returned {0}")]
    BadStatus(u16),

    #[error("no telemetry for port {0}")]
    NoTelemetry(u8),

    #[error("no port telemetry in status page")]
    EmptyStatusPage,
}

/// Result of command execution.
pub type CommandResult<T> = Result<T, CommandError>;
