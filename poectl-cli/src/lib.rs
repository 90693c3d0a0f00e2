//! poectl CLI.
//!
//! This crate provides the command-line interface for the PoE switch
//! controller: argument parsing, command orchestration, output rendering,
//! and exit codes. All orchestration is generic over the transport and
//! sleeper traits so full command flows are testable against mocks.

pub mod cli;
pub mod commands;
pub mod exit;
pub mod logger;
pub mod output;

pub use cli::{Cli, CliError, Command, DEFAULT_CYCLE_DELAY_MS};
pub use commands::{
    execute_cycle, execute_off, execute_on, execute_power, execute_stats, execute_status,
    execute_total_power, CommandError, CommandResult,
};
pub use logger::{CaptureLogger, Logger, StderrLogger, Verbosity};
