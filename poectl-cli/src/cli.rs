//! CLI argument parsing for poectl.
//!
//! Host and password can come from flags or from the `POECTL_HOST` /
//! `POECTL_PASSWORD` environment variables; flags win.

use clap::{ArgAction, Parser, Subcommand};
use poectl_switch::is_valid_port;
use thiserror::Error;

/// Default delay between the off and on steps of a power cycle.
pub const DEFAULT_CYCLE_DELAY_MS: u64 = 2000;

/// Errors from CLI argument validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("port must be between 1 and 8, got {0}")]
    InvalidPort(u8),

    #[error("cycle delay must be at least 1 ms, got {0}")]
    InvalidDelay(u64),
}

/// Control PoE switch ports and monitor power through the web management
/// console.
#[derive(Parser, Debug, Clone)]
#[command(name = "poectl")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Switch IP address or hostname.
    #[arg(short = 'H', long, env = "POECTL_HOST")]
    pub host: String,

    /// Administrator password.
    #[arg(short, long, env = "POECTL_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Output in JSON format.
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Suppress non-essential output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose output (-v for progress, -vv for debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Turn a port on.
    On {
        /// Port number (1-8).
        port: u8,
    },
    /// Turn a port off.
    Off {
        /// Port number (1-8).
        port: u8,
    },
    /// Power cycle a port: off, delay, on.
    Cycle {
        /// Port number (1-8).
        port: u8,
        /// Delay between the off and on steps, in milliseconds.
        #[arg(long, default_value_t = DEFAULT_CYCLE_DELAY_MS)]
        delay_ms: u64,
    },
    /// Show one port's status record.
    Status {
        /// Port number (1-8).
        port: u8,
    },
    /// Show power consumption for one port.
    Power {
        /// Port number (1-8).
        port: u8,
    },
    /// Show total power consumption across all ports.
    TotalPower,
    /// Show comprehensive statistics for all ports.
    Stats,
}

impl Command {
    /// Validate arguments before any network traffic.
    pub fn validate(&self) -> Result<(), CliError> {
        match self {
            Command::On { port }
            | Command::Off { port }
            | Command::Status { port }
            | Command::Power { port } => validate_port(*port),
            Command::Cycle { port, delay_ms } => {
                validate_port(*port)?;
                if *delay_ms == 0 {
                    return Err(CliError::InvalidDelay(*delay_ms));
                }
                Ok(())
            }
            Command::TotalPower | Command::Stats => Ok(()),
        }
    }
}

fn validate_port(port: u8) -> Result<(), CliError> {
    if is_valid_port(port) {
        Ok(())
    } else {
        Err(CliError::InvalidPort(port))
    }
}
