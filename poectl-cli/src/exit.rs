//! Exit codes for the poectl CLI.
//!
//! Following Unix conventions for exit codes.

use crate::commands::CommandError;
use poectl_switch::{AuthError, MutationError};

/// Exit code constants.
pub mod codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Invalid arguments.
    pub const INVALID_ARGS: i32 = 1;
    /// Connection or timeout failure.
    pub const TRANSPORT_ERROR: i32 = 2;
    /// Authentication failure.
    pub const AUTH_ERROR: i32 = 3;
    /// Port mutation failure.
    pub const MUTATION_ERROR: i32 = 4;
    /// Requested telemetry not present.
    pub const NO_TELEMETRY: i32 = 5;
}

/// Map a CommandError to an exit code.
pub fn exit_code(error: &CommandError) -> i32 {
    match error {
        CommandError::InvalidArgument(_) => codes::INVALID_ARGS,
        CommandError::Auth(AuthError::Transport(_)) => codes::TRANSPORT_ERROR,
        CommandError::Auth(_) => codes::AUTH_ERROR,
        CommandError::Mutation(MutationError::InvalidPort(_)) => codes::INVALID_ARGS,
        CommandError::Mutation(MutationError::Transport(_)) => codes::TRANSPORT_ERROR,
        CommandError::Mutation(_) => codes::MUTATION_ERROR,
        CommandError::Transport(_) => codes::TRANSPORT_ERROR,
        CommandError::BadStatus(_) => codes::TRANSPORT_ERROR,
        CommandError::NoTelemetry(_) => codes::NO_TELEMETRY,
        CommandError::EmptyStatusPage => codes::NO_TELEMETRY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CliError;
    use poectl_transport::TransportError;

    #[test]
    fn test_exit_code_invalid_argument() {
        let error = CommandError::InvalidArgument(CliError::InvalidPort(0));
        assert_eq!(exit_code(&error), codes::INVALID_ARGS);
    }

    #[test]
    fn test_exit_code_auth() {
        assert_eq!(
            exit_code(&CommandError::Auth(AuthError::NoCookie)),
            codes::AUTH_ERROR
        );
        assert_eq!(
            exit_code(&CommandError::Auth(AuthError::BadStatus(503))),
            codes::AUTH_ERROR
        );
    }

    #[test]
    fn test_exit_code_transport_variants_unify() {
        let connection = || TransportError::Connection("refused".to_string());
        assert_eq!(
            exit_code(&CommandError::Transport(connection())),
            codes::TRANSPORT_ERROR
        );
        assert_eq!(
            exit_code(&CommandError::Auth(AuthError::Transport(connection()))),
            codes::TRANSPORT_ERROR
        );
        assert_eq!(
            exit_code(&CommandError::Mutation(MutationError::Transport(connection()))),
            codes::TRANSPORT_ERROR
        );
    }

    #[test]
    fn test_exit_code_mutation() {
        assert_eq!(
            exit_code(&CommandError::Mutation(MutationError::NoToken)),
            codes::MUTATION_ERROR
        );
        assert_eq!(
            exit_code(&CommandError::Mutation(MutationError::BadStatus(500))),
            codes::MUTATION_ERROR
        );
        // Port validation is a usage error even when it surfaces from the
        // mutation layer.
        assert_eq!(
            exit_code(&CommandError::Mutation(MutationError::InvalidPort(9))),
            codes::INVALID_ARGS
        );
    }

    #[test]
    fn test_exit_code_telemetry() {
        assert_eq!(
            exit_code(&CommandError::NoTelemetry(4)),
            codes::NO_TELEMETRY
        );
        assert_eq!(exit_code(&CommandError::EmptyStatusPage), codes::NO_TELEMETRY);
        assert_eq!(
            exit_code(&CommandError::BadStatus(403)),
            codes::TRANSPORT_ERROR
        );
    }

    #[test]
    fn test_exit_codes_constants() {
        assert_eq!(codes::SUCCESS, 0);
        assert_eq!(codes::INVALID_ARGS, 1);
        assert_eq!(codes::TRANSPORT_ERROR, 2);
        assert_eq!(codes::AUTH_ERROR, 3);
        assert_eq!(codes::MUTATION_ERROR, 4);
        assert_eq!(codes::NO_TELEMETRY, 5);
    }
}
