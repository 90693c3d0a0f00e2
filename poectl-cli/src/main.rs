//! poectl CLI binary.
//!
//! Entry point for the `poectl` command-line tool.

use std::process::ExitCode;

use clap::Parser;
use poectl_cli::commands::{
    execute_cycle, execute_off, execute_on, execute_power, execute_stats, execute_status,
    execute_total_power, CommandError, CommandResult,
};
use poectl_cli::exit::{codes, exit_code};
use poectl_cli::output;
use poectl_cli::{Cli, Command, Logger, StderrLogger, Verbosity};
use poectl_switch::{Credentials, RealSleeper};
use poectl_transport::HttpTransport;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let logger = StderrLogger::new(Verbosity::from_count(cli.verbose));

    match run(&cli, &logger) {
        Ok(rendered) => {
            if let Some(line) = rendered {
                println!("{}", line);
            }
            ExitCode::from(codes::SUCCESS as u8)
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(exit_code(&e) as u8)
        }
    }
}

/// Run the selected command and render its output.
fn run(cli: &Cli, logger: &dyn Logger) -> CommandResult<Option<String>> {
    cli.command.validate()?;

    let transport = HttpTransport::new(&cli.host).map_err(CommandError::Transport)?;
    let credentials = Credentials::new(cli.host.clone(), cli.password.clone());
    logger.debug(&format!("target switch {}", credentials.host));

    let rendered = match &cli.command {
        Command::On { port } => {
            let result = execute_on(&transport, &credentials, *port, logger)?;
            output::render_control(&result, cli.json, cli.quiet)
        }
        Command::Off { port } => {
            let result = execute_off(&transport, &credentials, *port, logger)?;
            output::render_control(&result, cli.json, cli.quiet)
        }
        Command::Cycle { port, delay_ms } => {
            let sleeper = RealSleeper::new();
            let result =
                execute_cycle(&transport, &credentials, *port, *delay_ms, &sleeper, logger)?;
            output::render_control(&result, cli.json, cli.quiet)
        }
        Command::Status { port } => {
            let stats = execute_status(&transport, &credentials, *port, logger)?;
            output::render_status(&stats, cli.json, cli.quiet)
        }
        Command::Power { port } => {
            let result = execute_power(&transport, &credentials, *port, logger)?;
            output::render_power(&result, cli.json, cli.quiet)
        }
        Command::TotalPower => {
            let result = execute_total_power(&transport, &credentials, logger)?;
            output::render_total_power(&result, cli.json, cli.quiet)
        }
        Command::Stats => {
            let result = execute_stats(&transport, &credentials, logger)?;
            output::render_stats(&result, cli.json, cli.quiet)
        }
    };

    Ok(rendered)
}
