//! gitref: branch and tag lifecycle helper driven by the git CLI.
//!
//! This is the main entry point for the `gitref` CLI. It parses arguments,
//! dispatches to the requested workflow, and maps errors to exit codes. A
//! failed git step exits with that step's own exit code.

mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod git;
pub mod git_ref;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::execute(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
