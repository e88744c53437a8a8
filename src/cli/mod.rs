//! CLI module for rosterd
//!
//! Provides the command-line interface:
//! - init: write a default config and empty data file
//! - serve: boot the HTTP server
//! - seed: reset the store and load the sample records
//! - student: drive a running server through the API client

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, StudentAction};
pub use commands::{init, run_command, seed, serve};
pub use errors::{CliError, CliResult};

/// Parse arguments and dispatch.
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args())
}
