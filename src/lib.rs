//! Core library entry for the `rspec-switch` CLI.
//!
//! Moves between a Ruby source file and its RSpec spec, creating the missing
//! side from a scaffold when asked.

pub mod adapters;
pub mod cassette;
pub mod classify;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod layout;
pub mod logging;
pub mod ports;
pub mod scaffold;
pub mod switcher;

use clap::Parser;

pub use error::{Error, Result};

/// Run the CLI with the provided arguments.
///
/// `--help` and `--version` print their text and succeed.
///
/// # Errors
///
/// Returns an error when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(Error::Usage(err.to_string())),
    };

    logging::init(cli.global.verbosity());
    commands::dispatch(cli.command, &cli.global.settings())
}
