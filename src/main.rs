//! Binary entrypoint for the `rspec-switch` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // Editor variables may come from a .env file; real environment wins.
    dotenvy::dotenv().ok();

    // Recording is handled in commands::dispatch via --record / RSPEC_SWITCH_RECORD.
    match rspec_switch::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
