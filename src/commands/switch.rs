//! `rspec-switch switch` command.

use crate::config::Settings;
use crate::context::ServiceContext;
use crate::error::Result;
use crate::switcher::{Outcome, Switcher};

/// Execute the `switch` command: open the twin of the current file.
///
/// # Errors
///
/// Returns an error if the project directory or file is missing, or if
/// creating or opening the twin fails.
pub fn run(ctx: &ServiceContext, settings: &Settings) -> Result<Outcome> {
    let project_dir = settings.require_project_dir()?;
    let file = settings.require_file()?;
    Switcher::new(ctx, project_dir, &settings.snippets_dir).go_to_twin(file)
}
