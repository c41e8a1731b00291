//! Command dispatch and handlers.

pub mod classify;
pub mod scaffold;
pub mod switch;
pub mod twin;

use crate::cassette::session::RecordingSession;
use crate::cli::Command;
use crate::config::Settings;
use crate::context::ServiceContext;
use crate::error::{Error, Result};

/// Dispatch a parsed command to its handler.
///
/// When `settings.record_dir` is set, all port interactions are recorded to
/// per-port cassette files in a new session directory below it.
///
/// # Errors
///
/// Returns an error if the selected command handler fails or the recording
/// cannot be saved.
pub fn dispatch(command: Command, settings: &Settings) -> Result<()> {
    let Some(base) = settings.record_dir.as_deref() else {
        let ctx = ServiceContext::live(settings);
        return dispatch_with_context(command, settings, &ctx);
    };

    let (ctx, session) = ServiceContext::recording_at(base, settings).map_err(Error::Recording)?;
    let result = dispatch_with_context(command, settings, &ctx);

    // Finish recording even when the command failed.
    drop(ctx);
    finish_recording(session)?;

    result
}

/// Dispatch a command with the given service context.
///
/// # Errors
///
/// Returns an error if the selected command handler fails.
pub fn dispatch_with_context(
    command: Command,
    settings: &Settings,
    ctx: &ServiceContext,
) -> Result<()> {
    match command {
        Command::Switch => switch::run(ctx, settings).map(|_| ()),
        Command::Twin => twin::run(ctx, settings),
        Command::Classify => classify::run(settings),
        Command::Scaffold => scaffold::run(ctx, settings),
    }
}

/// Finish a recording session and report the output directory.
fn finish_recording(session: RecordingSession) -> Result<()> {
    let output_dir = session.finish().map_err(Error::Recording)?;
    eprintln!("Recording saved to: {}", output_dir.display());
    Ok(())
}
