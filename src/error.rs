//! Error type shared by the switching core and the command layer.

use std::path::PathBuf;

use thiserror::Error;

/// Failures that end a single invocation.
///
/// A path with no twin and a declined creation are not errors; they are
/// reported through `Option` and [`crate::switcher::Outcome`] instead.
#[derive(Error, Debug)]
pub enum Error {
    /// The command line could not be parsed.
    #[error("{0}")]
    Usage(String),

    /// No project directory was supplied.
    #[error("project directory is not set (pass --project-dir or set TM_PROJECT_DIRECTORY)")]
    MissingProjectRoot,

    /// No file path was supplied.
    #[error("file path is not set (pass --file or set TM_FILEPATH)")]
    MissingFilePath,

    /// The spec snippet could not be read or has no content markers.
    #[error("snippet '{name}' unavailable: {reason}")]
    TemplateMissing {
        /// Snippet file name.
        name: String,
        /// What went wrong.
        reason: String,
    },

    /// Creating directories or writing the scaffold failed.
    #[error("failed to write '{path}': {message}")]
    WriteFailure {
        /// Target file.
        path: PathBuf,
        /// Underlying error message.
        message: String,
    },

    /// The confirmation prompt could not be shown.
    #[error("confirmation prompt failed: {0}")]
    Prompt(String),

    /// The editor could not be started.
    #[error("failed to open '{path}': {message}")]
    Open {
        /// File handed to the editor.
        path: PathBuf,
        /// Underlying error message.
        message: String,
    },

    /// A recording session could not be started or saved.
    #[error("recording failed: {0}")]
    Recording(String),
}

impl Error {
    /// Builds a [`Error::TemplateMissing`].
    pub fn template_missing(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::TemplateMissing { name: name.into(), reason: reason.into() }
    }

    /// Builds a [`Error::WriteFailure`].
    pub fn write_failure(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::WriteFailure { path: path.into(), message: message.to_string() }
    }

    /// Builds a [`Error::Open`].
    pub fn open(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Open { path: path.into(), message: message.to_string() }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
