//! Invocation settings assembled by the command-line layer.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Snippet directory shipped with the crate.
pub const DEFAULT_SNIPPETS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/Snippets");

/// Editor command used when none is configured.
pub const DEFAULT_EDITOR: &str = "mate";

/// Everything one invocation needs from its environment.
///
/// The core receives these values explicitly and never reads process
/// environment itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Top-level project directory; new files are reported relative to it.
    pub project_dir: Option<PathBuf>,
    /// The file currently being edited.
    pub file: Option<PathBuf>,
    /// Command that opens a file for editing.
    pub editor: String,
    /// Dialog command for confirmations; the terminal is used when absent.
    pub dialog: Option<String>,
    /// Directory holding `.tmSnippet` templates.
    pub snippets_dir: PathBuf,
    /// Base directory for cassette recordings, when recording.
    pub record_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            project_dir: None,
            file: None,
            editor: DEFAULT_EDITOR.to_string(),
            dialog: None,
            snippets_dir: PathBuf::from(DEFAULT_SNIPPETS_DIR),
            record_dir: None,
        }
    }
}

impl Settings {
    /// The project directory, or [`Error::MissingProjectRoot`].
    ///
    /// # Errors
    ///
    /// Fails when no project directory was supplied.
    pub fn require_project_dir(&self) -> Result<&Path> {
        self.project_dir.as_deref().ok_or(Error::MissingProjectRoot)
    }

    /// The current file, or [`Error::MissingFilePath`].
    ///
    /// # Errors
    ///
    /// Fails when no file path was supplied.
    pub fn require_file(&self) -> Result<&Path> {
        self.file.as_deref().ok_or(Error::MissingFilePath)
    }
}
