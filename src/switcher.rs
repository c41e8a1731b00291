//! Going from the current file to its twin, creating the twin on request.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::classify::classify;
use crate::context::ServiceContext;
use crate::error::{Error, Result};
use crate::layout::{twin_path, MarkerProbe};
use crate::scaffold::{generate, SnippetLibrary};

/// How a switch ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The file is not under `lib`, `app` or `spec`; nothing happened.
    NoTwin,
    /// The twin was handed to the editor.
    Opened {
        /// The twin path.
        twin: PathBuf,
        /// Whether the twin was created during this switch.
        created: bool,
    },
    /// The twin was missing and creating it was declined. Its path was
    /// still handed to the editor.
    Declined {
        /// The twin path that was opened but not created.
        twin: PathBuf,
    },
}

/// Result of making sure a twin exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Creation {
    /// The twin was already a file.
    Existing,
    /// The twin was scaffolded and written.
    Created,
    /// Creation was declined at the prompt.
    Declined,
}

/// Switches between files of one project.
pub struct Switcher<'a> {
    ctx: &'a ServiceContext,
    project_dir: &'a Path,
    snippets_dir: &'a Path,
}

impl<'a> Switcher<'a> {
    /// Creates a switcher for the project at `project_dir`.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, project_dir: &'a Path, snippets_dir: &'a Path) -> Self {
        Self { ctx, project_dir, snippets_dir }
    }

    /// The twin of `file`, probing the filesystem for the framework kind.
    #[must_use]
    pub fn twin_of(&self, file: &Path) -> Option<PathBuf> {
        twin_path(file, &MarkerProbe::new(self.ctx.fs.as_ref()))
    }

    /// Opens the twin of `file`, offering to create it first when missing.
    ///
    /// The twin is opened whether or not its creation was declined; only
    /// the write is skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt, snippet lookup, write or editor
    /// launch fails. Nothing is retried.
    pub fn go_to_twin(&self, file: &Path) -> Result<Outcome> {
        let Some(twin) = self.twin_of(file) else {
            info!(file = %file.display(), "no twin for file");
            return Ok(Outcome::NoTwin);
        };

        let creation = self.create_twin(&twin)?;

        self.ctx.opener.open(&twin).map_err(|e| Error::open(&twin, e))?;
        info!(twin = %twin.display(), ?creation, "opened twin");
        Ok(match creation {
            Creation::Existing => Outcome::Opened { twin, created: false },
            Creation::Created => Outcome::Opened { twin, created: true },
            Creation::Declined => Outcome::Declined { twin },
        })
    }

    /// Makes sure `twin` exists, asking before scaffolding it.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt cannot be shown, the spec snippet is
    /// missing, or the file cannot be written.
    pub fn create_twin(&self, twin: &Path) -> Result<Creation> {
        if self.ctx.fs.is_file(twin) {
            debug!(twin = %twin.display(), "twin exists");
            return Ok(Creation::Existing);
        }

        let classification = classify(twin);
        let relative = self.relative_to_project(twin);
        let confirmed = self
            .ctx
            .prompt
            .confirm(&relative.display().to_string(), &classification.label)
            .map_err(|e| Error::Prompt(e.to_string()))?;
        if !confirmed {
            info!(twin = %twin.display(), "creation declined");
            return Ok(Creation::Declined);
        }

        let templates = SnippetLibrary::new(self.ctx.fs.as_ref(), self.snippets_dir);
        let content = generate(&relative, classification.content_type, &templates)?;
        self.ctx.fs.write(twin, &content).map_err(|e| Error::write_failure(twin, e))?;
        info!(
            twin = %twin.display(),
            content_type = %classification.content_type,
            "created twin"
        );
        Ok(Creation::Created)
    }

    /// `path` relative to the project directory, or unchanged when it lies
    /// outside it.
    #[must_use]
    pub fn relative_to_project(&self, path: &Path) -> PathBuf {
        path.strip_prefix(self.project_dir).map_or_else(|_| path.to_path_buf(), Path::to_path_buf)
    }
}
