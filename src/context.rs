//! Service context bundling all port trait objects.

use std::path::Path;
use std::sync::Arc;

use crate::adapters::live::filesystem::LiveFileSystem;
use crate::adapters::live::opener::LiveOpener;
use crate::adapters::live::prompt::{DialogPrompt, TerminalPrompt};
use crate::adapters::recording::{RecordingFileSystem, RecordingOpener, RecordingPrompt};
use crate::adapters::replaying::{ReplayingFileSystem, ReplayingOpener, ReplayingPrompt};
use crate::cassette::config::CassetteConfig;
use crate::cassette::format::Invocation;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::config::Settings;
use crate::ports::filesystem::FileSystem;
use crate::ports::opener::Opener;
use crate::ports::prompt::Prompt;

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Constructors
/// wire up different adapter implementations (live, recording, replaying).
pub struct ServiceContext {
    /// Filesystem for probes, snippet reads and scaffold writes.
    pub fs: Box<dyn FileSystem>,
    /// Confirmation before a missing twin is created.
    pub prompt: Box<dyn Prompt>,
    /// Editor that receives the resolved twin.
    pub opener: Box<dyn Opener>,
}

impl ServiceContext {
    /// Creates a live context from the invocation settings.
    ///
    /// Confirmations go to the dialog command when one is configured and to
    /// the terminal otherwise.
    #[must_use]
    pub fn live(settings: &Settings) -> Self {
        Self {
            fs: Box::new(LiveFileSystem),
            prompt: live_prompt(settings),
            opener: Box::new(LiveOpener::new(settings.editor.as_str())),
        }
    }

    /// Creates a live context whose port traffic is recorded into a new
    /// session under `base`.
    ///
    /// Drop the context before calling [`RecordingSession::finish`].
    ///
    /// # Errors
    ///
    /// Returns an error if the session directory cannot be created.
    pub fn recording_at(
        base: &Path,
        settings: &Settings,
    ) -> Result<(Self, RecordingSession), String> {
        let invocation = Invocation {
            project_dir: settings.project_dir.clone(),
            file: settings.file.clone(),
        };
        let session = RecordingSession::new(base, &invocation)?;
        let ctx = Self {
            fs: Box::new(RecordingFileSystem::new(
                Box::new(LiveFileSystem),
                Arc::clone(&session.fs),
            )),
            prompt: Box::new(RecordingPrompt::new(live_prompt(settings), Arc::clone(&session.prompt))),
            opener: Box::new(RecordingOpener::new(
                Box::new(LiveOpener::new(settings.editor.as_str())),
                Arc::clone(&session.opener),
            )),
        };
        Ok((ctx, session))
    }

    /// Creates a replaying context from a monolithic cassette file.
    ///
    /// Every port reads its own interactions from the same cassette.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = CassetteConfig::load(path)?;
        Ok(Self {
            fs: Box::new(ReplayingFileSystem::new(CassetteReplayer::new(&cassette))),
            prompt: Box::new(ReplayingPrompt::new(CassetteReplayer::new(&cassette))),
            opener: Box::new(ReplayingOpener::new(CassetteReplayer::new(&cassette))),
        })
    }

    /// Creates a replaying context from per-port cassette files.
    ///
    /// Ports without a configured cassette panic with a clear message
    /// when called.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn replaying_from(config: &CassetteConfig) -> Result<Self, String> {
        let replayers = config.load_all()?;

        Ok(Self {
            fs: match replayers.fs {
                Some(r) => Box::new(ReplayingFileSystem::new(r)),
                None => Box::new(PanickingFileSystem),
            },
            prompt: match replayers.prompt {
                Some(r) => Box::new(ReplayingPrompt::new(r)),
                None => Box::new(PanickingPrompt),
            },
            opener: match replayers.opener {
                Some(r) => Box::new(ReplayingOpener::new(r)),
                None => Box::new(PanickingOpener),
            },
        })
    }
}

fn live_prompt(settings: &Settings) -> Box<dyn Prompt> {
    match &settings.dialog {
        Some(command) => Box::new(DialogPrompt::new(command.as_str())),
        None => Box::new(TerminalPrompt),
    }
}

// --- Panicking adapters for unspecified ports ---

struct PanickingFileSystem;
impl FileSystem for PanickingFileSystem {
    fn exists(&self, _path: &Path) -> bool {
        panic!("FileSystem port not configured in CassetteConfig: no cassette loaded for fs");
    }
    fn is_file(&self, _path: &Path) -> bool {
        panic!("FileSystem port not configured in CassetteConfig: no cassette loaded for fs");
    }
    fn read_to_string(
        &self,
        _path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        panic!("FileSystem port not configured in CassetteConfig: no cassette loaded for fs");
    }
    fn write(
        &self,
        _path: &Path,
        _contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        panic!("FileSystem port not configured in CassetteConfig: no cassette loaded for fs");
    }
}

struct PanickingPrompt;
impl Prompt for PanickingPrompt {
    fn confirm(
        &self,
        _relative_path: &str,
        _description: &str,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        panic!("Prompt port not configured in CassetteConfig: no cassette loaded for prompt");
    }
}

struct PanickingOpener;
impl Opener for PanickingOpener {
    fn open(&self, _path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        panic!("Opener port not configured in CassetteConfig: no cassette loaded for opener");
    }
}
