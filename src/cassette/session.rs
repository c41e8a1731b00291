//! Recording session writing one cassette per port.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::format::{Invocation, Port};
use super::recorder::CassetteRecorder;

/// Shared per-port recorders for one invocation.
///
/// Cassettes land in `<base>/<timestamp>/<port>.cassette.yaml`, which
/// [`super::config::CassetteConfig::from_session_dir`] reads back. Each one
/// carries the project directory and file the editor passed in.
pub struct RecordingSession {
    /// Recorder for filesystem interactions.
    pub fs: Arc<Mutex<CassetteRecorder>>,
    /// Recorder for confirmation prompts.
    pub prompt: Arc<Mutex<CassetteRecorder>>,
    /// Recorder for editor launches.
    pub opener: Arc<Mutex<CassetteRecorder>>,
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Creates a session in a fresh timestamped directory under `base`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory already exists or cannot be created.
    pub fn new(base: &Path, invocation: &Invocation) -> Result<Self, String> {
        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S%.3f").to_string();
        let output_dir = base.join(&timestamp);

        if output_dir.exists() {
            return Err(format!("Cassette directory already exists: {}", output_dir.display()));
        }
        std::fs::create_dir_all(&output_dir)
            .map_err(|e| format!("Failed to create cassette directory: {e}"))?;

        let make_recorder = |port: Port| {
            let recorder = CassetteRecorder::new(
                output_dir.join(port.cassette_file_name()),
                format!("{timestamp}-{port}"),
            )
            .with_invocation(invocation.clone());
            Arc::new(Mutex::new(recorder))
        };

        Ok(Self {
            fs: make_recorder(Port::Fs),
            prompt: make_recorder(Port::Prompt),
            opener: make_recorder(Port::Opener),
            output_dir,
        })
    }

    /// Directory the cassettes are written to.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes every port's cassette and returns the session directory.
    ///
    /// The recording adapters must have been dropped first.
    ///
    /// # Errors
    ///
    /// Returns an error if an adapter still holds a recorder or a cassette
    /// cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        fn finish_one(recorder: Arc<Mutex<CassetteRecorder>>, port: Port) -> Result<(), String> {
            let recorder = Arc::try_unwrap(recorder)
                .map_err(|_| format!("Recording adapter for {port} still has references"))?
                .into_inner()
                .map_err(|e| format!("Recorder lock for {port} poisoned: {e}"))?;
            recorder.finish().map_err(|e| format!("Failed to write {port} cassette: {e}"))?;
            Ok(())
        }

        finish_one(self.fs, Port::Fs)?;
        finish_one(self.prompt, Port::Prompt)?;
        finish_one(self.opener, Port::Opener)?;

        Ok(self.output_dir)
    }
}
