//! Per-port cassette configuration for replay.

use std::path::{Path, PathBuf};

use super::format::{Cassette, Port};
use super::replayer::CassetteReplayer;

/// Cassette file for each port. Ports left as `None` panic when called
/// during replay.
#[derive(Debug, Clone, Default)]
pub struct CassetteConfig {
    /// Filesystem port cassette.
    pub fs: Option<PathBuf>,
    /// Confirmation prompt cassette.
    pub prompt: Option<PathBuf>,
    /// Editor opener cassette.
    pub opener: Option<PathBuf>,
}

/// Loaded replayers, one per configured port.
pub struct PortReplayers {
    /// Replayer for the filesystem port.
    pub fs: Option<CassetteReplayer>,
    /// Replayer for the prompt port.
    pub prompt: Option<CassetteReplayer>,
    /// Replayer for the opener port.
    pub opener: Option<CassetteReplayer>,
}

impl CassetteConfig {
    /// Uses the `<port>.cassette.yaml` files a recording session leaves in
    /// `dir`, skipping any that are absent.
    #[must_use]
    pub fn from_session_dir(dir: &Path) -> Self {
        let existing = |port: Port| {
            let path = dir.join(port.cassette_file_name());
            path.is_file().then_some(path)
        };
        Self {
            fs: existing(Port::Fs),
            prompt: existing(Port::Prompt),
            opener: existing(Port::Opener),
        }
    }

    /// Reads and parses one cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Cassette, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))
    }

    /// Loads every configured cassette into its own replayer.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn load_all(&self) -> Result<PortReplayers, String> {
        let replayer = |path: &Option<PathBuf>| -> Result<Option<CassetteReplayer>, String> {
            path.as_deref().map(|p| Self::load(p).map(|c| CassetteReplayer::new(&c))).transpose()
        };
        Ok(PortReplayers {
            fs: replayer(&self.fs)?,
            prompt: replayer(&self.prompt)?,
            opener: replayer(&self.opener)?,
        })
    }
}
