//! Replaying adapter for the `FileSystem` port.

use std::path::Path;
use std::sync::Mutex;

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::Port;
use crate::ports::filesystem::FileSystem;

/// Replays recorded filesystem operations from a cassette.
pub struct ReplayingFileSystem {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingFileSystem {
    /// Creates a new replaying filesystem from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }

    fn flag(&self, method: &str) -> bool {
        next_output(&self.replayer, Port::Fs, method)
            .as_bool()
            .unwrap_or_else(|| panic!("fs::{method}: expected boolean output"))
    }
}

impl FileSystem for ReplayingFileSystem {
    fn exists(&self, _path: &Path) -> bool {
        self.flag("exists")
    }

    fn is_file(&self, _path: &Path) -> bool {
        self.flag("is_file")
    }

    fn read_to_string(
        &self,
        _path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        replay_result(next_output(&self.replayer, Port::Fs, "read_to_string"), "fs::read_to_string")
    }

    fn write(
        &self,
        _path: &Path,
        _contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        replay_result(next_output(&self.replayer, Port::Fs, "write"), "fs::write")
    }
}
