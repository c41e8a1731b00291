//! Replaying adapter for the `Opener` port.

use std::path::Path;
use std::sync::Mutex;

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::Port;
use crate::ports::opener::Opener;

/// Replays recorded editor launches.
pub struct ReplayingOpener {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingOpener {
    /// Creates a new replaying opener from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl Opener for ReplayingOpener {
    fn open(&self, _path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        replay_result(next_output(&self.replayer, Port::Opener, "open"), "opener::open")
    }
}
