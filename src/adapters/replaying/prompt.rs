//! Replaying adapter for the `Prompt` port.

use std::sync::Mutex;

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::Port;
use crate::ports::prompt::Prompt;

/// Replays recorded confirmation answers.
pub struct ReplayingPrompt {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingPrompt {
    /// Creates a new replaying prompt from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl Prompt for ReplayingPrompt {
    fn confirm(
        &self,
        _relative_path: &str,
        _description: &str,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        replay_result(next_output(&self.replayer, Port::Prompt, "confirm"), "prompt::confirm")
    }
}
