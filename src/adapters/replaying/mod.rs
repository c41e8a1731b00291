//! Replaying adapters that serve recorded interactions.

pub mod filesystem;
pub mod opener;
pub mod prompt;

pub use filesystem::ReplayingFileSystem;
pub use opener::ReplayingOpener;
pub use prompt::ReplayingPrompt;

use std::sync::Mutex;

use serde::de::DeserializeOwned;

use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::Port;

/// Takes the output of the next recorded `port`/`method` interaction.
///
/// Mirror of `recording::record_interaction`.
pub(crate) fn next_output(
    replayer: &Mutex<CassetteReplayer>,
    port: Port,
    method: &str,
) -> serde_json::Value {
    let mut replayer = replayer.lock().expect("replayer lock poisoned");
    replayer.next_interaction(port, method).output
}

/// Rebuilds a `Result` from `{"ok": v}` / `{"err": "message"}`.
///
/// Mirror of `recording::record_result`.
pub(crate) fn replay_result<T: DeserializeOwned>(
    output: serde_json::Value,
    context: &str,
) -> Result<T, Box<dyn std::error::Error + Send + Sync>> {
    if let Some(err) = output.get("err") {
        return Err(err.as_str().unwrap_or("unknown error").to_string().into());
    }
    let value = output.get("ok").cloned().unwrap_or(output);
    serde_json::from_value(value).map_err(|e| format!("{context}: failed to deserialize: {e}").into())
}
