//! Recording adapters that capture interactions to cassettes.

pub mod filesystem;
pub mod opener;
pub mod prompt;

pub use filesystem::RecordingFileSystem;
pub use opener::RecordingOpener;
pub use prompt::RecordingPrompt;

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::Port;

/// Records an interaction with a plain (non-`Result`) return value.
///
/// Mirror of `replaying::next_output`.
pub(crate) fn record_interaction<I, O>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: Port,
    method: &str,
    input: &I,
    output: &O,
) where
    I: Serialize,
    O: Serialize,
{
    let input_json = serde_json::to_value(input).expect("failed to serialize recording input");
    let output_json = serde_json::to_value(output).expect("failed to serialize recording output");

    let mut guard = recorder.lock().expect("recorder lock poisoned");
    guard.record(port, method, input_json, output_json);
}

/// Records a `Result<T, E>` interaction.
///
/// Mirror of `replaying::replay_result`: `Ok(v)` is stored as `{"ok": v}`
/// and `Err(e)` as `{"err": e.to_string()}`.
pub(crate) fn record_result<T, E, I>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: Port,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    T: Serialize,
    E: std::fmt::Display,
    I: Serialize,
{
    let output = match result {
        Ok(v) => {
            serde_json::json!({ "ok": serde_json::to_value(v).expect("failed to serialize Ok value") })
        }
        Err(e) => serde_json::json!({ "err": e.to_string() }),
    };
    record_interaction(recorder, port, method, input, &output);
}
