//! Recording adapter for the `Prompt` port.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::Port;
use crate::ports::Prompt;

/// Records confirmation answers while delegating to an inner prompt.
pub struct RecordingPrompt {
    inner: Box<dyn Prompt>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingPrompt {
    /// Creates a new recording prompt wrapping the given implementation.
    pub fn new(inner: Box<dyn Prompt>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct ConfirmInput<'a> {
    relative_path: &'a str,
    description: &'a str,
}

impl Prompt for RecordingPrompt {
    fn confirm(
        &self,
        relative_path: &str,
        description: &str,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.confirm(relative_path, description);
        let input = ConfirmInput { relative_path, description };
        record_result(&self.recorder, Port::Prompt, "confirm", &input, &result);
        result
    }
}
