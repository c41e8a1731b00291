//! Recording adapter for the `Opener` port.

use std::path::Path;
use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::Port;
use crate::ports::Opener;

/// Records editor launches while delegating to an inner opener.
pub struct RecordingOpener {
    inner: Box<dyn Opener>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingOpener {
    /// Creates a new recording opener wrapping the given implementation.
    pub fn new(inner: Box<dyn Opener>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct OpenInput {
    path: String,
}

impl Opener for RecordingOpener {
    fn open(&self, path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.open(path);
        let input = OpenInput { path: path.display().to_string() };
        record_result(&self.recorder, Port::Opener, "open", &input, &result);
        result
    }
}
