//! Accumulates port interactions and writes them out as a YAML cassette.

use std::path::PathBuf;

use chrono::{DateTime, Utc};

use super::format::{Cassette, Interaction, Invocation, Port};

/// Collects interactions in call order for one cassette file.
#[derive(Debug)]
pub struct CassetteRecorder {
    path: PathBuf,
    name: String,
    invocation: Invocation,
    started_at: DateTime<Utc>,
    interactions: Vec<Interaction>,
}

impl CassetteRecorder {
    /// Starts a recording that [`finish`](Self::finish) writes to `path`.
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            invocation: Invocation::default(),
            started_at: Utc::now(),
            interactions: Vec::new(),
        }
    }

    /// Notes the editor inputs the recording is made under.
    #[must_use]
    pub fn with_invocation(mut self, invocation: Invocation) -> Self {
        self.invocation = invocation;
        self
    }

    /// Appends an interaction; its `seq` is its position in the recording.
    pub fn record(
        &mut self,
        port: Port,
        method: &str,
        input: serde_json::Value,
        output: serde_json::Value,
    ) {
        let seq = self.interactions.len() as u64;
        self.interactions.push(Interaction { seq, port, method: method.to_string(), input, output });
    }

    /// Number of interactions recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.interactions.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.interactions.is_empty()
    }

    /// Writes the cassette, creating its directory if needed, and returns its path.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn finish(self) -> Result<PathBuf, std::io::Error> {
        let cassette = Cassette {
            name: self.name,
            recorded_at: self.started_at,
            invocation: self.invocation,
            interactions: self.interactions,
        };
        let yaml = serde_yaml::to_string(&cassette).map_err(std::io::Error::other)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, yaml)?;
        Ok(self.path)
    }
}
