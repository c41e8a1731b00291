//! On-disk cassette schema.
//!
//! ```yaml
//! name: 2025-03-15T14-30-00.000-fs
//! recorded_at: 2025-03-15T14:30:00Z
//! invocation:
//!   project_dir: /work/shop
//!   file: /work/shop/app/models/widget.rb
//! interactions:
//! - seq: 0
//!   port: fs
//!   method: exists
//!   input: { path: /work/shop/config/boot.rb }
//!   output: true
//! ```

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The boundary an interaction crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Port {
    /// Marker probes, twin checks, snippet reads and scaffold writes.
    Fs,
    /// Create-missing-file confirmations.
    Prompt,
    /// Editor launches.
    Opener,
}

impl Port {
    /// Every port, in the order a session writes them.
    pub const ALL: [Self; 3] = [Self::Fs, Self::Prompt, Self::Opener];

    /// Name used in cassettes and cassette file names.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fs => "fs",
            Self::Prompt => "prompt",
            Self::Opener => "opener",
        }
    }

    /// `<port>.cassette.yaml`
    #[must_use]
    pub fn cassette_file_name(self) -> String {
        format!("{}.cassette.yaml", self.as_str())
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One call through a port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Position within the cassette.
    pub seq: u64,
    /// Port called.
    pub port: Port,
    /// Trait method called.
    pub method: String,
    /// Arguments, as JSON.
    pub input: serde_json::Value,
    /// Return value; `Result`s use `{"ok": v}` / `{"err": msg}`.
    pub output: serde_json::Value,
}

/// The editor inputs a recording was made under.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Invocation {
    /// Project directory, if one was supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_dir: Option<PathBuf>,
    /// Current file, if one was supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// A recorded run of one or more ports.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Label for this cassette.
    pub name: String,
    /// When recording started.
    pub recorded_at: DateTime<Utc>,
    /// Inputs of the recorded invocation. Hand-built cassettes may omit it.
    #[serde(default)]
    pub invocation: Invocation,
    /// Calls in recording order.
    pub interactions: Vec<Interaction>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ports_serialize_lowercase() {
        let interaction = Interaction {
            seq: 3,
            port: Port::Opener,
            method: "open".into(),
            input: json!({"path": "/proj/spec/a_spec.rb"}),
            output: json!({"ok": null}),
        };
        let yaml = serde_yaml::to_string(&interaction).unwrap();
        assert!(yaml.contains("port: opener"), "{yaml}");
        assert_eq!(Port::Prompt.cassette_file_name(), "prompt.cassette.yaml");
    }

    #[test]
    fn invocation_is_optional_when_reading() {
        let yaml = "name: hand-built\nrecorded_at: 2025-03-15T14:30:00Z\ninteractions:\n- seq: 0\n  port: fs\n  method: is_file\n  input: {}\n  output: false\n";
        let cassette: Cassette = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cassette.invocation, Invocation::default());
        assert_eq!(cassette.interactions[0].port, Port::Fs);
    }

    #[test]
    fn unknown_port_is_rejected() {
        let yaml = "name: x\nrecorded_at: 2025-03-15T14:30:00Z\ninteractions:\n- seq: 0\n  port: clock\n  method: now\n  input: {}\n  output: null\n";
        assert!(serde_yaml::from_str::<Cassette>(yaml).is_err());
    }

    #[test]
    fn invocation_survives_a_write_and_read() {
        let cassette = Cassette {
            name: "switch".into(),
            recorded_at: Utc::now(),
            invocation: Invocation {
                project_dir: Some("/work/shop".into()),
                file: Some("/work/shop/app/models/widget.rb".into()),
            },
            interactions: vec![],
        };
        let yaml = serde_yaml::to_string(&cassette).unwrap();
        assert_eq!(serde_yaml::from_str::<Cassette>(&yaml).unwrap(), cassette);
    }
}
