//! Live editor adapter.

use std::path::Path;
use std::process::Command;

use crate::ports::opener::Opener;

/// Opens files with an editor command, e.g. `mate` or `code -r`.
pub struct LiveOpener {
    editor: String,
}

impl LiveOpener {
    /// Creates an opener running `editor "<path>"`.
    pub fn new(editor: impl Into<String>) -> Self {
        Self { editor: editor.into() }
    }
}

impl Opener for LiveOpener {
    fn open(&self, path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        // Backgrounded inside sh so the editor outlives us without being waited on.
        let script = format!("{} \"$1\" >/dev/null 2>&1 &", self.editor);
        let status = Command::new("sh").arg("-c").arg(script).arg("rspec-switch").arg(path).status()?;
        if status.success() {
            Ok(())
        } else {
            Err(format!("editor launcher exited with {status}").into())
        }
    }
}
