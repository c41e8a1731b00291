//! Editor port for opening the resolved twin.

use std::path::Path;

/// Hands a path over to the editor.
pub trait Opener: Send + Sync {
    /// Opens `path` for editing. Does not wait for the editor to exit.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor process cannot be started.
    fn open(&self, path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
