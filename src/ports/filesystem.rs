//! Filesystem port for existence probes and file I/O.

use std::path::Path;

/// Provides filesystem access for probing, reading and writing files.
///
/// Framework marker probes, twin existence checks, snippet reads and
/// scaffold writes all go through this trait so they can be recorded and
/// replayed without touching the real disk.
pub trait FileSystem: Send + Sync {
    /// Returns `true` if the path exists on the filesystem.
    fn exists(&self, path: &Path) -> bool;

    /// Returns `true` if the path exists and is a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Reads the entire contents of a file as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or is not valid UTF-8.
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;

    /// Writes the given contents to a file, creating parent directories
    /// as needed and overwriting any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be created or the write fails.
    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
