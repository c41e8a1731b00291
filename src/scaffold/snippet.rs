//! Snippet templates read from TextMate `.tmSnippet` plists.

use std::path::PathBuf;

use tracing::debug;

use crate::error::{Error, Result};
use crate::ports::FileSystem;

/// Looks up named snippet bodies.
pub trait TemplateLookup {
    /// Returns the body of the snippet called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateMissing`] if the snippet does not exist or
    /// has no content.
    fn read_snippet(&self, name: &str) -> Result<String>;
}

/// Snippets stored as plist files in one directory.
pub struct SnippetLibrary<'a> {
    fs: &'a dyn FileSystem,
    dir: PathBuf,
}

impl<'a> SnippetLibrary<'a> {
    /// Creates a library reading `<dir>/<name>` through `fs`.
    pub fn new(fs: &'a dyn FileSystem, dir: impl Into<PathBuf>) -> Self {
        Self { fs, dir: dir.into() }
    }
}

impl TemplateLookup for SnippetLibrary<'_> {
    fn read_snippet(&self, name: &str) -> Result<String> {
        let path = self.dir.join(name);
        debug!(snippet = %path.display(), "reading snippet");
        let plist = self
            .fs
            .read_to_string(&path)
            .map_err(|e| Error::template_missing(name, format!("{}: {e}", path.display())))?;
        extract_content(&plist)
            .ok_or_else(|| Error::template_missing(name, "no <key>content</key> string"))
    }
}

/// Extracts the `<string>` that follows `<key>content</key>`, decoding the
/// predefined XML entities.
#[must_use]
pub fn extract_content(plist: &str) -> Option<String> {
    let (_, after_key) = plist.split_once("<key>content</key>")?;
    let body = after_key.trim_start().strip_prefix("<string>")?;
    let (raw, _) = body.split_once("</string>")?;
    if raw.contains('<') {
        return None;
    }
    Some(decode_entities(raw))
}

fn decode_entities(raw: &str) -> String {
    raw.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
