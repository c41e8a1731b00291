//! Framework detection from marker files under the project root.

use std::path::Path;

use tracing::debug;

use crate::ports::FileSystem;

/// Marker files that make a root rails-like, in probe order.
///
/// `config/boot.rb` marks Rails; `config/init.rb` marks the Merb variant.
pub const RAILS_LIKE_MARKERS: [&str; 2] = ["config/boot.rb", "config/init.rb"];

/// Directory convention of a project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameworkKind {
    /// Plain library: `lib/` ↔ `spec/`.
    PlainLib,
    /// Rails or Merb: `app/` ↔ `spec/`, `lib/` ↔ `spec/lib/`.
    RailsLike,
}

/// Decides which [`FrameworkKind`] a root directory follows.
pub trait FrameworkProbe {
    /// Returns the framework kind of the project rooted at `root`.
    fn kind_at(&self, root: &Path) -> FrameworkKind;
}

/// A fixed kind answers for every root.
impl FrameworkProbe for FrameworkKind {
    fn kind_at(&self, _root: &Path) -> FrameworkKind {
        *self
    }
}

/// Probes [`RAILS_LIKE_MARKERS`] through the filesystem port.
pub struct MarkerProbe<'a> {
    fs: &'a dyn FileSystem,
}

impl<'a> MarkerProbe<'a> {
    /// Creates a probe backed by `fs`.
    #[must_use]
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self { fs }
    }
}

impl FrameworkProbe for MarkerProbe<'_> {
    fn kind_at(&self, root: &Path) -> FrameworkKind {
        for marker in RAILS_LIKE_MARKERS {
            let candidate = root.join(marker);
            if self.fs.exists(&candidate) {
                debug!(marker = %candidate.display(), "rails-like root");
                return FrameworkKind::RailsLike;
            }
        }
        debug!(root = %root.display(), "plain library root");
        FrameworkKind::PlainLib
    }
}
