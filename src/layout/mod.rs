//! Path translation between implementation files and their specs.
//!
//! A path is split at the first `lib`, `app` or `spec` segment into a
//! [`SplitPath`]. The segments before it locate the project root, which is
//! probed for its [`FrameworkKind`]; the segments after it are carried over
//! to the twin with the suffix map applied to the file name.
//!
//! ```text
//! plain library   <root>/lib/foo/bar.rb        <->  <root>/spec/foo/bar_spec.rb
//! rails-like      <root>/app/models/widget.rb  <->  <root>/spec/models/widget_spec.rb
//! rails-like      <root>/lib/tasks/sync.rb     <->  <root>/spec/lib/tasks/sync_spec.rb
//! ```

pub mod framework;
pub mod suffix;

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

pub use framework::{FrameworkKind, FrameworkProbe, MarkerProbe};

/// The directory segment a path was split at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Root {
    /// `lib/`
    Lib,
    /// `app/`
    App,
    /// `spec/`
    Spec,
}

impl Root {
    /// Recognises a single path segment.
    #[must_use]
    pub fn from_segment(segment: &OsStr) -> Option<Self> {
        match segment.to_str()? {
            "lib" => Some(Self::Lib),
            "app" => Some(Self::App),
            "spec" => Some(Self::Spec),
            _ => None,
        }
    }

    /// The segment as written on disk.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lib => "lib",
            Self::App => "app",
            Self::Spec => "spec",
        }
    }
}

/// A path split at its first `lib`/`app`/`spec` segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitPath {
    /// Segments before the root marker; the project root.
    pub prefix: PathBuf,
    /// The marker segment itself.
    pub root: Root,
    /// Segments after the marker. Never empty.
    pub rest: PathBuf,
}

impl SplitPath {
    /// Splits `path` at the first segment that is `lib`, `app` or `spec`.
    ///
    /// Returns `None` if there is no such segment, or if it is the last one.
    #[must_use]
    pub fn parse(path: &Path) -> Option<Self> {
        let mut prefix = PathBuf::new();
        let mut components = path.components();

        while let Some(component) = components.next() {
            if let Component::Normal(segment) = component {
                if let Some(root) = Root::from_segment(segment) {
                    let rest = components.as_path().to_path_buf();
                    if rest.as_os_str().is_empty() {
                        return None;
                    }
                    return Some(Self { prefix, root, rest });
                }
            }
            prefix.push(component);
        }

        None
    }

    /// Rebuilds the original path.
    #[must_use]
    pub fn to_path(&self) -> PathBuf {
        self.prefix.join(self.root.as_str()).join(&self.rest)
    }

    /// Twin of a `lib/` or `app/` path: the spec that covers it.
    #[must_use]
    pub fn to_spec_side(&self, kind: FrameworkKind) -> PathBuf {
        let mut twin = self.prefix.join(Root::Spec.as_str());
        if kind == FrameworkKind::RailsLike && self.root == Root::Lib {
            twin.push(Root::Lib.as_str());
        }
        twin.push(suffix::to_spec(&self.rest));
        twin
    }

    /// Twin of a `spec/` path: the file it covers.
    #[must_use]
    pub fn to_source_side(&self, kind: FrameworkKind) -> PathBuf {
        let rest = suffix::to_source(&self.rest);
        match kind {
            FrameworkKind::RailsLike => match rest.strip_prefix(Root::Lib.as_str()) {
                Ok(inside_lib) => self.prefix.join(Root::Lib.as_str()).join(inside_lib),
                Err(_) => self.prefix.join(Root::App.as_str()).join(&rest),
            },
            FrameworkKind::PlainLib => self.prefix.join(Root::Lib.as_str()).join(&rest),
        }
    }
}

/// Computes the twin of `path`, or `None` when it does not live under
/// `lib`, `app` or `spec`.
#[must_use]
pub fn twin_path(path: &Path, probe: &dyn FrameworkProbe) -> Option<PathBuf> {
    let Some(split) = SplitPath::parse(path) else {
        debug!(path = %path.display(), "no lib/app/spec segment");
        return None;
    };

    let kind = probe.kind_at(&split.prefix);
    let twin = match split.root {
        Root::Lib | Root::App => split.to_spec_side(kind),
        Root::Spec => split.to_source_side(kind),
    };

    debug!(path = %path.display(), twin = %twin.display(), ?kind, "twin computed");
    Some(twin)
}
