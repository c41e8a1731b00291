//! Extension ↔ spec-suffix mapping.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// One entry of the suffix map: a source extension and the suffix its
/// spec file carries instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixRule {
    /// Extension of the implementation file, including the dot.
    pub source: &'static str,
    /// Suffix of the matching spec file.
    pub spec: &'static str,
}

/// The fixed suffix map, most specific spec suffix first.
///
/// `_spec.rb` is a suffix of every other spec suffix, so it has to stay last
/// or `x.erb_spec.rb` would come back as `x.erb.rb`.
pub const SUFFIX_MAP: [SuffixRule; 6] = [
    SuffixRule { source: ".rjs", spec: ".rjs_spec.rb" },
    SuffixRule { source: ".rhtml", spec: ".rhtml_spec.rb" },
    SuffixRule { source: ".erb", spec: ".erb_spec.rb" },
    SuffixRule { source: ".haml", spec: ".haml_spec.rb" },
    SuffixRule { source: ".slim", spec: ".slim_spec.rb" },
    SuffixRule { source: ".rb", spec: "_spec.rb" },
];

/// Maps a source file name to its spec file name, e.g. `bar.rb` → `bar_spec.rb`.
///
/// Returns `None` when the extension is not in [`SUFFIX_MAP`].
#[must_use]
pub fn spec_file_name(file_name: &str) -> Option<String> {
    SUFFIX_MAP.iter().find_map(|rule| {
        file_name
            .strip_suffix(rule.source)
            .filter(|stem| !stem.is_empty())
            .map(|stem| format!("{stem}{}", rule.spec))
    })
}

/// Maps a spec file name back to its source file name, e.g.
/// `show.erb_spec.rb` → `show.erb`.
///
/// Returns `None` when the name carries no known spec suffix.
#[must_use]
pub fn source_file_name(file_name: &str) -> Option<String> {
    SUFFIX_MAP.iter().find_map(|rule| {
        file_name
            .strip_suffix(rule.spec)
            .filter(|stem| !stem.is_empty())
            .map(|stem| format!("{stem}{}", rule.source))
    })
}

/// Applies [`spec_file_name`] to the last segment of `path`.
#[must_use]
pub fn to_spec(path: &Path) -> PathBuf {
    rename_file(path, spec_file_name)
}

/// Applies [`source_file_name`] to the last segment of `path`.
#[must_use]
pub fn to_source(path: &Path) -> PathBuf {
    rename_file(path, source_file_name)
}

fn rename_file(path: &Path, rename: fn(&str) -> Option<String>) -> PathBuf {
    match path.file_name().and_then(OsStr::to_str).and_then(rename) {
        Some(name) => path.with_file_name(name),
        None => path.to_path_buf(),
    }
}
