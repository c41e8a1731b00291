//! Classifies a path into the kind of scaffold it should receive.

use std::fmt;
use std::path::{Component, Path};

/// The kind of content a new file gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// `app/controllers/**`
    Controller,
    /// `app/models/**`
    Model,
    /// `app/helpers/**`
    Helper,
    /// `app/views/**`
    View,
    /// Any spec file.
    Spec,
    /// Anything else, scaffolded as nested modules and a class.
    File,
}

impl ContentType {
    fn from_app_dir(dir: &str) -> Option<Self> {
        match dir {
            "controllers" => Some(Self::Controller),
            "models" => Some(Self::Model),
            "helpers" => Some(Self::Helper),
            "views" => Some(Self::View),
            _ => None,
        }
    }

    /// Lowercase name used on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Controller => "controller",
            Self::Model => "model",
            Self::Helper => "helper",
            Self::View => "view",
            Self::Spec => "spec",
            Self::File => "file",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A content type plus the label shown when asking to create the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// What to generate.
    pub content_type: ContentType,
    /// Human-readable description, e.g. `widgets_controller` or `widget_spec spec`.
    pub label: String,
}

/// Classifies `path`.
///
/// In priority order: a file under `spec/<dir>/`, a file under `app/<dir>/`
/// (where `<dir>` is `controllers`, `helpers`, `models` or `views`), any
/// `*_spec.rb`, and finally a plain file.
#[must_use]
pub fn classify(path: &Path) -> Classification {
    let segments: Vec<String> = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if let Some((_, rest)) = under_framework_dir(&segments, "spec") {
        return Classification {
            content_type: ContentType::Spec,
            label: format!("{} spec", strip_extension(&rest)),
        };
    }

    if let Some((content_type, rest)) = under_framework_dir(&segments, "app") {
        return Classification { content_type, label: strip_extension(&rest).to_string() };
    }

    let is_spec_file = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with("_spec.rb"));
    if is_spec_file {
        return Classification { content_type: ContentType::Spec, label: "spec".to_string() };
    }

    Classification { content_type: ContentType::File, label: "file".to_string() }
}

/// Finds the first `<marker>/<dir>/<rest>` run where `<dir>` is one of the
/// framework directories, returning the directory's type and `<rest>`.
fn under_framework_dir(segments: &[String], marker: &str) -> Option<(ContentType, String)> {
    segments.windows(3).enumerate().find_map(|(i, window)| {
        if window[0] != marker {
            return None;
        }
        let content_type = ContentType::from_app_dir(&window[1])?;
        Some((content_type, segments[i + 2..].join("/")))
    })
}

/// Drops the final extension of the last segment: `a/show.html.erb` → `a/show.html`.
fn strip_extension(rest: &str) -> &str {
    let file_start = rest.rfind('/').map_or(0, |i| i + 1);
    match rest[file_start..].rfind('.') {
        Some(dot) if dot > 0 => &rest[..file_start + dot],
        _ => rest,
    }
}
