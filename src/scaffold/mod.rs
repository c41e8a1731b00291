//! Skeleton content for newly created twins.

pub mod naming;
pub mod snippet;

use std::path::{Component, Path};

use crate::classify::ContentType;
use crate::error::Result;

pub use naming::constant_name;
pub use snippet::{SnippetLibrary, TemplateLookup};

/// Snippet whose body follows `require 'spec_helper'` in new specs.
pub const SPEC_SNIPPET: &str = "Describe_type.tmSnippet";

/// Base class of generated controllers.
pub const CONTROLLER_BASE: &str = "ApplicationController";

/// Base class of generated models.
pub const MODEL_BASE: &str = "ActiveRecord::Base";

/// Generates the initial content for `path` (relative to the project root).
///
/// # Errors
///
/// Returns [`crate::error::Error::TemplateMissing`] when a spec is requested
/// and the spec snippet cannot be read.
pub fn generate(
    path: &Path,
    content_type: ContentType,
    templates: &dyn TemplateLookup,
) -> Result<String> {
    let content = match content_type {
        ContentType::Spec => {
            let body = templates.read_snippet(SPEC_SNIPPET)?;
            format!("require 'spec_helper'\n\n{body}\n")
        }
        ContentType::Controller => {
            format!("class {} < {CONTROLLER_BASE}\nend\n", file_constant(path))
        }
        ContentType::Model => format!("class {} < {MODEL_BASE}\nend\n", file_constant(path)),
        ContentType::Helper => format!("module {}\nend\n", file_constant(path)),
        ContentType::View => String::new(),
        ContentType::File => nested_declarations(path),
    };
    Ok(content)
}

fn file_constant(path: &Path) -> String {
    path.file_name().map(|name| constant_name(&name.to_string_lossy())).unwrap_or_default()
}

/// One `module` per directory below `lib/` and a `class` for the `.rb`
/// file, each nested one level deeper than the last.
///
/// Without a `lib` segment every segment of `path` is used.
fn nested_declarations(path: &Path) -> String {
    let segments: Vec<String> = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    let start = segments.iter().position(|s| s == "lib").map_or(0, |i| i + 1);
    let nested = &segments[start..];

    let mut opening = Vec::with_capacity(nested.len());
    let mut closing = Vec::with_capacity(nested.len());
    for (depth, segment) in nested.iter().enumerate() {
        let indent = "  ".repeat(depth);
        let keyword = if segment.ends_with(".rb") { "class" } else { "module" };
        opening.push(format!("{indent}{keyword} {}", constant_name(segment)));
        closing.push(format!("{indent}end"));
    }

    if opening.is_empty() {
        return String::new();
    }

    closing.reverse();
    let mut lines = opening;
    lines.extend(closing);
    lines.join("\n") + "\n"
}
