//! `rspec-switch scaffold` command.

use crate::classify::classify;
use crate::config::Settings;
use crate::context::ServiceContext;
use crate::error::Result;
use crate::scaffold::{generate, SnippetLibrary};

/// The skeleton a new file at the current path would receive.
///
/// The path is taken relative to the project directory when one is set.
///
/// # Errors
///
/// Returns an error if no file was supplied or the spec snippet is missing.
pub fn render(ctx: &ServiceContext, settings: &Settings) -> Result<String> {
    let file = settings.require_file()?;
    let relative = settings
        .project_dir
        .as_deref()
        .and_then(|dir| file.strip_prefix(dir).ok())
        .unwrap_or(file);
    let templates = SnippetLibrary::new(ctx.fs.as_ref(), &settings.snippets_dir);
    generate(relative, classify(file).content_type, &templates)
}

/// Execute the `scaffold` command.
///
/// # Errors
///
/// Returns an error if no file was supplied or the spec snippet is missing.
pub fn run(ctx: &ServiceContext, settings: &Settings) -> Result<()> {
    print!("{}", render(ctx, settings)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn render_for(project_dir: Option<&str>, file: &str) -> String {
        let settings = Settings {
            project_dir: project_dir.map(PathBuf::from),
            file: Some(PathBuf::from(file)),
            ..Settings::default()
        };
        render(&ServiceContext::live(&settings), &settings).unwrap()
    }

    #[test]
    fn library_file_nests_below_lib() {
        assert_eq!(
            render_for(Some("/work/lib/proj"), "/work/lib/proj/lib/net/http_client.rb"),
            "module Net\n  class HttpClient\n  end\nend\n"
        );
    }

    #[test]
    fn controller_gets_base_class() {
        assert_eq!(
            render_for(None, "/p/app/controllers/users_controller.rb"),
            "class UsersController < ApplicationController\nend\n"
        );
    }

    #[test]
    fn spec_uses_bundled_snippet() {
        assert_eq!(
            render_for(Some("/p"), "/p/spec/models/user_spec.rb"),
            "require 'spec_helper'\n\ndescribe ${1:Type} do\n  $0\nend\n"
        );
    }
}
