//! `rspec-switch twin` command.

use std::path::PathBuf;

use crate::config::Settings;
use crate::context::ServiceContext;
use crate::error::Result;
use crate::layout::{twin_path, MarkerProbe};

/// The twin of the current file, if it has one.
///
/// # Errors
///
/// Returns an error if no file was supplied.
pub fn twin(ctx: &ServiceContext, settings: &Settings) -> Result<Option<PathBuf>> {
    let file = settings.require_file()?;
    Ok(twin_path(file, &MarkerProbe::new(ctx.fs.as_ref())))
}

/// Execute the `twin` command. Prints nothing when there is no twin.
///
/// # Errors
///
/// Returns an error if no file was supplied.
pub fn run(ctx: &ServiceContext, settings: &Settings) -> Result<()> {
    if let Some(path) = twin(ctx, settings)? {
        println!("{}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_for(file: PathBuf) -> Settings {
        Settings { file: Some(file), ..Settings::default() }
    }

    #[test]
    fn rails_project_maps_lib_under_spec_lib() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("config")).unwrap();
        std::fs::write(dir.path().join("config/boot.rb"), "").unwrap();

        let settings = settings_for(dir.path().join("lib/tasks/sync.rb"));
        let ctx = ServiceContext::live(&settings);
        assert_eq!(
            twin(&ctx, &settings).unwrap(),
            Some(dir.path().join("spec/lib/tasks/sync_spec.rb"))
        );
    }

    #[test]
    fn plain_project_maps_lib_to_spec() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_for(dir.path().join("lib/foo/bar.rb"));
        let ctx = ServiceContext::live(&settings);
        assert_eq!(twin(&ctx, &settings).unwrap(), Some(dir.path().join("spec/foo/bar_spec.rb")));
    }

    #[test]
    fn unrelated_path_has_no_twin() {
        let settings = settings_for(PathBuf::from("/tmp/notes.txt"));
        let ctx = ServiceContext::live(&settings);
        assert_eq!(twin(&ctx, &settings).unwrap(), None);
        assert!(run(&ctx, &settings).is_ok());
    }
}
