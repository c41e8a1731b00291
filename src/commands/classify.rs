//! `rspec-switch classify` command.

use crate::classify::classify;
use crate::config::Settings;
use crate::error::Result;

/// `<content-type>\t<label>` for the current file.
///
/// # Errors
///
/// Returns an error if no file was supplied.
pub fn describe(settings: &Settings) -> Result<String> {
    let classification = classify(settings.require_file()?);
    Ok(format!("{}\t{}", classification.content_type, classification.label))
}

/// Execute the `classify` command.
///
/// # Errors
///
/// Returns an error if no file was supplied.
pub fn run(settings: &Settings) -> Result<()> {
    println!("{}", describe(settings)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn describe_file(file: &str) -> String {
        describe(&Settings { file: Some(PathBuf::from(file)), ..Settings::default() }).unwrap()
    }

    #[test]
    fn describes_app_and_spec_files() {
        assert_eq!(describe_file("/p/app/models/user.rb"), "model\tuser");
        assert_eq!(describe_file("/p/spec/models/user_spec.rb"), "spec\tuser_spec spec");
        assert_eq!(describe_file("/p/lib/foo.rb"), "file\tfile");
    }
}
