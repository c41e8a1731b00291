//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::config::{Settings, DEFAULT_EDITOR, DEFAULT_SNIPPETS_DIR};
use crate::logging::Verbosity;

/// Top-level CLI parser for `rspec-switch`.
#[derive(Debug, Parser)]
#[command(
    name = "rspec-switch",
    version,
    about = "Switch between Ruby sources and their RSpec specs"
)]
pub struct Cli {
    /// Options shared by every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Options the hosting editor supplies, mostly through its environment.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Top-level project directory.
    #[arg(long, env = "TM_PROJECT_DIRECTORY", global = true)]
    pub project_dir: Option<PathBuf>,

    /// File currently being edited.
    #[arg(long, env = "TM_FILEPATH", global = true)]
    pub file: Option<PathBuf>,

    /// Command that opens a file for editing.
    #[arg(long, env = "RSPEC_SWITCH_EDITOR", default_value = DEFAULT_EDITOR, global = true)]
    pub editor: String,

    /// Shell command asked to confirm file creation; receives the relative
    /// path and the question as `$1` and `$2`.
    #[arg(long, env = "RSPEC_SWITCH_DIALOG", global = true)]
    pub dialog: Option<String>,

    /// Directory holding `.tmSnippet` templates.
    #[arg(long, env = "RSPEC_SWITCH_SNIPPETS", default_value = DEFAULT_SNIPPETS_DIR, global = true)]
    pub snippets_dir: PathBuf,

    /// Record port interactions to cassettes under this directory.
    #[arg(long, env = "RSPEC_SWITCH_RECORD", global = true)]
    pub record: Option<PathBuf>,

    /// More diagnostics on stderr (repeatable).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Errors only.
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl GlobalArgs {
    /// Settings for this invocation.
    #[must_use]
    pub fn settings(&self) -> Settings {
        Settings {
            project_dir: self.project_dir.clone(),
            file: self.file.clone(),
            editor: self.editor.clone(),
            dialog: self.dialog.clone(),
            snippets_dir: self.snippets_dir.clone(),
            record_dir: self.record.clone(),
        }
    }

    /// Logging verbosity from `-v` and `-q`.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.verbose, self.quiet)
    }
}

/// Supported top-level subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Open the twin of the current file, offering to create it.
    Switch,
    /// Print the twin path of the current file.
    Twin,
    /// Print the content type and label of the current file.
    Classify,
    /// Print the skeleton a new file at the current path would get.
    Scaffold,
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn parses_switch_with_inputs() {
        let cli = Cli::parse_from([
            "rspec-switch",
            "switch",
            "--project-dir",
            "/proj",
            "--file",
            "/proj/lib/a.rb",
        ]);
        assert_eq!(cli.command, Command::Switch);
        let settings = cli.global.settings();
        assert_eq!(settings.project_dir, Some(PathBuf::from("/proj")));
        assert_eq!(settings.file, Some(PathBuf::from("/proj/lib/a.rb")));
    }

    #[test]
    fn global_options_work_before_the_subcommand() {
        let cli = Cli::parse_from(["rspec-switch", "--editor", "vim", "-vv", "twin"]);
        assert_eq!(cli.command, Command::Twin);
        assert_eq!(cli.global.editor, "vim");
        assert_eq!(cli.global.verbose, 2);
    }

    #[test]
    fn parses_remaining_subcommands() {
        assert_eq!(Cli::parse_from(["rspec-switch", "classify"]).command, Command::Classify);
        assert_eq!(Cli::parse_from(["rspec-switch", "scaffold"]).command, Command::Scaffold);
    }

    #[test]
    fn missing_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["rspec-switch"]).is_err());
    }
}
