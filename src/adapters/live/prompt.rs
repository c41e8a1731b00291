//! Live confirmation prompts: an external dialog command or the terminal.

use std::io::{self, BufRead, Write};
use std::process::Command;

use crate::ports::prompt::Prompt;

/// Returns `true` for `1`, `y` or `yes` (any case, surrounding whitespace ignored).
#[must_use]
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "1" | "y" | "yes")
}

fn question(description: &str) -> String {
    format!("Create missing {description}?")
}

/// Runs a dialog command through `sh -c`.
///
/// The command sees the relative path as `$1` and the question as `$2`, and
/// answers on stdout, e.g.
/// `CocoaDialog yesno-msgbox --no-cancel --informative-text "$1" --text "$2"`
/// prints `1` for yes.
pub struct DialogPrompt {
    command: String,
}

impl DialogPrompt {
    /// Creates a prompt around `command`.
    pub fn new(command: impl Into<String>) -> Self {
        Self { command: command.into() }
    }
}

impl Prompt for DialogPrompt {
    fn confirm(
        &self,
        relative_path: &str,
        description: &str,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        let output = Command::new("sh")
            .arg("-c")
            .arg(&self.command)
            .arg("rspec-switch")
            .arg(relative_path)
            .arg(question(description))
            .output()?;
        Ok(is_affirmative(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Asks on stderr and reads the answer from stdin.
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn confirm(
        &self,
        relative_path: &str,
        description: &str,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        let mut stderr = io::stderr().lock();
        write!(stderr, "{} ({relative_path}) [y/N] ", question(description))?;
        stderr.flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(is_affirmative(&answer))
    }
}
