//! Confirmation prompt port.

/// Asks a yes/no question before a missing twin is created.
pub trait Prompt: Send + Sync {
    /// Asks whether the missing file at `relative_path` should be created.
    ///
    /// `description` is the human-readable content label, e.g.
    /// `widgets_controller` or `spec`. Anything other than an explicit
    /// yes must come back as `false`.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt itself cannot be shown.
    fn confirm(
        &self,
        relative_path: &str,
        description: &str,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;
}
