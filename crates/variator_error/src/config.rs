//! Configuration error types.

use std::path::{Path, PathBuf};

/// A configuration that could not be read, parsed or applied.
///
/// Carries the offending file when one is known.
#[derive(Debug, Clone, derive_more::Error)]
pub struct ConfigError {
    /// What went wrong
    pub message: String,
    /// Configuration file involved, if any
    pub path: Option<PathBuf>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use variator_error::ConfigError;
    ///
    /// let err = ConfigError::new("variation_count must be a number");
    /// assert!(err.path.is_none());
    /// assert!(err.to_string().starts_with("Configuration Error: variation_count"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            path: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Attaches the configuration file the error came from.
    ///
    /// ```
    /// use variator_error::ConfigError;
    ///
    /// let err = ConfigError::new("bad value").with_path("variator.toml");
    /// assert!(err.to_string().contains("in variator.toml: bad value"));
    /// ```
    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.path {
            Some(path) => write!(
                f,
                "Configuration Error in {}: {} at line {} in {}",
                path.display(),
                self.message,
                self.line,
                self.file
            ),
            None => write!(
                f,
                "Configuration Error: {} at line {} in {}",
                self.message, self.line, self.file
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_is_kept_alongside_message() {
        let err = ConfigError::new("Failed to parse config").with_path("/etc/variator.toml");

        assert_eq!(err.path.as_deref(), Some(Path::new("/etc/variator.toml")));
        assert_eq!(err.message, "Failed to parse config");
        assert!(err.to_string().contains("in /etc/variator.toml: Failed to parse config"));
    }
}
