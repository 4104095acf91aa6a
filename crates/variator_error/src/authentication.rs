//! Authentication error types.

/// Missing or rejected credentials, with source location.
#[derive(Debug, Clone)]
pub struct AuthenticationError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl AuthenticationError {
    /// Create a new AuthenticationError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use variator_error::AuthenticationError;
    ///
    /// let err = AuthenticationError::new("OPENAI_API_KEY environment variable not set");
    /// assert!(err.message.contains("OPENAI_API_KEY"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Authentication Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for AuthenticationError {}
