//! Request validation error types.

/// A generation request that violates its constraints.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Request Error: {} at line {} in {}", message, line, file)]
pub struct RequestError {
    /// What was wrong with the request
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl RequestError {
    /// Create a new RequestError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use variator_error::RequestError;
    ///
    /// let err = RequestError::new("prompt must not be empty");
    /// assert!(format!("{}", err).contains("prompt"));
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
