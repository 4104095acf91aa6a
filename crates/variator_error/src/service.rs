//! Completion service error types.

/// Failure modes of a call to the completion service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ServiceErrorKind {
    /// Transport-level failure (DNS, TLS, connection reset, ...)
    #[display("HTTP request failed: {}", _0)]
    Http(String),
    /// The service answered with a non-success status
    #[display("API error (status {}): {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message reported by the service
        message: String,
    },
    /// The response body could not be decoded
    #[display("Response parsing failed: {}", _0)]
    ResponseParsing(String),
    /// The service returned no usable completion
    #[display("Service returned no completions")]
    EmptyResponse,
}

/// Completion service error with location tracking.
///
/// # Examples
///
/// ```
/// use variator_error::{ServiceError, ServiceErrorKind};
///
/// let err = ServiceError::new(ServiceErrorKind::Api {
///     status: 500,
///     message: "internal error".to_string(),
/// });
/// assert!(format!("{}", err).contains("status 500"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Service Error: {} at line {} in {}", kind, line, file)]
pub struct ServiceError {
    /// The kind of error that occurred
    pub kind: ServiceErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ServiceError {
    /// Create a new service error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ServiceErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ServiceErrorKind {
        &self.kind
    }
}
