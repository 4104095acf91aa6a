//! Error types for the Variator toolkit.
//!
//! Every error records the source line and file where it was created.
//! Specific errors lift into [`VariatorError`] through `?`.

mod authentication;
mod config;
mod request;
mod service;

pub use authentication::AuthenticationError;
pub use config::ConfigError;
pub use request::RequestError;
pub use service::{ServiceError, ServiceErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum VariatorErrorKind {
    /// Missing or rejected credentials
    Authentication(AuthenticationError),
    /// Completion service failure
    Service(ServiceError),
    /// Invalid generation request
    Request(RequestError),
    /// Configuration error
    Config(ConfigError),
}

impl std::fmt::Display for VariatorErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VariatorErrorKind::Authentication(e) => write!(f, "{}", e),
            VariatorErrorKind::Service(e) => write!(f, "{}", e),
            VariatorErrorKind::Request(e) => write!(f, "{}", e),
            VariatorErrorKind::Config(e) => write!(f, "{}", e),
        }
    }
}

/// Variator error with kind discrimination.
///
/// # Examples
///
/// ```
/// use variator_error::{AuthenticationError, VariatorError};
///
/// let err = VariatorError::from(AuthenticationError::new("invalid API key"));
/// assert!(err.is_authentication());
/// assert!(!err.is_service());
/// ```
#[derive(Debug)]
pub struct VariatorError(Box<VariatorErrorKind>);

impl VariatorError {
    /// Create a new error from a kind.
    pub fn new(kind: VariatorErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VariatorErrorKind {
        &self.0
    }

    /// True when credentials were missing or rejected.
    pub fn is_authentication(&self) -> bool {
        matches!(*self.0, VariatorErrorKind::Authentication(_))
    }

    /// True when the completion service call failed.
    pub fn is_service(&self) -> bool {
        matches!(*self.0, VariatorErrorKind::Service(_))
    }
}

impl std::fmt::Display for VariatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Variator Error: {}", self.0)
    }
}

impl std::error::Error for VariatorError {}

// Generic From implementation for any type that converts to VariatorErrorKind
impl<T> From<T> for VariatorError
where
    T: Into<VariatorErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Variator operations.
pub type VariatorResult<T> = std::result::Result<T, VariatorError>;
