use thiserror::Error;

/// Top-level error type for the Clerk system.
///
/// Each variant wraps a subsystem-specific error. Subsystem crates define
/// their own error types and implement `From<SubsystemError> for ClerkError`
/// so that the `?` operator works seamlessly across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClerkError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Chat error: {0}")]
    Chat(String),

    #[error("Session error: {0}")]
    Session(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for ClerkError {
    fn from(err: toml::de::Error) -> Self {
        ClerkError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for ClerkError {
    fn from(err: toml::ser::Error) -> Self {
        ClerkError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for ClerkError {
    fn from(err: serde_json::Error) -> Self {
        ClerkError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Clerk operations.
pub type Result<T> = std::result::Result<T, ClerkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ClerkError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let clerk_err: ClerkError = io_err.into();
        assert!(matches!(clerk_err, ClerkError::Io(_)));
        assert!(clerk_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let clerk_err: ClerkError = json_err.into();
        assert!(matches!(clerk_err, ClerkError::Serialization(_)));
    }
}
