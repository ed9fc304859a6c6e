//! Error types for realignment

use thiserror::Error;

/// Errors surfaced by the realignment API
///
/// Only lookup and configuration problems are errors. Tokenizer/text
/// mismatches degrade per token and are reported through
/// [`Alignment::exhausted`](crate::Alignment::exhausted) instead.
#[derive(Debug, Error)]
pub enum Error {
    /// No policy is registered for the tokenizer family code
    #[error("unknown tokenizer family: {0}")]
    UnknownFamily(String),

    /// No backbone is registered under the given name
    #[error("unknown backbone: {0}")]
    UnknownBackbone(String),

    /// Malformed or invalid policy/registry configuration
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Failed to read a policy file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for realignment operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_family_display() {
        let error = Error::UnknownFamily("gpt2".to_string());
        assert_eq!(error.to_string(), "unknown tokenizer family: gpt2");
    }

    #[test]
    fn test_configuration_display() {
        let error = Error::Configuration("marker must not be empty".to_string());
        assert_eq!(
            error.to_string(),
            "configuration error: marker must not be empty"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.toml");
        let error: Error = io.into();
        assert!(matches!(error, Error::Io(_)));
        assert!(error.to_string().contains("missing.toml"));
    }
}
