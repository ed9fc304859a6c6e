//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No tokenizer family could be determined
    MissingFamily(String),
    /// Tokens could not be read from the arguments
    InvalidTokens(String),
    /// A batch record is malformed
    InvalidRecord {
        /// 1-based line number in the input
        line: usize,
        /// What went wrong
        message: String,
    },
    /// Configuration error
    ConfigError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::MissingFamily(context) => write!(f, "No tokenizer family for {context}"),
            CliError::InvalidTokens(msg) => write!(f, "Invalid tokens: {msg}"),
            CliError::InvalidRecord { line, message } => {
                write!(f, "Invalid record on line {line}: {message}")
            }
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
