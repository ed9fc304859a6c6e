//! Token list parsing for the `align` command

use crate::error::CliError;

/// Parse a JSON array of strings
pub fn parse_tokens_json(json: &str) -> Result<Vec<String>, CliError> {
    serde_json::from_str(json).map_err(|e| CliError::InvalidTokens(e.to_string()))
}
