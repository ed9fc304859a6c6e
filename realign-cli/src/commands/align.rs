//! Align command implementation

use crate::error::CliError;
use crate::family_source::FamilyArgs;
use crate::input::parse_tokens_json;
use crate::output::{formatter, AlignedRecord, OutputFormat};
use anyhow::Result;
use clap::Args;
use std::io;

/// Arguments for the align command
#[derive(Debug, Args)]
pub struct AlignArgs {
    #[command(flatten)]
    pub family: FamilyArgs,

    /// Original text that was fed to the tokenizer
    #[arg(short, long, value_name = "TEXT")]
    pub text: String,

    /// Token, repeat once per token in order
    #[arg(long = "token", value_name = "TOKEN", allow_hyphen_values = true)]
    pub token: Vec<String>,

    /// Tokens as a JSON array of strings
    #[arg(long, value_name = "JSON", conflicts_with = "token")]
    pub tokens_json: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl AlignArgs {
    /// Execute the align command
    pub fn execute(&self) -> Result<()> {
        let source = self.family.source().ok_or_else(|| {
            CliError::MissingFamily(
                "align (use --family, --backbone or --policy-config)".to_string(),
            )
        })?;
        log::info!("Policy source: {}", source.display_name());

        let realigner = source.realigner()?;
        let tokens = self.tokens()?;
        let alignment = realigner.align(&self.text, &tokens);

        let record = AlignedRecord::new(None, realigner.policy().code(), alignment);
        let mut output = formatter(self.format, io::stdout().lock());
        output.format_record(&record)?;
        output.finish()
    }

    /// Tokens from either `--token` or `--tokens-json`
    pub fn tokens(&self) -> Result<Vec<String>, CliError> {
        match &self.tokens_json {
            Some(json) => parse_tokens_json(json),
            None => Ok(self.token.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use realign_core::TokenizerFamily;

    fn args() -> AlignArgs {
        AlignArgs {
            family: FamilyArgs {
                family: Some(TokenizerFamily::LayoutLmV2),
                ..Default::default()
            },
            text: "running".to_string(),
            token: vec!["run".to_string(), "##ning".to_string()],
            tokens_json: None,
            format: OutputFormat::Json,
        }
    }

    #[test]
    fn test_tokens_from_repeated_flag() {
        assert_eq!(args().tokens().unwrap(), vec!["run", "##ning"]);
    }

    #[test]
    fn test_tokens_from_json() {
        let mut args = args();
        args.token.clear();
        args.tokens_json = Some(r#"["▁Hi"]"#.to_string());
        assert_eq!(args.tokens().unwrap(), vec!["▁Hi"]);
    }

    #[test]
    fn test_missing_family_fails() {
        let mut args = args();
        args.family = FamilyArgs::default();
        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("No tokenizer family"));
    }
}
