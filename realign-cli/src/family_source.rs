//! Where the normalization policy for a run comes from

use anyhow::{Context, Result};
use clap::Args;
use realign_core::{NormalizationPolicy, Realigner, TokenizerFamily};
use std::path::PathBuf;

/// Source of the normalization policy
#[derive(Debug, Clone)]
pub enum FamilySource {
    /// Built-in tokenizer family
    BuiltIn(TokenizerFamily),
    /// Family registered for a backbone
    Backbone(String),
    /// External policy file
    External(PathBuf),
}

impl FamilySource {
    /// Get the display name for the policy source
    pub fn display_name(&self) -> String {
        match self {
            FamilySource::BuiltIn(family) => format!("Built-in: {}", family.name()),
            FamilySource::Backbone(name) => format!("Backbone: {name}"),
            FamilySource::External(path) => format!("External: {}", path.display()),
        }
    }

    /// Build a realigner for this source
    pub fn realigner(&self) -> Result<Realigner> {
        match self {
            FamilySource::BuiltIn(family) => Ok(Realigner::new(*family)?),
            FamilySource::Backbone(name) => Ok(Realigner::for_backbone(name)?),
            FamilySource::External(path) => {
                let policy = NormalizationPolicy::from_file(path)
                    .with_context(|| format!("Failed to load policy: {}", path.display()))?;
                Ok(Realigner::with_policy(policy))
            }
        }
    }
}

/// Mutually exclusive policy selection flags
#[derive(Debug, Clone, Default, Args)]
#[group(multiple = false)]
pub struct FamilyArgs {
    /// Tokenizer family (xlm, layoutlmv2, roberta, layoutlmv3)
    #[arg(long, value_name = "FAMILY", value_parser = parse_family)]
    pub family: Option<TokenizerFamily>,

    /// Backbone name whose tokenizer family to use
    #[arg(long, value_name = "NAME")]
    pub backbone: Option<String>,

    /// Custom policy file (TOML)
    #[arg(long, value_name = "FILE")]
    pub policy_config: Option<PathBuf>,
}

impl FamilyArgs {
    /// The selected source, if any flag was given
    pub fn source(&self) -> Option<FamilySource> {
        if let Some(family) = self.family {
            Some(FamilySource::BuiltIn(family))
        } else if let Some(name) = &self.backbone {
            Some(FamilySource::Backbone(name.clone()))
        } else {
            self.policy_config.clone().map(FamilySource::External)
        }
    }
}

/// Parse a tokenizer family code for clap
pub fn parse_family(code: &str) -> Result<TokenizerFamily, String> {
    code.parse::<TokenizerFamily>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_display_name() {
        let source = FamilySource::BuiltIn(TokenizerFamily::Roberta);
        assert_eq!(source.display_name(), "Built-in: Byte-level BPE (RoBERTa)");

        let source = FamilySource::External(PathBuf::from("custom.toml"));
        assert_eq!(source.display_name(), "External: custom.toml");
    }

    #[test]
    fn test_parse_family() {
        assert_eq!(parse_family("wordpiece"), Ok(TokenizerFamily::LayoutLmV2));
        assert!(parse_family("gpt2").unwrap_err().contains("gpt2"));
    }

    #[test]
    fn test_source_precedence() {
        let args = FamilyArgs::default();
        assert!(args.source().is_none());

        let args = FamilyArgs {
            backbone: Some("layoutxlm-base".to_string()),
            ..Default::default()
        };
        let realigner = args.source().unwrap().realigner().unwrap();
        assert_eq!(realigner.policy().code(), "xlm");
    }

    #[test]
    fn test_external_policy() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            r#"
[metadata]
code = "custom"
name = "Custom"

[unknown]
literal = "<?>"
"#
        )
        .unwrap();

        let source = FamilySource::External(temp_file.path().to_path_buf());
        let realigner = source.realigner().unwrap();
        assert_eq!(realigner.policy().code(), "custom");
    }

    #[test]
    fn test_missing_external_policy() {
        let source = FamilySource::External(PathBuf::from("/nonexistent/policy.toml"));
        let err = source.realigner().unwrap_err();
        assert!(err.to_string().contains("Failed to load policy"));
    }
}
