//! Generate policy command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-policy command
#[derive(Debug, Args)]
pub struct GeneratePolicyArgs {
    /// Code for the new policy
    #[arg(short = 'c', long, value_name = "CODE", required = true)]
    pub family_code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GeneratePolicyArgs {
    /// Execute the generate-policy command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating policy configuration template...");
        println!("  Policy code: {}", self.family_code);
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, self.generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Policy template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the file to describe your tokenizer's conventions");
        println!("2. Validate your policy:");
        println!("   realign validate --policy-config {}", self.output.display());
        println!("3. Use it for alignment:");
        println!(
            "   realign align --policy-config {} --text \"...\" --token ...",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        format!(
            r#"# Normalization policy for {code}

[metadata]
code = "{code}"
name = "Custom Tokenizer"

# Word-boundary or continuation marker (optional section)
#   rule = "replace"          every occurrence, every token
#   rule = "replace-prefixed" every occurrence, only in tokens starting with it
#   rule = "strip-prefix"     one leading occurrence is removed
[marker]
text = "▁"
rule = "replace"
replacement = " "
# Replacement used on the first token only (optional)
# first_token_replacement = ""

# Placeholder emitted for characters the tokenizer cannot encode
[unknown]
literal = "<unk>"

[matching]
# "exact", "case" (token uppercased) or "width" (full/half-width)
comparison = "exact"
# "skip-source" or "skip-token-char"
mismatch = "skip-source"
# Consume a second space after a matched space
collapse_spaces = false

# Literal repairs applied to raw tokens, in order (optional)
# [[repairs]]
# from = "Â°"
# to = "°"

# Single-character folds applied to the source text for comparison (optional)
# [[accent_fold]]
# from = "é"
# to = "e"
"#,
            code = self.family_code
        )
    }
}
