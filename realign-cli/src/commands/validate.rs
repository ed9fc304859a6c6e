//! Validate command implementation

use crate::error::{CliError, CliResult};
use clap::Args;
use realign_core::NormalizationPolicy;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to policy configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub policy_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        println!(
            "Validating policy configuration: {}",
            self.policy_config.display()
        );

        match NormalizationPolicy::from_file(&self.policy_config) {
            Ok(policy) => {
                println!("✓ Configuration is valid!");
                println!("  Policy code: {}", policy.code());
                println!("  Policy name: {}", policy.name());
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(CliError::ConfigError(format!("Validation failed: {e}")).into())
            }
        }
    }
}
