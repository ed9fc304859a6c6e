//! List command implementation

use anyhow::Result;
use clap::Subcommand;
use realign_core::{backbones, policy::builtin_policy, TokenizerFamily};

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List built-in tokenizer families
    Families,

    /// List registered backbones
    Backbones,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self) -> Result<()> {
        for line in self.lines()? {
            println!("{line}");
        }
        Ok(())
    }

    /// Lines to print, one per entry
    pub fn lines(&self) -> Result<Vec<String>> {
        match self {
            ListCommands::Families => TokenizerFamily::ALL
                .iter()
                .map(|family| -> Result<String> {
                    let policy = builtin_policy(*family)?;
                    let marker = policy.marker().map(|m| m.text()).unwrap_or("-");
                    Ok(format!(
                        "{:<11} {:<28} marker={marker} unknown={}",
                        family.code(),
                        family.name(),
                        policy.unknown_literal()
                    ))
                })
                .collect(),
            ListCommands::Backbones => Ok(backbones()?
                .iter()
                .map(|b| {
                    format!(
                        "{:>2} {:<24} {:<11} {}",
                        b.ordinal,
                        b.name,
                        b.family.code(),
                        b.hf_name
                    )
                })
                .collect()),
        }
    }
}
