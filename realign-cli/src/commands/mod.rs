//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod align;
pub mod batch;
pub mod generate_policy;
pub mod list;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Realign one token sequence given on the command line
    Align(align::AlignArgs),

    /// Realign every record of a JSON Lines file
    Batch(batch::BatchArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: list::ListCommands,
    },

    /// Generate a normalization policy template
    GeneratePolicy(generate_policy::GeneratePolicyArgs),

    /// Validate a normalization policy file
    Validate(validate::ValidateArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Align(args) => args.execute(),
            Commands::Batch(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
            Commands::GeneratePolicy(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;

    #[test]
    fn test_commands_debug_format() {
        let align_cmd = Commands::Align(align::AlignArgs {
            family: Default::default(),
            text: "running".to_string(),
            token: vec!["run".to_string(), "##ning".to_string()],
            tokens_json: None,
            format: OutputFormat::Text,
        });

        let debug_str = format!("{:?}", align_cmd);
        assert!(debug_str.contains("Align"));
        assert!(debug_str.contains("##ning"));

        let list_cmd = Commands::List {
            subcommand: list::ListCommands::Families,
        };
        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("Families"));
    }
}
