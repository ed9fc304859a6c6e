//! realign CLI library
//!
//! This library provides the command-line interface for realigning
//! tokenizer output onto the original source text.

pub mod commands;
pub mod error;
pub mod family_source;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
