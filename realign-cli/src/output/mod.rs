//! Output formatting module

use anyhow::Result;
use realign_core::Alignment;
use serde::Serialize;

/// One realigned token sequence ready for output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlignedRecord {
    /// Caller-supplied identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Code of the policy that produced the pieces
    pub family: String,
    /// Source substrings, one per token
    pub pieces: Vec<String>,
    /// False when the source text ran out before the tokens did
    pub complete: bool,
    /// Index of the first token that ran out of source text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exhausted_at: Option<usize>,
}

impl AlignedRecord {
    /// Build from an alignment
    pub fn new(id: Option<String>, family: impl Into<String>, alignment: Alignment) -> Self {
        let exhausted_at = alignment.exhausted();
        Self {
            id,
            family: family.into(),
            complete: alignment.is_complete(),
            pieces: alignment.into_pieces(),
            exhausted_at,
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single realigned record
    fn format_record(&mut self, record: &AlignedRecord) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One quoted piece per line
    Text,
    /// JSON array of records
    Json,
    /// One JSON record per line
    Jsonl,
}

pub mod json;
pub mod text;

pub use json::{JsonFormatter, JsonLinesFormatter};
pub use text::TextFormatter;

/// Create the formatter for `format` writing to `writer`
pub fn formatter<'w, W: std::io::Write + 'w>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn OutputFormatter + 'w> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        OutputFormat::Jsonl => Box::new(JsonLinesFormatter::new(writer)),
    }
}
