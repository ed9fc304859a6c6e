//! Plain text output formatter

use super::{AlignedRecord, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs one quoted piece per line
///
/// Records are separated by a blank line; a header line is written when the
/// record has an id.
pub struct TextFormatter<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_record(&mut self, record: &AlignedRecord) -> Result<()> {
        if self.written > 0 {
            writeln!(self.writer)?;
        }
        if let Some(id) = &record.id {
            writeln!(self.writer, "# {id} ({})", record.family)?;
        }
        for piece in &record.pieces {
            writeln!(self.writer, "{piece:?}")?;
        }
        if let Some(index) = record.exhausted_at {
            log::warn!("Source text ran out at token {index}");
        }
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
