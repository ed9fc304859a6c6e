//! Batch command implementation

use crate::error::CliError;
use crate::family_source::FamilyArgs;
use crate::input::{read_records, Record};
use crate::output::{formatter, AlignedRecord, OutputFormat};
use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use realign_core::Realigner;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the batch command
#[derive(Debug, Args)]
pub struct BatchArgs {
    /// Input file, one JSON record per line
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Default policy for records without a `family` field
    #[command(flatten)]
    pub family: FamilyArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "jsonl")]
    pub format: OutputFormat,

    /// Align records on all available threads
    #[arg(short, long)]
    pub parallel: bool,
}

impl BatchArgs {
    /// Execute the batch command
    pub fn execute(&self) -> Result<()> {
        log::info!("Reading records from {}", self.input.display());
        let records = read_records(&self.input)?;

        let resolver = Resolver::new(&self.family, &records)?;
        let align = |record: &Record| resolver.align(record);

        let results: Vec<AlignedRecord> = if self.parallel {
            log::info!(
                "Aligning {} records on {} threads",
                records.len(),
                rayon::current_num_threads()
            );
            records.par_iter().map(align).collect::<Result<_>>()?
        } else {
            records.iter().map(align).collect::<Result<_>>()?
        };

        let incomplete = results.iter().filter(|r| !r.complete).count();
        if incomplete > 0 {
            log::warn!("{incomplete} of {} records ran out of source text", results.len());
        }

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout().lock()),
        };

        let mut output = formatter(self.format, writer);
        for record in &results {
            output.format_record(record)?;
        }
        output.finish()
    }
}

/// Realigners for the default selection and every family named in records
struct Resolver {
    default: Option<Realigner>,
    by_code: HashMap<String, Realigner>,
}

impl Resolver {
    fn new(args: &FamilyArgs, records: &[Record]) -> Result<Self> {
        let default = args.source().map(|s| s.realigner()).transpose()?;

        let mut by_code = HashMap::new();
        for record in records {
            if let Some(code) = &record.family {
                if !by_code.contains_key(code) {
                    let realigner = Realigner::for_family(code).map_err(|e| {
                        CliError::InvalidRecord {
                            line: record.line,
                            message: e.to_string(),
                        }
                    })?;
                    by_code.insert(code.clone(), realigner);
                }
            }
        }

        Ok(Self { default, by_code })
    }

    fn align(&self, record: &Record) -> Result<AlignedRecord> {
        let realigner = match &record.family {
            Some(code) => self.by_code.get(code),
            None => self.default.as_ref(),
        }
        .ok_or_else(|| CliError::MissingFamily(format!("record on line {}", record.line)))?;

        let alignment = realigner.align(&record.text, &record.tokens);
        Ok(AlignedRecord::new(
            record.id.clone(),
            realigner.policy().code(),
            alignment,
        ))
    }
}
