//! JSON Lines batch input

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// One text/token pair to realign
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Record {
    /// Caller-supplied identifier, echoed back in the output
    #[serde(default)]
    pub id: Option<String>,
    /// Family code overriding the command-line selection
    #[serde(default)]
    pub family: Option<String>,
    pub text: String,
    pub tokens: Vec<String>,
    /// 1-based line number in the input
    #[serde(skip)]
    pub line: usize,
}

/// Read records from a JSON Lines reader, skipping blank lines
pub fn parse_records<R: BufRead>(reader: R) -> Result<Vec<Record>> {
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.with_context(|| format!("Failed to read line {line_number}"))?;
        if line.trim().is_empty() {
            continue;
        }

        let mut record: Record =
            serde_json::from_str(&line).map_err(|e| CliError::InvalidRecord {
                line: line_number,
                message: e.to_string(),
            })?;
        record.line = line_number;
        records.push(record);
    }

    Ok(records)
}

/// Read records from a JSON Lines file
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let file =
        File::open(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    parse_records(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_parse_records() {
        let input = concat!(
            r###"{"id": "a", "text": "running", "tokens": ["run", "##ning"]}"###,
            "\n\n",
            r#"{"text": "Hi", "tokens": ["▁Hi"], "family": "xlm"}"#,
            "\n",
        );

        let records = parse_records(Cursor::new(input)).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id.as_deref(), Some("a"));
        assert_eq!(records[0].line, 1);
        assert_eq!(records[1].family.as_deref(), Some("xlm"));
        assert_eq!(records[1].line, 3);
    }

    #[test]
    fn test_invalid_record_reports_line() {
        let input = "{\"text\": \"ok\", \"tokens\": []}\n{\"tokens\": [\"x\"]}\n";
        let err = parse_records(Cursor::new(input)).unwrap_err();
        match err.downcast_ref::<CliError>() {
            Some(CliError::InvalidRecord { line, .. }) => assert_eq!(*line, 2),
            other => panic!("Expected InvalidRecord, got {other:?}"),
        }
    }

    #[test]
    fn test_read_records_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("records.jsonl");
        fs::write(
            &file_path,
            "{\"text\": \"a€b\", \"tokens\": [\"a\", \"[UNK]\", \"b\"]}\n",
        )
        .unwrap();

        let records = read_records(&file_path).unwrap();
        assert_eq!(records[0].tokens, vec!["a", "[UNK]", "b"]);
    }

    #[test]
    fn test_read_records_nonexistent_file() {
        let err = read_records(Path::new("/nonexistent/records.jsonl")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
