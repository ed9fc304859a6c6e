//! Input handling module

pub mod record_reader;
pub mod tokens;

pub use record_reader::{read_records, Record};
pub use tokens::parse_tokens_json;
