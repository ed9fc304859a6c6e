//! Tokenizer family identifiers

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Supported tokenizer families
///
/// Each family shares one set of marker/placeholder conventions and maps to
/// exactly one built-in [`NormalizationPolicy`](crate::NormalizationPolicy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenizerFamily {
    /// SentencePiece with `▁` word-start markers (XLM-RoBERTa, InfoXLM)
    Xlm,
    /// Uncased WordPiece with `##` continuation markers
    LayoutLmV2,
    /// Byte-level BPE with `Ġ` word-start markers
    Roberta,
    /// Byte-level BPE without a prefix space on the first token
    LayoutLmV3,
}

impl TokenizerFamily {
    /// All families in a stable order
    pub const ALL: [TokenizerFamily; 4] = [
        TokenizerFamily::Xlm,
        TokenizerFamily::LayoutLmV2,
        TokenizerFamily::Roberta,
        TokenizerFamily::LayoutLmV3,
    ];

    /// Get the family code
    pub fn code(&self) -> &'static str {
        match self {
            TokenizerFamily::Xlm => "xlm",
            TokenizerFamily::LayoutLmV2 => "layoutlmv2",
            TokenizerFamily::Roberta => "roberta",
            TokenizerFamily::LayoutLmV3 => "layoutlmv3",
        }
    }

    /// Get a human readable name
    pub fn name(&self) -> &'static str {
        match self {
            TokenizerFamily::Xlm => "SentencePiece (XLM)",
            TokenizerFamily::LayoutLmV2 => "WordPiece (LayoutLMv2)",
            TokenizerFamily::Roberta => "Byte-level BPE (RoBERTa)",
            TokenizerFamily::LayoutLmV3 => "Byte-level BPE (LayoutLMv3)",
        }
    }
}

impl FromStr for TokenizerFamily {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code.trim().to_lowercase().as_str() {
            "xlm" | "sentencepiece" | "xlm-roberta" => Ok(TokenizerFamily::Xlm),
            "layoutlmv2" | "wordpiece" | "bert" => Ok(TokenizerFamily::LayoutLmV2),
            "roberta" | "byte-bpe" => Ok(TokenizerFamily::Roberta),
            "layoutlmv3" => Ok(TokenizerFamily::LayoutLmV3),
            _ => Err(Error::UnknownFamily(code.to_string())),
        }
    }
}

impl fmt::Display for TokenizerFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
