//! Character comparison used while walking the source text
//!
//! A family compares token characters to source characters under exactly one
//! [`ComparisonMode`]. Folding never touches the stored text; it only decides
//! whether two characters count as the same unit.

use serde::{Deserialize, Serialize};

/// Which fold rule a family evaluates after exact equality fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComparisonMode {
    /// Exact equality only
    #[default]
    Exact,
    /// The token character's uppercase form equals the source character
    Case,
    /// Both characters are equal after full-width to half-width folding
    Width,
}

impl ComparisonMode {
    /// Does `source` (from the original text) match `token` (from a token)?
    ///
    /// The case rule is one-directional: uncased tokenizers emit lowercase
    /// tokens, so only the token side is uppercased.
    #[inline]
    pub fn matches(self, source: char, token: char) -> bool {
        if source == token {
            return true;
        }
        match self {
            ComparisonMode::Exact => false,
            ComparisonMode::Case => single_uppercase(token) == Some(source),
            ComparisonMode::Width => to_half_width(source) == to_half_width(token),
        }
    }
}

/// Uppercase mapping when it is exactly one character (`ß` maps to `SS`)
#[inline]
fn single_uppercase(ch: char) -> Option<char> {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => Some(u),
        _ => None,
    }
}

/// Map a full-width form to its half-width equivalent
///
/// Covers the ideographic space and the full-width ASCII block
/// (U+FF01..=U+FF5E). Every other character maps to itself.
#[inline]
pub fn to_half_width(ch: char) -> char {
    match ch {
        '\u{3000}' => ' ',
        '\u{FF01}'..='\u{FF5E}' => char::from_u32(ch as u32 - 0xFEE0).unwrap_or(ch),
        _ => ch,
    }
}
