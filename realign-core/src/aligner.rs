//! Greedy realignment of tokens onto the source text
//!
//! The aligner walks the source text once, left to right, with a single
//! cursor. Each token claims the characters the cursor passes while that
//! token's characters are being matched, so every source character lands in
//! exactly one output piece.

use crate::policy::{MismatchRule, NormalizationPolicy};
use serde::Serialize;

/// Result of realigning one token sequence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Alignment {
    pieces: Vec<String>,
    exhausted: Option<usize>,
}

impl Alignment {
    /// Source substrings, one per token
    pub fn pieces(&self) -> &[String] {
        &self.pieces
    }

    /// Take ownership of the source substrings
    pub fn into_pieces(self) -> Vec<String> {
        self.pieces
    }

    /// Index of the first token that ran past the end of the source text
    pub fn exhausted(&self) -> Option<usize> {
        self.exhausted
    }

    /// True when every token found its characters within the source text
    pub fn is_complete(&self) -> bool {
        self.exhausted.is_none()
    }

    /// Number of pieces, one per token
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// True when there are no pieces
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}

/// Read-only source text with a forward-only cursor
///
/// `view` holds the accent-folded characters used for comparison; output
/// always takes characters from `source`.
struct SourceCursor {
    source: Vec<char>,
    view: Option<Vec<char>>,
    pos: usize,
}

impl SourceCursor {
    fn new(text: &str, policy: &NormalizationPolicy) -> Self {
        let source: Vec<char> = text.chars().collect();
        let view = policy
            .has_accent_fold()
            .then(|| source.iter().map(|&ch| policy.fold_source(ch)).collect());
        Self {
            source,
            view,
            pos: 0,
        }
    }

    /// Comparison character at the cursor
    #[inline]
    fn peek(&self) -> Option<char> {
        match &self.view {
            Some(view) => view.get(self.pos).copied(),
            None => self.source.get(self.pos).copied(),
        }
    }

    /// Append the source character at the cursor to `out` and advance
    #[inline]
    fn take(&mut self, out: &mut String) -> bool {
        match self.source.get(self.pos) {
            Some(&ch) => {
                out.push(ch);
                self.pos += 1;
                true
            }
            None => false,
        }
    }

    /// Append everything left to `out`
    fn drain_into(&mut self, out: &mut String) {
        if self.pos < self.source.len() {
            out.extend(&self.source[self.pos..]);
            self.pos = self.source.len();
        }
    }
}

/// Unicode whitespace plus the information separators U+001C..=U+001F
#[inline]
fn is_blank(ch: char) -> bool {
    ch.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&ch)
}

/// Greedy aligner parameterized by a normalization policy
#[derive(Debug, Clone, Copy)]
pub struct GreedyAligner<'p> {
    policy: &'p NormalizationPolicy,
}

impl<'p> GreedyAligner<'p> {
    pub fn new(policy: &'p NormalizationPolicy) -> Self {
        Self { policy }
    }

    /// Realign `tokens` onto `text`
    ///
    /// Empty or whitespace-only text yields an empty alignment whatever the
    /// tokens are. Text left over after the last token is appended to the
    /// last piece.
    pub fn align<S: AsRef<str>>(&self, text: &str, tokens: &[S]) -> Alignment {
        if text.chars().all(is_blank) {
            return Alignment::default();
        }

        let mut cursor = SourceCursor::new(text, self.policy);
        let mut pieces = Vec::with_capacity(tokens.len());
        let mut exhausted = None;

        for (index, raw) in tokens.iter().enumerate() {
            let mut piece = String::new();
            let token = self.policy.repair(raw.as_ref());

            let complete = if token == self.policy.unknown_literal() {
                self.take_unknown(&mut cursor, &mut piece)
            } else {
                let token = self.policy.strip_marker(&token, index == 0);
                self.take_token(&mut cursor, &token, &mut piece)
            };

            if !complete && exhausted.is_none() {
                log::debug!(
                    "Source exhausted at token {index} ({:?}) under policy {}",
                    raw.as_ref(),
                    self.policy.code()
                );
                exhausted = Some(index);
            }

            log::trace!("token {index}: {:?} -> {piece:?}", raw.as_ref());
            pieces.push(piece);
        }

        if let Some(last) = pieces.last_mut() {
            cursor.drain_into(last);
        }

        Alignment { pieces, exhausted }
    }

    /// Leading spaces plus exactly one character
    fn take_unknown(&self, cursor: &mut SourceCursor, piece: &mut String) -> bool {
        while cursor.peek() == Some(' ') {
            cursor.take(piece);
        }
        cursor.take(piece)
    }

    fn take_token(&self, cursor: &mut SourceCursor, token: &str, piece: &mut String) -> bool {
        for expected in token.chars() {
            match self.policy.mismatch() {
                MismatchRule::SkipSource => loop {
                    match cursor.peek() {
                        None => return false,
                        Some(found) if self.policy.matches(found, expected) => break,
                        Some(_) => {
                            cursor.take(piece);
                        }
                    }
                },
                MismatchRule::SkipTokenChar => match cursor.peek() {
                    None => return false,
                    Some(found) if self.policy.matches(found, expected) => {}
                    Some(_) => continue,
                },
            }

            let matched = cursor.peek();
            cursor.take(piece);

            if self.policy.collapse_spaces() && matched == Some(' ') && cursor.peek() == Some(' ')
            {
                cursor.take(piece);
            }
        }
        true
    }
}
