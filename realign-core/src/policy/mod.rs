//! Per-family normalization policies
//!
//! A policy is pure data: how a family spells its markers and unknown
//! placeholder, which repairs undo known encoding artifacts, and how the
//! aligner compares characters. Built-in policies are embedded TOML tables;
//! custom policies use the same schema.

pub(crate) mod config;
pub(crate) mod loader;

pub use config::{MarkerRule, MismatchRule, PolicyConfig};
pub use loader::{builtin_policy, list_builtin_policies};

use crate::error::{Error, Result};
use crate::fold::ComparisonMode;
use std::borrow::Cow;
use std::collections::HashMap;
use std::path::Path;

/// Word-boundary or continuation marker handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerPolicy {
    text: String,
    rule: MarkerRule,
    replacement: String,
    first_token_replacement: Option<String>,
}

impl MarkerPolicy {
    /// Marker literal as emitted by the tokenizer
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Rewrite rule
    pub fn rule(&self) -> MarkerRule {
        self.rule
    }

    /// Rewrite `token` for matching; `is_first` is true for the first token
    pub fn apply<'a>(&self, token: &'a str, is_first: bool) -> Cow<'a, str> {
        let replacement = match (&self.first_token_replacement, is_first) {
            (Some(first), true) => first.as_str(),
            _ => self.replacement.as_str(),
        };

        match self.rule {
            MarkerRule::Replace if token.contains(self.text.as_str()) => {
                Cow::Owned(token.replace(self.text.as_str(), replacement))
            }
            MarkerRule::ReplacePrefixed if token.starts_with(self.text.as_str()) => {
                Cow::Owned(token.replace(self.text.as_str(), replacement))
            }
            MarkerRule::StripPrefix => match token.strip_prefix(self.text.as_str()) {
                Some(rest) => Cow::Borrowed(rest),
                None => Cow::Borrowed(token),
            },
            _ => Cow::Borrowed(token),
        }
    }
}

/// Compiled normalization policy for one tokenizer family
#[derive(Debug, Clone)]
pub struct NormalizationPolicy {
    code: String,
    name: String,
    marker: Option<MarkerPolicy>,
    unknown_literal: String,
    repairs: Vec<(String, String)>,
    accent_fold: HashMap<char, char>,
    comparison: ComparisonMode,
    mismatch: MismatchRule,
    collapse_spaces: bool,
}

impl NormalizationPolicy {
    /// Create from configuration
    pub fn from_config(config: &PolicyConfig) -> Result<Self> {
        config.validate().map_err(Error::Configuration)?;

        let marker = config.marker.as_ref().map(|m| MarkerPolicy {
            text: m.text.clone(),
            rule: m.rule,
            replacement: m.replacement.clone(),
            first_token_replacement: m.first_token_replacement.clone(),
        });

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            marker,
            unknown_literal: config.unknown.literal.clone(),
            repairs: config
                .repairs
                .iter()
                .map(|r| (r.from.clone(), r.to.clone()))
                .collect(),
            accent_fold: config.accent_fold.iter().map(|a| (a.from, a.to)).collect(),
            comparison: config.matching.comparison,
            mismatch: config.matching.mismatch,
            collapse_spaces: config.matching.collapse_spaces,
        })
    }

    /// Parse and compile a policy from TOML
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: PolicyConfig = toml::from_str(toml_str)
            .map_err(|e| Error::Configuration(format!("Failed to parse policy: {e}")))?;
        Self::from_config(&config)
    }

    /// Load a policy from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn marker(&self) -> Option<&MarkerPolicy> {
        self.marker.as_ref()
    }

    pub fn unknown_literal(&self) -> &str {
        &self.unknown_literal
    }

    pub fn comparison(&self) -> ComparisonMode {
        self.comparison
    }

    pub fn mismatch(&self) -> MismatchRule {
        self.mismatch
    }

    pub fn collapse_spaces(&self) -> bool {
        self.collapse_spaces
    }

    /// Whether this policy rewrites the source text before comparison
    pub fn has_accent_fold(&self) -> bool {
        !self.accent_fold.is_empty()
    }

    /// Apply the literal repairs, in order, to a raw token
    pub fn repair<'a>(&self, token: &'a str) -> Cow<'a, str> {
        let mut repaired = Cow::Borrowed(token);
        for (from, to) in &self.repairs {
            if repaired.contains(from.as_str()) {
                repaired = Cow::Owned(repaired.replace(from.as_str(), to));
            }
        }
        repaired
    }

    /// Rewrite a (repaired) token's marker for matching
    pub fn strip_marker<'a>(&self, token: &'a str, is_first: bool) -> Cow<'a, str> {
        match &self.marker {
            Some(marker) => marker.apply(token, is_first),
            None => Cow::Borrowed(token),
        }
    }

    /// Fold a single source character for comparison
    #[inline]
    pub fn fold_source(&self, ch: char) -> char {
        self.accent_fold.get(&ch).copied().unwrap_or(ch)
    }

    /// Does a source character match a token character under this policy?
    #[inline]
    pub fn matches(&self, source: char, token: char) -> bool {
        self.comparison.matches(source, token)
    }
}
