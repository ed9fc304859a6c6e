//! Configuration structures and validation
//!
//! This module defines the TOML schema for normalization policies.

use crate::fold::ComparisonMode;
use serde::{Deserialize, Serialize};

/// Root policy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub marker: Option<MarkerConfig>,
    pub unknown: UnknownConfig,
    #[serde(default)]
    pub matching: MatchingConfig,
    #[serde(default)]
    pub repairs: Vec<RepairConfig>,
    #[serde(default)]
    pub accent_fold: Vec<AccentConfig>,
}

/// Policy metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// How the word-boundary or continuation marker is rewritten
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerRule {
    /// Replace every occurrence in every token
    Replace,
    /// Replace every occurrence, but only in tokens starting with the marker
    ReplacePrefixed,
    /// Remove a single leading occurrence
    StripPrefix,
}

/// Marker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerConfig {
    pub text: String,
    pub rule: MarkerRule,
    #[serde(default = "default_replacement")]
    pub replacement: String,
    /// Replacement used instead of `replacement` on the first token
    #[serde(default)]
    pub first_token_replacement: Option<String>,
}

/// Unknown-token placeholder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnknownConfig {
    pub literal: String,
}

/// What happens when a token character does not match the source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MismatchRule {
    /// Attribute the unmatched source character to the token and advance
    #[default]
    SkipSource,
    /// Drop the token character and keep the cursor in place
    SkipTokenChar,
}

/// Character matching configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchingConfig {
    #[serde(default)]
    pub comparison: ComparisonMode,
    #[serde(default)]
    pub mismatch: MismatchRule,
    /// Consume a second space after a matched space
    #[serde(default)]
    pub collapse_spaces: bool,
}

/// Literal substring repair applied to raw tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepairConfig {
    pub from: String,
    pub to: String,
}

/// Single-character accent fold applied to the source text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccentConfig {
    pub from: char,
    pub to: char,
}

fn default_replacement() -> String {
    " ".to_string()
}

impl PolicyConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("Policy code must not be empty".to_string());
        }

        if let Some(marker) = &self.marker {
            if marker.text.is_empty() {
                return Err("Marker text must not be empty".to_string());
            }
        }

        if self.unknown.literal.is_empty() {
            return Err("Unknown-token literal must not be empty".to_string());
        }

        if let Some(repair) = self.repairs.iter().find(|r| r.from.is_empty()) {
            return Err(format!(
                "Repair with empty pattern (replacement {:?})",
                repair.to
            ));
        }

        let mut seen = Vec::with_capacity(self.accent_fold.len());
        for accent in &self.accent_fold {
            if seen.contains(&accent.from) {
                return Err(format!("Duplicate accent fold for {:?}", accent.from));
            }
            seen.push(accent.from);
        }

        Ok(())
    }
}
