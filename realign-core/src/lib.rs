//! Realignment of sub-word tokens onto the exact source text
//!
//! Tokenizers case-fold, strip accents, collapse whitespace, fold full-width
//! forms and substitute placeholder markers, so their tokens rarely spell out
//! the text they came from. This crate walks the original text once per
//! token sequence and hands back, for every token, the literal slice of the
//! original text that token covers. Concatenating the pieces reproduces the
//! original text, so callers derive offsets from cumulative lengths.
//!
//! # Architecture
//!
//! - **Fold comparator** ([`fold`]): character equality with one optional
//!   fold rule (case or full/half width)
//! - **Normalization policy** ([`policy`]): per-family data, embedded as TOML
//! - **Greedy aligner** ([`aligner`]): the single-cursor walk
//! - **Dispatcher** ([`Realigner`], [`realign`]): family lookup and entry point
//!
//! # Example
//!
//! ```rust
//! use realign_core::{Realigner, TokenizerFamily};
//!
//! let realigner = Realigner::new(TokenizerFamily::Xlm).unwrap();
//! let pieces = realigner.realign("Hello world", &["Hello", "▁world"]);
//! assert_eq!(pieces, vec!["Hello", " world"]);
//! ```

pub mod aligner;
pub mod backbone;
pub mod dispatcher;
pub mod error;
pub mod family;
pub mod fold;
pub mod policy;

pub use aligner::{Alignment, GreedyAligner};
pub use backbone::{backbone, backbone_by_ordinal, backbones, Backbone};
pub use dispatcher::{realign, Realigner};
pub use error::{Error, Result};
pub use family::TokenizerFamily;
pub use fold::ComparisonMode;
pub use policy::{MarkerRule, MismatchRule, NormalizationPolicy, PolicyConfig};
