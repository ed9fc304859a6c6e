//! Family dispatch: resolve a policy and run the aligner under it

use crate::aligner::{Alignment, GreedyAligner};
use crate::backbone;
use crate::error::Result;
use crate::family::TokenizerFamily;
use crate::policy::{builtin_policy, NormalizationPolicy};
use std::borrow::Cow;

/// Realigns token sequences under one normalization policy
///
/// Cheap to clone for built-in families. Holds no per-call state, so one
/// instance can serve any number of threads.
#[derive(Debug, Clone)]
pub struct Realigner {
    policy: Cow<'static, NormalizationPolicy>,
}

impl Realigner {
    /// Create a realigner for a built-in tokenizer family
    pub fn new(family: TokenizerFamily) -> Result<Self> {
        let policy = builtin_policy(family)?;
        log::debug!("Resolved policy {} for family {family}", policy.code());
        Ok(Self {
            policy: Cow::Borrowed(policy),
        })
    }

    /// Create a realigner from a family code such as `"xlm"`
    pub fn for_family(code: &str) -> Result<Self> {
        Self::new(code.parse()?)
    }

    /// Create a realigner for a registered backbone such as `"layoutlmv3-base"`
    pub fn for_backbone(name: &str) -> Result<Self> {
        Self::new(backbone::backbone(name)?.family)
    }

    /// Create a realigner running a custom policy
    pub fn with_policy(policy: NormalizationPolicy) -> Self {
        Self {
            policy: Cow::Owned(policy),
        }
    }

    /// Active policy
    pub fn policy(&self) -> &NormalizationPolicy {
        &self.policy
    }

    /// Realign and report whether the source ran out
    pub fn align<S: AsRef<str>>(&self, text: &str, tokens: &[S]) -> Alignment {
        GreedyAligner::new(&self.policy).align(text, tokens)
    }

    /// Realign and return one source substring per token
    pub fn realign<S: AsRef<str>>(&self, text: &str, tokens: &[S]) -> Vec<String> {
        self.align(text, tokens).into_pieces()
    }
}

/// Realign `tokens` produced by the `family` tokenizer onto `text`
///
/// Fails only when `family` is not a known family code.
///
/// ```rust
/// let pieces = realign_core::realign("layoutlmv2", "running", &["run", "##ning"]).unwrap();
/// assert_eq!(pieces, vec!["run", "ning"]);
/// ```
pub fn realign<S: AsRef<str>>(family: &str, text: &str, tokens: &[S]) -> Result<Vec<String>> {
    Ok(Realigner::for_family(family)?.realign(text, tokens))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_realign_unknown_family() {
        match realign("gpt2", "text", &["text"]) {
            Err(Error::UnknownFamily(code)) => assert_eq!(code, "gpt2"),
            other => panic!("Expected UnknownFamily, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_family_fails_even_for_empty_text() {
        assert!(realign("nope", "", &[] as &[&str]).is_err());
    }

    #[test]
    fn test_for_backbone_uses_registered_family() {
        let realigner = Realigner::for_backbone("layoutlmv3-base").unwrap();
        assert_eq!(realigner.policy().code(), "layoutlmv3");

        let realigner = Realigner::for_backbone("layoutlmv3-base-chinese").unwrap();
        assert_eq!(realigner.policy().code(), "xlm");
    }

    #[test]
    fn test_for_unknown_backbone() {
        assert!(matches!(
            Realigner::for_backbone("bert-base"),
            Err(Error::UnknownBackbone(_))
        ));
    }

    #[test]
    fn test_custom_policy() {
        let policy = NormalizationPolicy::from_toml_str(
            r#"
            [metadata]
            code = "spaces"
            name = "Underscore spaces"

            [marker]
            text = "_"
            rule = "replace"

            [unknown]
            literal = "?"
            "#,
        )
        .unwrap();

        let realigner = Realigner::with_policy(policy);
        assert_eq!(
            realigner.realign("a b", &["a", "_b"]),
            vec!["a".to_string(), " b".to_string()]
        );
    }
}
