//! Built-in policy loader
//!
//! Parses the embedded family tables once and caches them.

use super::{NormalizationPolicy, PolicyConfig};
use crate::error::{Error, Result};
use crate::family::TokenizerFamily;
use std::collections::HashMap;
use std::sync::OnceLock;

type PolicyTable = HashMap<TokenizerFamily, NormalizationPolicy>;

static BUILTIN_POLICIES: OnceLock<std::result::Result<PolicyTable, String>> = OnceLock::new();

macro_rules! embed_policy {
    ($family:expr, $path:expr) => {
        ($family, include_str!($path))
    };
}

fn load_embedded_policies() -> std::result::Result<PolicyTable, String> {
    let mut policies = HashMap::new();

    let embedded = [
        embed_policy!(TokenizerFamily::Xlm, "../../configs/families/xlm.toml"),
        embed_policy!(
            TokenizerFamily::LayoutLmV2,
            "../../configs/families/layoutlmv2.toml"
        ),
        embed_policy!(
            TokenizerFamily::Roberta,
            "../../configs/families/roberta.toml"
        ),
        embed_policy!(
            TokenizerFamily::LayoutLmV3,
            "../../configs/families/layoutlmv3.toml"
        ),
    ];

    for (family, toml_content) in embedded {
        let config: PolicyConfig = toml::from_str(toml_content)
            .map_err(|e| format!("Failed to parse {family} policy: {e}"))?;

        // Validate that the config code matches
        if config.metadata.code != family.code() {
            return Err(format!(
                "Policy code mismatch: expected {}, got {}",
                family.code(),
                config.metadata.code
            ));
        }

        let policy = NormalizationPolicy::from_config(&config).map_err(|e| e.to_string())?;
        log::debug!("Loaded built-in policy {}", policy.code());
        policies.insert(family, policy);
    }

    Ok(policies)
}

/// Get the built-in policy for a tokenizer family
pub fn builtin_policy(family: TokenizerFamily) -> Result<&'static NormalizationPolicy> {
    let policies = BUILTIN_POLICIES
        .get_or_init(load_embedded_policies)
        .as_ref()
        .map_err(|e| Error::Configuration(e.clone()))?;

    policies
        .get(&family)
        .ok_or_else(|| Error::UnknownFamily(family.code().to_string()))
}

/// Codes of all built-in policies, in stable family order
pub fn list_builtin_policies() -> Vec<&'static str> {
    TokenizerFamily::ALL
        .iter()
        .filter(|family| builtin_policy(**family).is_ok())
        .map(|family| family.code())
        .collect()
}
