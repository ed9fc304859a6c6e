//! Registry of supported document-layout backbones
//!
//! Each backbone carries an explicit `ordinal` that external weight
//! generation relies on. Lookups never depend on the order of the table.

use crate::error::{Error, Result};
use crate::family::TokenizerFamily;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;

/// One registered backbone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backbone {
    /// Stable identifier, never reused
    pub ordinal: u32,
    pub name: String,
    /// Hugging Face hub identifier
    pub hf_name: String,
    #[serde(with = "family_code")]
    pub family: TokenizerFamily,
    pub max_token_len: usize,
    pub add_cls_token: bool,
    pub add_sep_token: bool,
    pub has_visual_embeds: bool,
}

#[derive(Debug, Deserialize)]
struct Registry {
    backbones: Vec<Backbone>,
}

mod family_code {
    use crate::family::TokenizerFamily;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(family: &TokenizerFamily, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(family.code())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<TokenizerFamily, D::Error> {
        let code = String::deserialize(d)?;
        code.parse().map_err(serde::de::Error::custom)
    }
}

static REGISTRY: OnceLock<std::result::Result<Vec<Backbone>, String>> = OnceLock::new();

fn load_registry() -> std::result::Result<Vec<Backbone>, String> {
    parse_registry(include_str!("../configs/backbones.toml"))
}

fn parse_registry(toml_content: &str) -> std::result::Result<Vec<Backbone>, String> {
    let registry: Registry = toml::from_str(toml_content)
        .map_err(|e| format!("Failed to parse backbone registry: {e}"))?;

    let mut backbones = registry.backbones;

    let mut ordinals = HashSet::new();
    let mut names = HashSet::new();
    for backbone in &backbones {
        if !ordinals.insert(backbone.ordinal) {
            return Err(format!("Duplicate backbone ordinal {}", backbone.ordinal));
        }
        if !names.insert(backbone.name.clone()) {
            return Err(format!("Duplicate backbone name {}", backbone.name));
        }
    }

    backbones.sort_by_key(|b| b.ordinal);
    Ok(backbones)
}

/// All registered backbones, sorted by ordinal
pub fn backbones() -> Result<&'static [Backbone]> {
    REGISTRY
        .get_or_init(load_registry)
        .as_deref()
        .map_err(|e| Error::Configuration(e.clone()))
}

/// Look up a backbone by name
pub fn backbone(name: &str) -> Result<&'static Backbone> {
    backbones()?
        .iter()
        .find(|b| b.name == name)
        .ok_or_else(|| Error::UnknownBackbone(name.to_string()))
}

/// Look up a backbone by its stable ordinal
///
/// `Ok(None)` means no backbone has that ordinal; a broken registry is an
/// error.
pub fn backbone_by_ordinal(ordinal: u32) -> Result<Option<&'static Backbone>> {
    Ok(backbones()?.iter().find(|b| b.ordinal == ordinal))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_loads_sorted() {
        let all = backbones().unwrap();
        assert_eq!(all.len(), 6);
        let ordinals: Vec<u32> = all.iter().map(|b| b.ordinal).collect();
        assert_eq!(ordinals, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_backbone_lookup() {
        let b = backbone("layoutlmv2-base-uncased").unwrap();
        assert_eq!(b.family, TokenizerFamily::LayoutLmV2);
        assert_eq!(b.hf_name, "microsoft/layoutlmv2-base-uncased");
        assert_eq!(b.max_token_len, 511);
        assert!(b.has_visual_embeds);
        assert!(!b.add_sep_token);
    }

    #[test]
    fn test_backbone_by_ordinal() {
        let first = backbone_by_ordinal(0).unwrap().unwrap();
        assert_eq!(first.name, "lilt-infoxlm-base");
        let last = backbone_by_ordinal(5).unwrap().unwrap();
        assert_eq!(last.name, "layoutlmv3-base");
        assert!(backbone_by_ordinal(99).unwrap().is_none());
    }

    #[test]
    fn test_parse_registry_rejects_duplicates() {
        let entry = |ordinal: u32, name: &str| {
            format!(
                r#"
[[backbones]]
ordinal = {ordinal}
name = "{name}"
hf_name = "org/{name}"
family = "xlm"
max_token_len = 511
add_cls_token = true
add_sep_token = false
has_visual_embeds = false
"#
            )
        };

        let err = parse_registry(&(entry(1, "a") + &entry(1, "b"))).unwrap_err();
        assert_eq!(err, "Duplicate backbone ordinal 1");

        let err = parse_registry(&(entry(1, "a") + &entry(2, "a"))).unwrap_err();
        assert_eq!(err, "Duplicate backbone name a");

        let sorted = parse_registry(&(entry(7, "b") + &entry(3, "a"))).unwrap();
        assert_eq!(sorted[0].ordinal, 3);
    }

    #[test]
    fn test_parse_registry_reports_malformed_table() {
        let err = parse_registry("[[backbones]]\nordinal = \"zero\"\n").unwrap_err();
        assert!(err.starts_with("Failed to parse backbone registry"));
    }

    #[test]
    fn test_unknown_backbone() {
        match backbone("bert-base-cased") {
            Err(Error::UnknownBackbone(name)) => assert_eq!(name, "bert-base-cased"),
            other => panic!("Expected UnknownBackbone, got {other:?}"),
        }
    }

    #[test]
    fn test_family_code_serde() {
        let toml_str = r#"
            ordinal = 9
            name = "custom"
            hf_name = "org/custom"
            family = "wordpiece"
            max_token_len = 128
            add_cls_token = false
            add_sep_token = false
            has_visual_embeds = false
        "#;
        let b: Backbone = toml::from_str(toml_str).unwrap();
        assert_eq!(b.family, TokenizerFamily::LayoutLmV2);

        let bad = toml_str.replace("wordpiece", "sentencepiece-v9");
        assert!(toml::from_str::<Backbone>(&bad).is_err());
    }
}
