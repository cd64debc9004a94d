//! CharacterRecord - the sheet-level state kept per character.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ids::CharacterId;

/// Reference to a template by kind and (optional) sub-caste name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateKey {
    pub kind: String,
    pub sub_caste: Option<String>,
}

impl TemplateKey {
    pub fn new(kind: impl Into<String>, sub_caste: Option<String>) -> Self {
        Self {
            kind: kind.into(),
            sub_caste,
        }
    }

    pub fn mortal() -> Self {
        Self::new("Mortal", None)
    }
}

impl std::fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.sub_caste {
            Some(sub) => write!(f, "{}/{}", self.kind, sub),
            None => write!(f, "{}", self.kind),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub id: CharacterId,
    pub name: String,
    pub template: TemplateKey,
    /// Answers to the template's extra fields, keyed by field name
    #[serde(default)]
    pub extra: BTreeMap<String, String>,
}

impl CharacterRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CharacterId::new(),
            name: name.into(),
            template: TemplateKey::mortal(),
            extra: BTreeMap::new(),
        }
    }

    pub fn with_template(mut self, template: TemplateKey) -> Self {
        self.template = template;
        self
    }

    pub fn extra_field(&self, field: &str) -> Option<&str> {
        self.extra.get(field).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_characters_are_mortal() {
        let record = CharacterRecord::new("Harmonious Jade");
        assert_eq!(record.template, TemplateKey::mortal());
        assert!(record.extra.is_empty());
    }

    #[test]
    fn template_key_display() {
        assert_eq!(TemplateKey::mortal().to_string(), "Mortal");
        let key = TemplateKey::new("Solar", Some("Night".to_string()));
        assert_eq!(key.to_string(), "Solar/Night");
    }
}
