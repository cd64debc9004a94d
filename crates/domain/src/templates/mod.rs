//! Template registry.
//!
//! Templates are code-declared and read-only at runtime. A kind contributes
//! its budgets and pools; a sub-caste contributes its eligibility lists. The
//! two are merged into a [`TemplateDefinition`] on lookup.

mod definition;
mod kinds;

pub use definition::{
    ExtraField, FieldKind, FlagBudget, KindDef, PoolFormula, SubCasteDef, TemplateDefinition,
};

use crate::common::partial_match;
use crate::entities::TemplateKey;
use crate::error::StoryError;

/// Registry of available character templates.
pub struct TemplateRegistry {
    kinds: &'static [KindDef],
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRegistry {
    /// Create a registry with all built-in kinds.
    pub fn new() -> Self {
        Self {
            kinds: &kinds::KINDS,
        }
    }

    /// List all kind names.
    pub fn kinds(&self) -> Vec<&'static str> {
        self.kinds.iter().map(|k| k.name).collect()
    }

    /// Get a kind by exact name.
    pub fn kind(&self, name: &str) -> Option<&'static KindDef> {
        self.kinds.iter().find(|k| k.name == name)
    }

    /// Resolve player text of the form `kind[/sub-caste]`.
    ///
    /// Both segments are partial-matched. When the sub-caste segment is
    /// omitted the kind's first sub-caste is selected.
    pub fn resolve(&self, text: &str) -> Result<TemplateDefinition, StoryError> {
        let (kind_text, sub_text) = match text.split_once('/') {
            Some((kind, sub)) => (kind, Some(sub)),
            None => (text, None),
        };
        if kind_text.trim().is_empty() {
            return Err(StoryError::invalid_value("Must enter a Template name!"));
        }
        let kind_name = partial_match("Template", kind_text, self.kinds())?;
        let kind = self
            .kind(kind_name)
            .ok_or_else(|| StoryError::not_found("Template", kind_name, self.kinds()))?;

        let sub = match sub_text.map(str::trim).filter(|s| !s.is_empty()) {
            Some(sub_text) => {
                if kind.sub_castes.is_empty() {
                    return Err(StoryError::not_eligible(format!(
                        "{} has no {} to choose.",
                        kind.name, kind.sub_name
                    )));
                }
                let names = kind.sub_castes.iter().map(|s| s.name);
                let found = partial_match(kind.sub_name, sub_text, names)?;
                kind.sub_castes.iter().find(|s| s.name == found)
            }
            None => kind.sub_castes.first(),
        };
        Ok(TemplateDefinition::merge(kind, sub))
    }

    /// Look up the template a character record points at.
    pub fn get(&self, key: &TemplateKey) -> Result<TemplateDefinition, StoryError> {
        let kind = self
            .kind(&key.kind)
            .ok_or_else(|| StoryError::not_found("Template", key.kind.clone(), self.kinds()))?;
        let sub = match &key.sub_caste {
            Some(name) => Some(
                kind.sub_castes
                    .iter()
                    .find(|s| s.name == name.as_str())
                    .ok_or_else(|| {
                        StoryError::not_found(
                            kind.sub_name,
                            name.clone(),
                            kind.sub_castes.iter().map(|s| s.name),
                        )
                    })?,
            ),
            None => None,
        };
        Ok(TemplateDefinition::merge(kind, sub))
    }
}

impl TemplateDefinition {
    /// Key stored on the character record for this definition.
    pub fn key(&self) -> TemplateKey {
        TemplateKey::new(self.kind, self.sub_caste.map(str::to_string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::StatFamily;
    use crate::value_objects::FlagKind;

    #[test]
    fn registry_includes_all_kinds() {
        let registry = TemplateRegistry::new();
        assert_eq!(
            registry.kinds(),
            vec!["Mortal", "Solar", "Abyssal", "Lunar", "Dragon-Blooded", "Sidereal"]
        );
    }

    #[test]
    fn resolve_kind_defaults_to_first_sub_caste() {
        let registry = TemplateRegistry::new();
        let solar = registry.resolve("sol").unwrap();
        assert_eq!(solar.kind, "Solar");
        assert_eq!(solar.sub_caste, Some("Dawn"));
        assert_eq!(solar.favored_abilities_available(), 5);
        assert!(solar.caste_eligible(StatFamily::Abilities).contains(&"Melee"));
    }

    #[test]
    fn resolve_sub_caste_by_partial_match() {
        let registry = TemplateRegistry::new();
        let night = registry.resolve("solar/ni").unwrap();
        assert_eq!(night.sub_caste, Some("Night"));
        assert!(night.caste_abilities.contains(&"Stealth"));
        assert_eq!(night.full_name(), "Solar (Night)");
    }

    #[test]
    fn unknown_sub_caste_lists_choices() {
        let registry = TemplateRegistry::new();
        let err = registry.resolve("solar/midnight").unwrap_err();
        match err {
            StoryError::NotFound { choices, .. } => {
                assert_eq!(choices, vec!["Dawn", "Zenith", "Twilight", "Night", "Eclipse"]);
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn unknown_kind_lists_kinds() {
        let registry = TemplateRegistry::new();
        let err = registry.resolve("infernal").unwrap_err();
        assert!(err.to_string().contains("Dragon-Blooded"));
    }

    #[test]
    fn mortal_has_no_sub_castes() {
        let registry = TemplateRegistry::new();
        let mortal = registry.resolve("mortal").unwrap();
        assert_eq!(mortal.sub_caste, None);
        assert_eq!(mortal.budget(StatFamily::Abilities, FlagKind::Favored), 0);
        assert_eq!(mortal.start_advantage("Willpower"), Some(3));
        assert!(matches!(
            registry.resolve("mortal/dawn"),
            Err(StoryError::NotEligible(_))
        ));
    }

    #[test]
    fn dragon_blooded_aspects_are_locked() {
        let registry = TemplateRegistry::new();
        let fire = registry.resolve("dragon/fire").unwrap();
        assert!(fire.caste_locked);
        assert_eq!(fire.flag_label(FlagKind::Caste), "Aspect");
        assert_eq!(fire.caste_abilities.len(), 5);
    }

    #[test]
    fn lunar_caste_attributes() {
        let registry = TemplateRegistry::new();
        let full_moon = registry.resolve("lunar/full").unwrap();
        assert_eq!(
            full_moon.caste_eligible(StatFamily::Attributes),
            ["Strength", "Dexterity", "Stamina"]
        );
        assert_eq!(full_moon.favored_attributes_available(), 2);
    }

    #[test]
    fn pools_follow_essence() {
        let registry = TemplateRegistry::new();
        let solar = registry.resolve("solar").unwrap();
        assert_eq!(solar.personal_pool_max(1), Some(13));
        assert_eq!(solar.peripheral_pool_max(1), Some(33));
        let mortal = registry.resolve("mortal").unwrap();
        assert_eq!(mortal.personal_pool_max(1), None);
    }

    #[test]
    fn get_round_trips_key() {
        let registry = TemplateRegistry::new();
        let eclipse = registry.resolve("solar/eclipse").unwrap();
        let again = registry.get(&eclipse.key()).unwrap();
        assert_eq!(again, eclipse);
    }

    #[test]
    fn empty_text_is_rejected() {
        let registry = TemplateRegistry::new();
        assert!(matches!(
            registry.resolve("  "),
            Err(StoryError::InvalidValue(_))
        ));
    }
}
