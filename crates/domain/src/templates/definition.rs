//! Template records: static kind/sub-caste declarations and the merged
//! definition the handlers read.

use serde::Serialize;

use crate::stats::StatFamily;
use crate::value_objects::FlagKind;

/// Slot counts for the three mark tiers within one family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FlagBudget {
    pub favored: u32,
    pub caste: u32,
    pub supernal: u32,
}

impl FlagBudget {
    pub const NONE: FlagBudget = FlagBudget::new(0, 0, 0);

    pub const fn new(favored: u32, caste: u32, supernal: u32) -> Self {
        Self {
            favored,
            caste,
            supernal,
        }
    }

    pub fn limit(&self, flag: FlagKind) -> u32 {
        match flag {
            FlagKind::Favored => self.favored,
            FlagKind::Caste => self.caste,
            FlagKind::Supernal => self.supernal,
        }
    }
}

/// Linear resource pool: `per_essence * Essence + base`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PoolFormula {
    pub per_essence: u32,
    pub base: u32,
}

impl PoolFormula {
    pub const fn new(per_essence: u32, base: u32) -> Self {
        Self { per_essence, base }
    }

    /// Pool size for an Essence rating, clamped at `u32::MAX`.
    pub fn max(&self, essence: u32) -> u32 {
        self.per_essence.saturating_mul(essence).saturating_add(self.base)
    }
}

/// How an extra descriptive field is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldKind {
    Required,
    Optional,
    Choice(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExtraField {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl ExtraField {
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Required,
        }
    }

    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Optional,
        }
    }

    pub const fn choice(name: &'static str, choices: &'static [&'static str]) -> Self {
        Self {
            name,
            kind: FieldKind::Choice(choices),
        }
    }
}

/// Sub-caste declarations: which stats may carry the Caste mark.
#[derive(Debug, Clone, Copy)]
pub struct SubCasteDef {
    pub name: &'static str,
    pub caste_attributes: &'static [&'static str],
    pub caste_abilities: &'static [&'static str],
}

/// Kind-level declarations shared by every sub-caste.
#[derive(Debug, Clone, Copy)]
pub struct KindDef {
    pub name: &'static str,
    /// What the sub-caste is called ("Caste", "Aspect")
    pub sub_name: &'static str,
    pub supernal_name: &'static str,
    pub sub_castes: &'static [SubCasteDef],
    pub attributes: FlagBudget,
    pub abilities: FlagBudget,
    /// Sub-caste abilities are flagged Caste automatically and locked
    pub caste_locked: bool,
    pub start_advantages: &'static [(&'static str, u32)],
    pub extra_fields: &'static [ExtraField],
    pub native_charm_category: Option<&'static str>,
    pub starting_charms: u32,
    pub personal_pool: Option<PoolFormula>,
    pub peripheral_pool: Option<PoolFormula>,
}

/// Effective parameters of one kind + sub-caste, merged explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateDefinition {
    pub kind: &'static str,
    pub sub_name: &'static str,
    pub sub_caste: Option<&'static str>,
    pub sub_castes: Vec<&'static str>,
    pub supernal_name: &'static str,
    pub attributes: FlagBudget,
    pub abilities: FlagBudget,
    pub caste_attributes: Vec<&'static str>,
    pub caste_abilities: Vec<&'static str>,
    pub caste_locked: bool,
    pub start_advantages: Vec<(&'static str, u32)>,
    pub extra_fields: Vec<ExtraField>,
    pub native_charm_category: Option<&'static str>,
    /// Advisory only; shown during creation, never enforced
    pub starting_charms: u32,
    pub personal_pool: Option<PoolFormula>,
    pub peripheral_pool: Option<PoolFormula>,
}

impl TemplateDefinition {
    pub fn merge(kind: &KindDef, sub: Option<&SubCasteDef>) -> Self {
        Self {
            kind: kind.name,
            sub_name: kind.sub_name,
            sub_caste: sub.map(|s| s.name),
            sub_castes: kind.sub_castes.iter().map(|s| s.name).collect(),
            supernal_name: kind.supernal_name,
            attributes: kind.attributes,
            abilities: kind.abilities,
            caste_attributes: sub.map(|s| s.caste_attributes.to_vec()).unwrap_or_default(),
            caste_abilities: sub.map(|s| s.caste_abilities.to_vec()).unwrap_or_default(),
            caste_locked: kind.caste_locked,
            start_advantages: kind.start_advantages.to_vec(),
            extra_fields: kind.extra_fields.to_vec(),
            native_charm_category: kind.native_charm_category,
            starting_charms: kind.starting_charms,
            personal_pool: kind.personal_pool,
            peripheral_pool: kind.peripheral_pool,
        }
    }

    /// Display name such as "Solar (Night)".
    pub fn full_name(&self) -> String {
        match self.sub_caste {
            Some(sub) => format!("{} ({sub})", self.kind),
            None => self.kind.to_string(),
        }
    }

    /// Slot budget for a flag tier within a family; zero outside Attributes/Abilities.
    pub fn budget(&self, family: StatFamily, flag: FlagKind) -> u32 {
        match family {
            StatFamily::Attributes => self.attributes.limit(flag),
            StatFamily::Abilities => self.abilities.limit(flag),
            _ => 0,
        }
    }

    /// Names in `family` the current sub-caste allows to carry the Caste mark.
    pub fn caste_eligible(&self, family: StatFamily) -> &[&'static str] {
        match family {
            StatFamily::Attributes => &self.caste_attributes,
            StatFamily::Abilities => &self.caste_abilities,
            _ => &[],
        }
    }

    /// Label players see for a flag tier ("Caste" becomes "Aspect" for Dragon-Blooded).
    pub fn flag_label(&self, flag: FlagKind) -> &'static str {
        match flag {
            FlagKind::Favored => "Favored",
            FlagKind::Caste => self.sub_name,
            FlagKind::Supernal => self.supernal_name,
        }
    }

    pub fn favored_attributes_available(&self) -> u32 {
        self.attributes.favored
    }

    pub fn caste_attributes_available(&self) -> u32 {
        self.attributes.caste
    }

    pub fn supernal_attributes_available(&self) -> u32 {
        self.attributes.supernal
    }

    pub fn favored_abilities_available(&self) -> u32 {
        self.abilities.favored
    }

    pub fn caste_abilities_available(&self) -> u32 {
        self.abilities.caste
    }

    pub fn supernal_abilities_available(&self) -> u32 {
        self.abilities.supernal
    }

    /// Starting value for an Advantage, if the template declares one.
    pub fn start_advantage(&self, name: &str) -> Option<u32> {
        self.start_advantages
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
    }

    pub fn extra_field(&self, name: &str) -> Option<&ExtraField> {
        self.extra_fields.iter().find(|f| f.name == name)
    }

    pub fn personal_pool_max(&self, essence: u32) -> Option<u32> {
        self.personal_pool.map(|p| p.max(essence))
    }

    pub fn peripheral_pool_max(&self, essence: u32) -> Option<u32> {
        self.peripheral_pool.map(|p| p.max(essence))
    }
}
