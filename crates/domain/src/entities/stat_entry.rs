//! Per-character ledger rows binding a character to a catalog row.

use serde::{Deserialize, Serialize};

use crate::entities::StatDefinition;
use crate::ids::{CharacterId, EntryId, SpecialtyId, StatId};
use crate::value_objects::Mark;

/// A character's rating, purchase count, or dots for one catalog row.
///
/// `flag_1`/`flag_2` are general-purpose markers. For Attributes and
/// Abilities `flag_1` is the [`Mark`] and `flag_2` is Supernal; other
/// families leave them at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterStatEntry {
    pub id: EntryId,
    pub character: CharacterId,
    pub stat: StatId,
    pub value: u32,
    pub flag_1: i32,
    pub flag_2: i32,
}

impl CharacterStatEntry {
    pub fn new(character: CharacterId, stat: StatId, value: u32) -> Self {
        Self {
            id: EntryId::new(),
            character,
            stat,
            value,
            flag_1: 0,
            flag_2: 0,
        }
    }

    pub fn mark(&self) -> Mark {
        Mark::from_flag(self.flag_1)
    }

    pub fn is_favored(&self) -> bool {
        self.mark() == Mark::Favored
    }

    pub fn is_caste(&self) -> bool {
        self.mark() == Mark::Caste
    }

    pub fn is_supernal(&self) -> bool {
        self.flag_2 > 0
    }
}

/// A ledger row joined with its catalog definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerRow {
    pub definition: StatDefinition,
    pub entry: CharacterStatEntry,
}

impl LedgerRow {
    pub fn name(&self) -> &str {
        self.definition.name()
    }
}

/// Named sub-entry under an Ability's ledger row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSpecialty {
    pub id: SpecialtyId,
    pub entry: EntryId,
    pub character: CharacterId,
    pub name: String,
    pub value: u32,
}

impl CharacterSpecialty {
    pub fn new(entry: &CharacterStatEntry, name: impl Into<String>, value: u32) -> Self {
        Self {
            id: SpecialtyId::new(),
            entry: entry.id,
            character: entry.character,
            name: name.into(),
            value,
        }
    }
}
