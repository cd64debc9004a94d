//! Character Stat Ledger entity module.
//!
//! Per-character rows binding a character to catalog definitions. Every
//! mutation here persists immediately; handlers validate before calling in.

use std::sync::Arc;

use storyteller_domain::{
    CharacterId, CharacterSpecialty, CharacterStatEntry, LedgerRow, SpecialtyId, StatDefinition,
    StatId, StatPath,
};
use tracing::debug;

use crate::infrastructure::ports::{RepoError, StatLedgerRepo};

/// Which general-purpose flag column to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerFlag {
    First,
    Second,
}

/// A character-owned row of an open family (Crafts, Merits), by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedStat {
    pub name: String,
    pub value: u32,
}

impl From<&LedgerRow> for OwnedStat {
    fn from(row: &LedgerRow) -> Self {
        Self {
            name: row.name().to_string(),
            value: row.entry.value,
        }
    }
}

#[derive(Clone)]
pub struct StatLedger {
    repo: Arc<dyn StatLedgerRepo>,
}

impl StatLedger {
    pub fn new(repo: Arc<dyn StatLedgerRepo>) -> Self {
        Self { repo }
    }

    pub fn entry(
        &self,
        character: CharacterId,
        stat: StatId,
    ) -> Result<Option<CharacterStatEntry>, RepoError> {
        self.repo.get_entry(character, stat)
    }

    /// Existing row, or a new one at `default` that is saved before returning.
    pub fn get_or_create_entry(
        &self,
        character: CharacterId,
        definition: &StatDefinition,
        default: u32,
    ) -> Result<CharacterStatEntry, RepoError> {
        if let Some(entry) = self.repo.get_entry(character, definition.id)? {
            return Ok(entry);
        }
        let entry = CharacterStatEntry::new(character, definition.id, default);
        self.repo.save_entry(&entry)?;
        debug!(
            character_id = %character,
            stat = %definition.path,
            value = default,
            "Ledger entry created"
        );
        Ok(entry)
    }

    pub fn set_value(&self, entry: &mut CharacterStatEntry, value: u32) -> Result<(), RepoError> {
        entry.value = value;
        self.repo.save_entry(entry)
    }

    pub fn set_flag(
        &self,
        entry: &mut CharacterStatEntry,
        which: LedgerFlag,
        value: i32,
    ) -> Result<(), RepoError> {
        match which {
            LedgerFlag::First => entry.flag_1 = value,
            LedgerFlag::Second => entry.flag_2 = value,
        }
        self.repo.save_entry(entry)
    }

    pub fn delete(&self, entry: &CharacterStatEntry) -> Result<(), RepoError> {
        self.repo.delete_entry(entry.character, entry.stat)
    }

    /// Rows of `character` under `prefix`, ordered by path.
    pub fn rows_under(
        &self,
        character: CharacterId,
        prefix: &StatPath,
    ) -> Result<Vec<LedgerRow>, RepoError> {
        let mut rows = self.repo.list_under(character, prefix)?;
        rows.sort_by(|a, b| a.definition.path.cmp(&b.definition.path));
        Ok(rows)
    }

    pub fn specialties(&self, character: CharacterId) -> Result<Vec<CharacterSpecialty>, RepoError> {
        self.repo.list_specialties(character)
    }

    pub fn save_specialty(&self, specialty: &CharacterSpecialty) -> Result<(), RepoError> {
        self.repo.save_specialty(specialty)
    }

    pub fn delete_specialty(&self, id: SpecialtyId) -> Result<(), RepoError> {
        self.repo.delete_specialty(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockStatLedgerRepo;
    use chrono::Utc;

    fn definition() -> StatDefinition {
        StatDefinition::new(
            StatPath::new(["Attributes", "Strength"]).unwrap(),
            None,
            Utc::now(),
        )
    }

    #[test]
    fn creates_missing_entry_at_default() {
        let character = CharacterId::new();
        let definition = definition();
        let stat = definition.id;

        let mut repo = MockStatLedgerRepo::new();
        repo.expect_get_entry().returning(|_, _| Ok(None));
        repo.expect_save_entry()
            .withf(move |entry| entry.stat == stat && entry.value == 1 && entry.flag_1 == 0)
            .times(1)
            .returning(|_| Ok(()));

        let ledger = StatLedger::new(Arc::new(repo));
        let entry = ledger.get_or_create_entry(character, &definition, 1).unwrap();
        assert_eq!(entry.value, 1);
    }

    #[test]
    fn existing_entry_is_not_rewritten() {
        let character = CharacterId::new();
        let definition = definition();
        let existing = CharacterStatEntry::new(character, definition.id, 4);
        let returned = existing.clone();

        let mut repo = MockStatLedgerRepo::new();
        repo.expect_get_entry()
            .returning(move |_, _| Ok(Some(returned.clone())));
        repo.expect_save_entry().never();

        let ledger = StatLedger::new(Arc::new(repo));
        let entry = ledger.get_or_create_entry(character, &definition, 1).unwrap();
        assert_eq!(entry, existing);
    }

    #[test]
    fn set_flag_writes_one_column() {
        let mut repo = MockStatLedgerRepo::new();
        repo.expect_save_entry()
            .withf(|entry| entry.flag_1 == 0 && entry.flag_2 == 1)
            .times(1)
            .returning(|_| Ok(()));

        let ledger = StatLedger::new(Arc::new(repo));
        let mut entry = CharacterStatEntry::new(CharacterId::new(), StatId::new(), 0);
        ledger.set_flag(&mut entry, LedgerFlag::Second, 1).unwrap();
        assert_eq!(entry.flag_2, 1);
    }
}
