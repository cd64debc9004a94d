//! In-memory storage for the catalog, ledger, and character records.
//!
//! Stands in for the host framework's database. Rows live in `DashMap`s so
//! the store can be shared across handlers behind one `Arc`. The catalog is
//! keyed by normalized path; first creation goes through the map's entry
//! API, so two racing callers get the same row.

mod snapshot;

use std::sync::Arc;

use dashmap::DashMap;
use storyteller_domain::{
    CharacterId, CharacterRecord, CharacterSpecialty, CharacterStatEntry, LedgerRow, SpecialtyId,
    StatDefinition, StatId, StatPath,
};

use crate::infrastructure::ports::{
    CharacterRepo, ClockPort, RepoError, StatCatalogRepo, StatLedgerRepo,
};

pub use snapshot::Snapshot;

pub struct MemoryStore {
    clock: Arc<dyn ClockPort>,
    definitions: DashMap<StatPath, StatDefinition>,
    /// Secondary index for joining ledger rows to their definition
    paths: DashMap<StatId, StatPath>,
    entries: DashMap<(CharacterId, StatId), CharacterStatEntry>,
    specialties: DashMap<SpecialtyId, CharacterSpecialty>,
    characters: DashMap<CharacterId, CharacterRecord>,
}

impl MemoryStore {
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        Self {
            clock,
            definitions: DashMap::new(),
            paths: DashMap::new(),
            entries: DashMap::new(),
            specialties: DashMap::new(),
            characters: DashMap::new(),
        }
    }

    /// Number of catalog rows.
    pub fn definition_count(&self) -> usize {
        self.definitions.len()
    }

    fn definition_by_id(&self, id: StatId) -> Option<StatDefinition> {
        let path = self.paths.get(&id)?.value().clone();
        self.definitions.get(&path).map(|d| d.value().clone())
    }

    fn clear(&self) {
        self.definitions.clear();
        self.paths.clear();
        self.entries.clear();
        self.specialties.clear();
        self.characters.clear();
    }
}

impl StatCatalogRepo for MemoryStore {
    fn get_or_create(
        &self,
        path: &StatPath,
        creator: Option<CharacterId>,
    ) -> Result<StatDefinition, RepoError> {
        let definition = self
            .definitions
            .entry(path.clone())
            .or_insert_with(|| StatDefinition::new(path.clone(), creator, self.clock.now()))
            .value()
            .clone();
        self.paths.insert(definition.id, definition.path.clone());
        Ok(definition)
    }

    fn find(&self, path: &StatPath) -> Result<Option<StatDefinition>, RepoError> {
        Ok(self.definitions.get(path).map(|d| d.value().clone()))
    }
}

impl StatLedgerRepo for MemoryStore {
    fn get_entry(
        &self,
        character: CharacterId,
        stat: StatId,
    ) -> Result<Option<CharacterStatEntry>, RepoError> {
        Ok(self
            .entries
            .get(&(character, stat))
            .map(|e| e.value().clone()))
    }

    fn save_entry(&self, entry: &CharacterStatEntry) -> Result<(), RepoError> {
        if !self.paths.contains_key(&entry.stat) {
            return Err(RepoError::constraint(format!(
                "ledger entry references unknown stat {}",
                entry.stat
            )));
        }
        self.entries
            .insert((entry.character, entry.stat), entry.clone());
        Ok(())
    }

    fn delete_entry(&self, character: CharacterId, stat: StatId) -> Result<(), RepoError> {
        if let Some((_, entry)) = self.entries.remove(&(character, stat)) {
            self.specialties.retain(|_, s| s.entry != entry.id);
        }
        Ok(())
    }

    fn list_under(
        &self,
        character: CharacterId,
        prefix: &StatPath,
    ) -> Result<Vec<LedgerRow>, RepoError> {
        let owned: Vec<CharacterStatEntry> = self
            .entries
            .iter()
            .filter(|e| e.key().0 == character)
            .map(|e| e.value().clone())
            .collect();

        let mut rows = Vec::new();
        for entry in owned {
            let definition = self
                .definition_by_id(entry.stat)
                .ok_or_else(|| RepoError::not_found("StatDefinition", entry.stat))?;
            if definition.path.starts_with(prefix) {
                rows.push(LedgerRow { definition, entry });
            }
        }
        rows.sort_by(|a, b| a.definition.path.cmp(&b.definition.path));
        Ok(rows)
    }

    fn list_specialties(
        &self,
        character: CharacterId,
    ) -> Result<Vec<CharacterSpecialty>, RepoError> {
        let mut specialties: Vec<CharacterSpecialty> = self
            .specialties
            .iter()
            .filter(|s| s.character == character)
            .map(|s| s.value().clone())
            .collect();
        specialties.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(specialties)
    }

    fn save_specialty(&self, specialty: &CharacterSpecialty) -> Result<(), RepoError> {
        let duplicate = self.specialties.iter().any(|s| {
            s.entry == specialty.entry && s.name == specialty.name && s.id != specialty.id
        });
        if duplicate {
            return Err(RepoError::constraint(format!(
                "specialty '{}' already exists for this entry",
                specialty.name
            )));
        }
        self.specialties.insert(specialty.id, specialty.clone());
        Ok(())
    }

    fn delete_specialty(&self, id: SpecialtyId) -> Result<(), RepoError> {
        self.specialties.remove(&id);
        Ok(())
    }
}

impl CharacterRepo for MemoryStore {
    fn get(&self, id: CharacterId) -> Result<Option<CharacterRecord>, RepoError> {
        Ok(self.characters.get(&id).map(|c| c.value().clone()))
    }

    fn find_by_name(&self, name: &str) -> Result<Option<CharacterRecord>, RepoError> {
        let needle = name.trim().to_lowercase();
        Ok(self
            .characters
            .iter()
            .find(|c| c.name.to_lowercase() == needle)
            .map(|c| c.value().clone()))
    }

    fn save(&self, record: &CharacterRecord) -> Result<(), RepoError> {
        self.characters.insert(record.id, record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use chrono::Utc;

    fn store() -> MemoryStore {
        MemoryStore::new(Arc::new(FixedClock(Utc::now())))
    }

    fn path(segments: &[&str]) -> StatPath {
        StatPath::new(segments.iter().copied()).unwrap()
    }

    #[test]
    fn get_or_create_is_idempotent() {
        let store = store();
        let first = store
            .get_or_create(&path(&["Crafts", "Blacksmithing"]), None)
            .unwrap();
        let second = store
            .get_or_create(&path(&["crafts", "BLACKSMITHING"]), Some(CharacterId::new()))
            .unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(second.creator, None);
        assert_eq!(store.definition_count(), 1);
    }

    #[test]
    fn clock_is_read_only_on_creation() {
        use crate::infrastructure::ports::MockClockPort;
        use chrono::TimeZone;

        let stamp = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        let mut clock = MockClockPort::new();
        clock.expect_now().times(1).return_const(stamp);
        let store = MemoryStore::new(Arc::new(clock));

        let created = store.get_or_create(&path(&["Crafts", "Weaving"]), None).unwrap();
        let again = store.get_or_create(&path(&["Crafts", "Weaving"]), None).unwrap();
        assert_eq!(created.created_at, stamp);
        assert_eq!(again.created_at, stamp);
    }

    #[test]
    fn concurrent_first_creation_yields_one_row() {
        let store = Arc::new(store());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    store
                        .get_or_create(&path(&["Merits", "General", "Resources"]), None)
                        .unwrap()
                        .id
                })
            })
            .collect();
        let ids: Vec<StatId> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(ids.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(store.definition_count(), 1);
    }

    #[test]
    fn list_under_filters_by_prefix_and_character() {
        let store = store();
        let me = CharacterId::new();
        let other = CharacterId::new();
        let craft = store
            .get_or_create(&path(&["Crafts", "Cooking"]), None)
            .unwrap();
        let melee = store
            .get_or_create(&path(&["Abilities", "Melee"]), None)
            .unwrap();
        store
            .save_entry(&CharacterStatEntry::new(me, craft.id, 2))
            .unwrap();
        store
            .save_entry(&CharacterStatEntry::new(me, melee.id, 3))
            .unwrap();
        store
            .save_entry(&CharacterStatEntry::new(other, craft.id, 5))
            .unwrap();

        let rows = store.list_under(me, &path(&["Crafts"])).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name(), "Cooking");
        assert_eq!(rows[0].entry.value, 2);
    }

    #[test]
    fn save_entry_rejects_unknown_stat() {
        let store = store();
        let entry = CharacterStatEntry::new(CharacterId::new(), StatId::new(), 1);
        assert!(matches!(
            store.save_entry(&entry),
            Err(RepoError::ConstraintViolation(_))
        ));
    }

    #[test]
    fn deleting_entry_drops_its_specialties() {
        let store = store();
        let me = CharacterId::new();
        let melee = store
            .get_or_create(&path(&["Abilities", "Melee"]), None)
            .unwrap();
        let entry = CharacterStatEntry::new(me, melee.id, 3);
        store.save_entry(&entry).unwrap();
        store
            .save_specialty(&CharacterSpecialty::new(&entry, "Swords", 1))
            .unwrap();
        assert_eq!(store.list_specialties(me).unwrap().len(), 1);

        store.delete_entry(me, melee.id).unwrap();
        assert!(store.get_entry(me, melee.id).unwrap().is_none());
        assert!(store.list_specialties(me).unwrap().is_empty());
    }

    #[test]
    fn duplicate_specialty_names_are_rejected() {
        let store = store();
        let me = CharacterId::new();
        let melee = store
            .get_or_create(&path(&["Abilities", "Melee"]), None)
            .unwrap();
        let entry = CharacterStatEntry::new(me, melee.id, 3);
        store.save_entry(&entry).unwrap();
        store
            .save_specialty(&CharacterSpecialty::new(&entry, "Swords", 1))
            .unwrap();
        let again = CharacterSpecialty::new(&entry, "Swords", 2);
        assert!(store.save_specialty(&again).is_err());
    }

    #[test]
    fn find_character_by_name_ignores_case() {
        let store = store();
        let record = CharacterRecord::new("Harmonious Jade");
        store.save(&record).unwrap();
        let found = store.find_by_name("harmonious jade").unwrap().unwrap();
        assert_eq!(found.id, record.id);
        assert!(store.find_by_name("Nobody").unwrap().is_none());
    }
}
