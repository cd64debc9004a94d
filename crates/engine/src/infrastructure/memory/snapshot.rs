//! JSON snapshots of a [`MemoryStore`].

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use storyteller_domain::{CharacterRecord, CharacterSpecialty, CharacterStatEntry, StatDefinition};

use super::MemoryStore;
use crate::infrastructure::ports::{ClockPort, RepoError};

/// Every row in the store, ordered for stable output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub definitions: Vec<StatDefinition>,
    pub entries: Vec<CharacterStatEntry>,
    pub specialties: Vec<CharacterSpecialty>,
    pub characters: Vec<CharacterRecord>,
}

impl MemoryStore {
    pub fn export_snapshot(&self) -> Snapshot {
        let mut definitions: Vec<StatDefinition> =
            self.definitions.iter().map(|d| d.value().clone()).collect();
        definitions.sort_by(|a, b| a.path.cmp(&b.path));

        let mut entries: Vec<CharacterStatEntry> =
            self.entries.iter().map(|e| e.value().clone()).collect();
        entries.sort_by_key(|e| (e.character, e.stat));

        let mut specialties: Vec<CharacterSpecialty> =
            self.specialties.iter().map(|s| s.value().clone()).collect();
        specialties.sort_by(|a, b| (a.entry, &a.name).cmp(&(b.entry, &b.name)));

        let mut characters: Vec<CharacterRecord> =
            self.characters.iter().map(|c| c.value().clone()).collect();
        characters.sort_by(|a, b| a.name.cmp(&b.name));

        Snapshot {
            definitions,
            entries,
            specialties,
            characters,
        }
    }

    /// Replace the store's contents with `snapshot`.
    ///
    /// Rejects snapshots whose ledger rows point at missing catalog rows.
    pub fn import_snapshot(&self, snapshot: Snapshot) -> Result<(), RepoError> {
        let known: std::collections::HashSet<_> =
            snapshot.definitions.iter().map(|d| d.id).collect();
        if let Some(orphan) = snapshot.entries.iter().find(|e| !known.contains(&e.stat)) {
            return Err(RepoError::constraint(format!(
                "snapshot entry {} references unknown stat {}",
                orphan.id, orphan.stat
            )));
        }

        self.clear();
        for definition in snapshot.definitions {
            self.paths.insert(definition.id, definition.path.clone());
            self.definitions.insert(definition.path.clone(), definition);
        }
        for entry in snapshot.entries {
            self.entries.insert((entry.character, entry.stat), entry);
        }
        for specialty in snapshot.specialties {
            self.specialties.insert(specialty.id, specialty);
        }
        for record in snapshot.characters {
            self.characters.insert(record.id, record);
        }
        tracing::info!(
            definitions = self.definitions.len(),
            entries = self.entries.len(),
            characters = self.characters.len(),
            "Snapshot imported"
        );
        Ok(())
    }

    /// Write the snapshot to a sibling file, then rename it over `path`.
    ///
    /// A failed write leaves the previous snapshot in place.
    pub fn save_to(&self, path: &Path) -> Result<(), RepoError> {
        let json = serde_json::to_string_pretty(&self.export_snapshot())
            .map_err(RepoError::serialization)?;
        let staging = staging_path(path);
        std::fs::write(&staging, json).map_err(|e| RepoError::io("save_snapshot", e))?;
        if let Err(e) = std::fs::rename(&staging, path) {
            let _ = std::fs::remove_file(&staging);
            return Err(RepoError::io("replace_snapshot", e));
        }
        tracing::info!(path = %path.display(), "Snapshot saved");
        Ok(())
    }

    /// Build a store from a snapshot file.
    pub fn load_from(path: &Path, clock: Arc<dyn ClockPort>) -> Result<Self, RepoError> {
        let json = std::fs::read_to_string(path).map_err(|e| RepoError::io("load_snapshot", e))?;
        let snapshot: Snapshot = serde_json::from_str(&json).map_err(RepoError::serialization)?;
        let store = Self::new(clock);
        store.import_snapshot(snapshot)?;
        tracing::info!(path = %path.display(), "Snapshot loaded");
        Ok(store)
    }

    /// Load `path` if it exists, otherwise start empty.
    ///
    /// An unreadable snapshot is an error rather than an empty store, so
    /// the next save cannot overwrite it.
    pub fn open_snapshot(path: Option<&Path>, clock: Arc<dyn ClockPort>) -> Result<Self, RepoError> {
        match path {
            Some(path) if path.exists() => Self::load_from(path, clock),
            _ => Ok(Self::new(clock)),
        }
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
