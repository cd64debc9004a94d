//! Repository port traits for catalog, ledger, and character storage.
//!
//! Every call completes its write before returning. Handlers never batch or
//! defer writes, so a failed validation leaves storage untouched.

use storyteller_domain::{
    CharacterId, CharacterRecord, CharacterSpecialty, CharacterStatEntry, LedgerRow, SpecialtyId,
    StatDefinition, StatId, StatPath,
};

use super::error::RepoError;

// =============================================================================
// Stat Catalog
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait StatCatalogRepo: Send + Sync {
    /// Return the row for `path`, inserting it if absent.
    ///
    /// Must be idempotent and yield a single row when two callers race on
    /// first creation of the same path. `creator` is only recorded on insert.
    fn get_or_create(
        &self,
        path: &StatPath,
        creator: Option<CharacterId>,
    ) -> Result<StatDefinition, RepoError>;

    fn find(&self, path: &StatPath) -> Result<Option<StatDefinition>, RepoError>;
}

// =============================================================================
// Character Stat Ledger
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait StatLedgerRepo: Send + Sync {
    fn get_entry(
        &self,
        character: CharacterId,
        stat: StatId,
    ) -> Result<Option<CharacterStatEntry>, RepoError>;

    /// Upsert keyed on `(character, stat)`.
    fn save_entry(&self, entry: &CharacterStatEntry) -> Result<(), RepoError>;

    /// Delete the entry and every specialty under it.
    fn delete_entry(&self, character: CharacterId, stat: StatId) -> Result<(), RepoError>;

    /// Every entry of `character` whose definition path starts with `prefix`,
    /// joined with that definition.
    fn list_under(
        &self,
        character: CharacterId,
        prefix: &StatPath,
    ) -> Result<Vec<LedgerRow>, RepoError>;

    fn list_specialties(&self, character: CharacterId)
        -> Result<Vec<CharacterSpecialty>, RepoError>;

    /// Upsert keyed on `(entry, name)`.
    fn save_specialty(&self, specialty: &CharacterSpecialty) -> Result<(), RepoError>;

    fn delete_specialty(&self, id: SpecialtyId) -> Result<(), RepoError>;
}

// =============================================================================
// Character Records
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait CharacterRepo: Send + Sync {
    fn get(&self, id: CharacterId) -> Result<Option<CharacterRecord>, RepoError>;
    fn find_by_name(&self, name: &str) -> Result<Option<CharacterRecord>, RepoError>;
    fn save(&self, record: &CharacterRecord) -> Result<(), RepoError>;
}
