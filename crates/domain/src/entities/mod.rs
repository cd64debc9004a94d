//! Catalog and ledger records.
//!
//! These are plain rows: the persistence layer owns them, the engine's
//! handlers are the only code that mutates them.

mod character_record;
mod stat_definition;
mod stat_entry;

pub use character_record::{CharacterRecord, TemplateKey};
pub use stat_definition::StatDefinition;
pub use stat_entry::{CharacterSpecialty, CharacterStatEntry, LedgerRow};
