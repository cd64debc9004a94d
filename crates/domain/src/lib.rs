//! Storyteller domain: pure data and rules for Exalted-style character sheets.
//!
//! Nothing in this crate performs I/O or logs. Persistence, handlers and
//! the command surface live in `storyteller-engine`.

pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod stats;
pub mod templates;
pub mod value_objects;

pub use entities::{
    CharacterRecord, CharacterSpecialty, CharacterStatEntry, LedgerRow, StatDefinition,
    TemplateKey,
};

pub use error::StoryError;

pub use ids::{CharacterId, EntryId, SpecialtyId, StatId};

pub use stats::{
    parse_rating, CategoryRule, DefaultCategory, PowerFamily, StatDescriptor, StatFamily, CHARMS,
    EVOCATIONS, SPELLS,
};

pub use templates::{
    ExtraField, FieldKind, FlagBudget, KindDef, PoolFormula, SubCasteDef, TemplateDefinition,
    TemplateRegistry,
};

pub use value_objects::{FlagChange, FlagKind, Mark, StatPath, MAX_PATH_DEPTH};
