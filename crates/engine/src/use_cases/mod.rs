//! Use cases - User story orchestration.
//!
//! Use cases orchestrate across entity modules to fulfill one player
//! command that touches more than a single stat family.

pub mod character_sheet;

pub use character_sheet::{
    ChangeTemplate, CharacterSheetUseCases, ExtraFieldResult, OpenCharacterResult, ResourcePools,
    SheetContext,
};
