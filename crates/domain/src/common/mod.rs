//! Common text utilities shared by the catalog, the handlers, and the editor.
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects, no I/O
//! - **One normalization** - every catalog path segment and player-coined
//!   name goes through [`dramatic_capitalize`] before it is stored or compared

pub mod matching;
pub mod string;

// Re-export commonly used functions at crate root for convenience
pub use matching::partial_match;
pub use string::{dramatic_capitalize, good_name, none_if_empty, MAX_NAME_LENGTH};
