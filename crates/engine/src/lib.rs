//! Storyteller Engine library.
//!
//! Character-sheet bookkeeping for a text game: the stat catalog and
//! per-character ledger, one handler per stat family, and a line-oriented
//! editor on top.
//!
//! ## Structure
//!
//! - `entities/` - Catalog, ledger, and per-family handlers
//! - `use_cases/` - Sheet-level operations spanning families
//! - `infrastructure/` - Ports plus the in-memory store and configuration
//! - `api/` - Editor command layer
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod entities;
pub mod infrastructure;
pub mod use_cases;

/// Scenario tests over the in-memory store.
#[cfg(test)]
mod e2e_tests;

pub use app::App;
