//! Scenario tests over the in-memory store.
//!
//! Each test builds a complete `App` on a fresh `MemoryStore`, so the
//! catalog, ledger, handlers, and use cases all run for real.
//!
//! ```bash
//! cargo test -p storyteller-engine --lib e2e_tests
//! ```

mod catalog_tests;
mod e2e_helpers;
mod editor_flow_tests;
mod power_tests;
mod snapshot_tests;

pub use e2e_helpers::*;
