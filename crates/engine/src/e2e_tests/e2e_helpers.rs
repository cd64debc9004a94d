//! Shared setup for scenario tests.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use storyteller_domain::{CharacterId, StoryError};

use crate::app::App;
use crate::entities::SheetError;
use crate::infrastructure::{clock::FixedClock, memory::MemoryStore, ports::ClockPort};
use crate::use_cases::SheetContext;

pub fn fixed_clock() -> Arc<dyn ClockPort> {
    Arc::new(FixedClock(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()))
}

/// A complete app on an empty store.
pub struct E2ETestContext {
    pub store: Arc<MemoryStore>,
    pub app: Arc<App>,
}

impl E2ETestContext {
    pub fn setup() -> Self {
        Self::with_store(Arc::new(MemoryStore::new(fixed_clock())))
    }

    pub fn with_store(store: Arc<MemoryStore>) -> Self {
        let app = Arc::new(App::in_memory(store.clone()));
        Self { store, app }
    }

    /// Create a character, optionally with a template, and return its sheet context.
    pub fn create_character(&self, name: &str, template: Option<&str>) -> SheetContext {
        let opened = self
            .app
            .use_cases
            .character_sheet
            .open(name, template)
            .expect("Opening character should succeed");
        assert!(opened.created, "{name} should be new");
        self.sheet(opened.record.id)
    }

    pub fn sheet(&self, id: CharacterId) -> SheetContext {
        self.app
            .use_cases
            .character_sheet
            .load(id)
            .expect("Loading character should succeed")
    }
}

/// Unwrap the player-facing error from a handler result.
pub fn story_error<T: std::fmt::Debug>(result: Result<T, SheetError>) -> StoryError {
    match result {
        Err(SheetError::Story(err)) => err,
        other => panic!("Expected a StoryError, got {other:?}"),
    }
}
