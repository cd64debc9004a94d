//! Process configuration read from the environment.
//!
//! Game data is compiled in; only where the editor keeps its state and
//! which character it opens are configurable.

use std::path::PathBuf;

/// Name used when `STORYTELLER_CHARACTER` is unset.
pub const DEFAULT_CHARACTER: &str = "Unnamed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// JSON snapshot loaded at start and written on exit
    pub snapshot: Option<PathBuf>,
    pub character: String,
    /// Template text applied when the character is first created
    pub template: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            snapshot: None,
            character: DEFAULT_CHARACTER.to_string(),
            template: None,
        }
    }
}

impl EngineConfig {
    /// Read `STORYTELLER_*` variables from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        Self {
            snapshot: read("STORYTELLER_SNAPSHOT").map(PathBuf::from),
            character: read("STORYTELLER_CHARACTER").unwrap_or_else(|| DEFAULT_CHARACTER.into()),
            template: read("STORYTELLER_TEMPLATE"),
        }
    }
}
