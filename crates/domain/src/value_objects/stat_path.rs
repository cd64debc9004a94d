//! Hierarchical catalog address of a stat or power.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::dramatic_capitalize;
use crate::error::StoryError;

/// Deepest path the catalog stores (family / main / sub / name).
pub const MAX_PATH_DEPTH: usize = 4;

/// Ordered, normalized catalog path such as `Abilities/Melee` or
/// `Charms/Solar/Athletics/Seven Shadow Evasion`.
///
/// Construction normalizes every segment, so two paths built from
/// differently-cased text compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct StatPath(Vec<String>);

impl StatPath {
    pub fn new<I, S>(segments: I) -> Result<Self, StoryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw: Vec<String> = segments
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect();
        if raw.is_empty() {
            return Err(StoryError::invalid_path("a path needs at least one segment"));
        }
        if raw.len() > MAX_PATH_DEPTH {
            return Err(StoryError::invalid_path(format!(
                "depth limit is {MAX_PATH_DEPTH}, got {}",
                raw.join("/")
            )));
        }
        let normalized: Vec<String> = raw.iter().map(|s| dramatic_capitalize(s)).collect();
        if normalized.iter().any(String::is_empty) {
            return Err(StoryError::invalid_path(format!(
                "empty segment in {}",
                raw.join("/")
            )));
        }
        Ok(Self(normalized))
    }

    /// Wrap segments that are already normalized (family roots).
    pub(crate) fn from_normalized(segments: Vec<String>) -> Self {
        Self(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn segment(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Final segment - the stat or power name.
    pub fn name(&self) -> &str {
        self.0.last().map(String::as_str).unwrap_or_default()
    }

    pub fn starts_with(&self, prefix: &StatPath) -> bool {
        self.0.starts_with(&prefix.0)
    }

    /// Extend this path by one segment.
    pub fn child(&self, segment: impl AsRef<str>) -> Result<Self, StoryError> {
        Self::new(self.0.iter().map(String::as_str).chain([segment.as_ref()]))
    }
}

impl fmt::Display for StatPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("/"))
    }
}

impl TryFrom<Vec<String>> for StatPath {
    type Error = StoryError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StatPath> for Vec<String> {
    fn from(value: StatPath) -> Self {
        value.0
    }
}
