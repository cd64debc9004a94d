//! StatDefinition - canonical, shared identity of a named stat or power.
//!
//! One row exists per normalized path. Rows are created on first reference
//! and never deleted, since other characters may share them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{CharacterId, StatId};
use crate::value_objects::StatPath;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatDefinition {
    pub id: StatId,
    pub path: StatPath,
    /// Set only for player-coined names (Crafts, Merits, powers)
    pub creator: Option<CharacterId>,
    pub created_at: DateTime<Utc>,
}

impl StatDefinition {
    pub fn new(path: StatPath, creator: Option<CharacterId>, now: DateTime<Utc>) -> Self {
        Self {
            id: StatId::new(),
            path,
            creator,
            created_at: now,
        }
    }

    pub fn name(&self) -> &str {
        self.path.name()
    }
}
