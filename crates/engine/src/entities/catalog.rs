//! Stat Catalog entity module.
//!
//! Maps hierarchical paths to shared definition rows, creating them on
//! first reference.

use std::sync::Arc;

use storyteller_domain::{CharacterId, StatDefinition, StatPath};
use tracing::debug;

use super::SheetError;
use crate::infrastructure::ports::{RepoError, StatCatalogRepo};

#[derive(Clone)]
pub struct StatCatalog {
    repo: Arc<dyn StatCatalogRepo>,
}

impl StatCatalog {
    pub fn new(repo: Arc<dyn StatCatalogRepo>) -> Self {
        Self { repo }
    }

    /// Normalize `segments` and return the shared row, creating it if absent.
    ///
    /// Fails with `InvalidPath` for empty paths or more than four segments.
    /// `creator` is recorded only when this call inserts the row.
    pub fn resolve_or_create<I, S>(
        &self,
        segments: I,
        creator: Option<CharacterId>,
    ) -> Result<StatDefinition, SheetError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let path = StatPath::new(segments)?;
        let definition = self.repo.get_or_create(&path, creator)?;
        debug!(stat = %definition.path, stat_id = %definition.id, "Catalog resolved");
        Ok(definition)
    }

    pub fn find(&self, path: &StatPath) -> Result<Option<StatDefinition>, RepoError> {
        self.repo.find(path)
    }
}
