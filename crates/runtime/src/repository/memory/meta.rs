//! In-memory MetaRepository implementation for tests and local runs.

use std::sync::RwLock;

use crate::progression::MetaProgress;
use crate::repository::{MetaRepository, RepositoryError, Result};

pub struct InMemoryMetaRepository {
    meta: RwLock<Option<MetaProgress>>,
}

impl InMemoryMetaRepository {
    pub fn new() -> Self {
        Self {
            meta: RwLock::new(None),
        }
    }

    /// Create with a record already saved.
    pub fn with_meta(meta: MetaProgress) -> Self {
        Self {
            meta: RwLock::new(Some(meta)),
        }
    }
}

impl Default for InMemoryMetaRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MetaRepository for InMemoryMetaRepository {
    fn load(&self) -> Result<MetaProgress> {
        let meta = self.meta.read().map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(meta.clone().unwrap_or_else(MetaProgress::initial))
    }

    fn save(&self, meta: &MetaProgress) -> Result<()> {
        let mut slot = self
            .meta
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *slot = Some(meta.clone());
        Ok(())
    }

    fn has_save(&self) -> bool {
        self.meta.read().map(|m| m.is_some()).unwrap_or(false)
    }

    fn delete(&self) -> Result<()> {
        let mut slot = self
            .meta
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *slot = None;
        Ok(())
    }
}
