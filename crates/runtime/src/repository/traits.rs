//! Repository traits for data that outlives a run.

use super::Result;
use crate::progression::MetaProgress;

/// Storage for the single [`MetaProgress`] record.
///
/// `load` never fails on bad data: a missing, unreadable, or outdated record
/// yields [`MetaProgress::initial`]. Errors are reserved for storage faults.
pub trait MetaRepository: Send + Sync {
    fn load(&self) -> Result<MetaProgress>;

    fn save(&self, meta: &MetaProgress) -> Result<()>;

    /// True if a record has been saved.
    fn has_save(&self) -> bool;

    /// Removes the record. Deleting a missing record succeeds.
    fn delete(&self) -> Result<()>;
}
