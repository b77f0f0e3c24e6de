//! Content loaders for reading game data from files.
//!
//! Master data (enemies, bosses, unlocks) is JSON, the treasure catalog is RON
//! and tunables live in TOML. Every loader returns [`LoadResult`]; callers
//! decide whether to fall back to [`crate::builtin`] content.

pub mod config;
pub mod definitions;
pub mod factory;
pub mod treasure;

pub use config::{ConfigLoader, GameSettings};
pub use definitions::{BossLoader, EnemyLoader, UnlockLoader};
pub use factory::ContentFactory;
pub use treasure::{TreasureCatalog, TreasureLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
