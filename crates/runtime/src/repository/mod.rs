//! Repository layer for data that persists between runs.
//!
//! Static game content (enemies, bosses, unlock rules) is served by oracles;
//! repositories only hold what the player earns.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::{FileMetaRepository, SAVE_FILE};
pub use memory::InMemoryMetaRepository;
pub use traits::MetaRepository;
