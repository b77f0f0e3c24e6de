//! Content factory for loading every data file from one directory.

use std::path::{Path, PathBuf};

use game_core::{BossDefinition, EnemyDefinition, Treasure, UnlockDefinition};

use crate::loaders::{
    BossLoader, ConfigLoader, EnemyLoader, GameSettings, LoadResult, TreasureLoader, UnlockLoader,
};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── enemies.json
/// ├── bosses.json
/// ├── unlocks.json
/// └── treasures.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const ENEMIES_FILE: &'static str = "enemies.json";
    pub const BOSSES_FILE: &'static str = "bosses.json";
    pub const UNLOCKS_FILE: &'static str = "unlocks.json";
    pub const TREASURES_FILE: &'static str = "treasures.ron";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load combat and dungeon tunables from `config.toml`.
    pub fn load_settings(&self) -> LoadResult<GameSettings> {
        ConfigLoader::load(&self.data_dir.join(Self::CONFIG_FILE))
    }

    /// Load enemy templates from `enemies.json`.
    pub fn load_enemies(&self) -> LoadResult<Vec<EnemyDefinition>> {
        EnemyLoader::load(&self.data_dir.join(Self::ENEMIES_FILE))
    }

    /// Load boss templates from `bosses.json`.
    pub fn load_bosses(&self) -> LoadResult<Vec<BossDefinition>> {
        BossLoader::load(&self.data_dir.join(Self::BOSSES_FILE))
    }

    /// Load unlock rules from `unlocks.json`.
    pub fn load_unlocks(&self) -> LoadResult<Vec<UnlockDefinition>> {
        UnlockLoader::load(&self.data_dir.join(Self::UNLOCKS_FILE))
    }

    /// Load the droppable treasure pool from `treasures.ron`.
    pub fn load_treasures(&self) -> LoadResult<Vec<Treasure>> {
        TreasureLoader::load(&self.data_dir.join(Self::TREASURES_FILE))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
