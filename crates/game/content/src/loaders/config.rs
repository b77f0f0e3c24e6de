//! Game configuration loader.

use std::path::Path;

use game_core::{CombatConfig, DungeonOptions};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Tunables read from `config.toml`. Missing tables keep their defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub combat: CombatConfig,
    pub dungeon: DungeonOptions,
}

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load settings from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing GameSettings
    pub fn load(path: &Path) -> LoadResult<GameSettings> {
        let content = read_file(path)?;
        let settings: GameSettings = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[combat]\nhold_when_ready = true\n\n[dungeon]\nfloors_count = 5").unwrap();

        let settings = ConfigLoader::load(file.path()).unwrap();
        assert!(settings.combat.hold_when_ready);
        assert_eq!(settings.combat.default_ap_cost, CombatConfig::DEFAULT_AP_COST);
        assert_eq!(settings.dungeon.floors_count, 5);
        assert_eq!(
            settings.dungeon.max_rest_rooms_per_floor,
            DungeonOptions::DEFAULT_MAX_REST_ROOMS
        );
    }

    #[test]
    fn test_empty_config_is_default() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let settings = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(settings, GameSettings::default());
    }
}
