//! Treasure catalog loader.

use std::path::Path;

use game_core::Treasure;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Treasure catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreasureCatalog {
    pub treasures: Vec<Treasure>,
}

/// Loader for the droppable treasure pool from RON files.
pub struct TreasureLoader;

impl TreasureLoader {
    /// Load a treasure catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a TreasureCatalog
    ///
    /// # Returns
    ///
    /// Returns the treasures in file order.
    pub fn load(path: &Path) -> LoadResult<Vec<Treasure>> {
        let content = read_file(path)?;
        let catalog: TreasureCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse treasure catalog RON: {}", e))?;

        if catalog.treasures.is_empty() {
            anyhow::bail!("Treasure catalog {} is empty", path.display());
        }

        Ok(catalog.treasures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{EffectKind, Rarity, TreasureKind};
    use std::io::Write;

    #[test]
    fn test_load_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"(
                treasures: [
                    (
                        id: "relic_hp_boost",
                        name: "Ring of Fortitude",
                        description: "Max HP +15",
                        rarity: common,
                        type: majorRelic,
                        effects: [(type: maxHpBoost, value: 15)],
                    ),
                ],
            )"#
        )
        .unwrap();

        let treasures = TreasureLoader::load(file.path()).unwrap();
        assert_eq!(treasures.len(), 1);
        assert_eq!(treasures[0].rarity, Rarity::Common);
        assert_eq!(treasures[0].kind, TreasureKind::MajorRelic);
        assert_eq!(treasures[0].effects[0].kind, EffectKind::MaxHpBoost);
        assert_eq!(treasures[0].upgrade_target, None);
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(treasures: [])").unwrap();
        assert!(TreasureLoader::load(file.path()).is_err());
    }
}
