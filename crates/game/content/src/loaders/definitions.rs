//! JSON loaders for enemy, boss and unlock master data.

use std::path::Path;

use game_core::{BossDefinition, EnemyDefinition, UnlockDefinition};
use serde::de::DeserializeOwned;

use crate::loaders::{LoadResult, read_file};

fn load_json_array<T: DeserializeOwned>(path: &Path, what: &str) -> LoadResult<Vec<T>> {
    let content = read_file(path)?;
    serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse {} JSON {}: {}", what, path.display(), e))
}

/// Loader for `enemies.json`: an array of [`EnemyDefinition`].
pub struct EnemyLoader;

impl EnemyLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<EnemyDefinition>> {
        load_json_array(path, "enemy definitions")
    }
}

/// Loader for `bosses.json`: an array of [`BossDefinition`].
pub struct BossLoader;

impl BossLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<BossDefinition>> {
        load_json_array(path, "boss definitions")
    }
}

/// Loader for `unlocks.json`: an array of [`UnlockDefinition`].
pub struct UnlockLoader;

impl UnlockLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<UnlockDefinition>> {
        load_json_array(path, "unlock definitions")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{AiKind, UnlockCondition};
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_enemies() {
        let file = write_temp(
            r#"[
                {"id":"goblin","name":"Goblin","symbol":"g",
                 "stats":{"maxHp":30,"attack":6,"defense":2,"speed":90},"aiType":"melee"},
                {"id":"elite_orc","name":"Orc Captain","symbol":"O",
                 "stats":{"maxHp":80,"attack":12,"defense":5,"speed":80},"aiType":"melee"}
            ]"#,
        );

        let enemies = EnemyLoader::load(file.path()).unwrap();
        assert_eq!(enemies.len(), 2);
        assert_eq!(enemies[0].stats.max_hp, 30);
        assert_eq!(enemies[1].ai, AiKind::Melee);
        assert!(enemies[1].is_elite());
        assert!(enemies[1].equipped_relics.is_empty());
    }

    #[test]
    fn test_load_bosses_with_relics() {
        let file = write_temp(
            r#"[{"id":"lich","name":"Lich","symbol":"L",
                 "stats":{"maxHp":120,"attack":20,"defense":8,"speed":12},
                 "equippedRelics":[{"id":"phylactery","name":"Phylactery","description":"",
                   "rarity":"epic","type":"majorRelic",
                   "effects":[{"type":"lifesteal","value":20}]}]}]"#,
        );

        let bosses = BossLoader::load(file.path()).unwrap();
        assert_eq!(bosses[0].equipped_relics[0].effects[0].level, 1);
    }

    #[test]
    fn test_load_unlocks() {
        let file = write_temp(
            r#"[{"itemId":"dragon_slayer","itemType":"trophy",
                 "condition":{"type":"bossKill","value":"dragon_lord"},
                 "displayName":"Dragon Slayer","description":"Defeat the Dragon Lord"}]"#,
        );

        let unlocks = UnlockLoader::load(file.path()).unwrap();
        assert_eq!(
            unlocks[0].condition,
            UnlockCondition::BossKill("dragon_lord".into())
        );
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = EnemyLoader::load(Path::new("/nonexistent/enemies.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/enemies.json"));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let file = write_temp(r#"{"not":"an array"}"#);
        assert!(BossLoader::load(file.path()).is_err());
    }
}
