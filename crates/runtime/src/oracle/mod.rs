//! Runtime wrappers around static game content.
//!
//! These implementations expose the `game-core` oracle traits and bundle them
//! into an [`OracleManager`]. The data is immutable at runtime; dynamic state
//! lives in repositories, the dungeon, or [`game_core::CombatState`].
mod bosses;
mod enemies;
mod treasures;
mod unlocks;

use std::sync::Arc;

use game_content::ContentFactory;
use game_core::{BossOracle, EnemyOracle, UnlockOracle};

pub use bosses::BossOracleImpl;
pub use enemies::EnemyOracleImpl;
pub use treasures::TreasureOracleImpl;
pub use unlocks::UnlockOracleImpl;

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) enemies: Arc<EnemyOracleImpl>,
    pub(crate) bosses: Arc<BossOracleImpl>,
    pub(crate) unlocks: Arc<UnlockOracleImpl>,
    pub(crate) treasures: Arc<TreasureOracleImpl>,
}

impl OracleManager {
    /// Creates a new oracle manager
    pub fn new(
        enemies: Arc<EnemyOracleImpl>,
        bosses: Arc<BossOracleImpl>,
        unlocks: Arc<UnlockOracleImpl>,
        treasures: Arc<TreasureOracleImpl>,
    ) -> Self {
        Self {
            enemies,
            bosses,
            unlocks,
            treasures,
        }
    }

    /// Oracles over the built-in content only.
    pub fn builtin() -> Self {
        Self::new(
            Arc::new(EnemyOracleImpl::builtin()),
            Arc::new(BossOracleImpl::builtin()),
            Arc::new(UnlockOracleImpl::builtin()),
            Arc::new(TreasureOracleImpl::builtin()),
        )
    }

    /// Loads every table from `factory`, substituting built-in content for
    /// any file that is missing, malformed, or empty.
    pub fn load_or_builtin(factory: &ContentFactory) -> Self {
        let enemies = match factory.load_enemies() {
            Ok(defs) if !defs.is_empty() => EnemyOracleImpl::from_definitions(defs),
            Ok(_) => {
                tracing::warn!("Enemy definitions are empty, using built-in enemies");
                EnemyOracleImpl::builtin()
            }
            Err(e) => {
                tracing::warn!("{}; using built-in enemies", e);
                EnemyOracleImpl::builtin()
            }
        };

        let bosses = match factory.load_bosses() {
            Ok(defs) if !defs.is_empty() => BossOracleImpl::from_definitions(defs),
            Ok(_) => {
                tracing::warn!("Boss definitions are empty, using built-in bosses");
                BossOracleImpl::builtin()
            }
            Err(e) => {
                tracing::warn!("{}; using built-in bosses", e);
                BossOracleImpl::builtin()
            }
        };

        let unlocks = match factory.load_unlocks() {
            Ok(defs) => UnlockOracleImpl::from_definitions(defs),
            Err(e) => {
                tracing::warn!("{}; using built-in unlocks", e);
                UnlockOracleImpl::builtin()
            }
        };

        let treasures = match factory.load_treasures() {
            Ok(pool) => TreasureOracleImpl::from_pool(pool),
            Err(e) => {
                tracing::warn!("{}; using built-in treasure pool", e);
                TreasureOracleImpl::builtin()
            }
        };

        tracing::info!(
            "Loaded content from {}: {} enemies, {} bosses, {} unlocks, {} treasures",
            factory.data_dir().display(),
            enemies.definitions().len(),
            bosses.definitions().len(),
            unlocks.definitions().len(),
            treasures.pool().len()
        );

        Self::new(
            Arc::new(enemies),
            Arc::new(bosses),
            Arc::new(unlocks),
            Arc::new(treasures),
        )
    }

    pub fn enemies(&self) -> &EnemyOracleImpl {
        &self.enemies
    }

    pub fn bosses(&self) -> &BossOracleImpl {
        &self.bosses
    }

    pub fn unlocks(&self) -> &UnlockOracleImpl {
        &self.unlocks
    }

    pub fn treasures(&self) -> &TreasureOracleImpl {
        &self.treasures
    }
}

impl Default for OracleManager {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_data_dir_uses_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let oracles = OracleManager::load_or_builtin(&ContentFactory::new(dir.path()));

        assert_eq!(oracles.enemies().definitions().len(), 2);
        assert_eq!(oracles.bosses().ids(), vec!["dragon_lord"]);
        assert_eq!(oracles.unlocks().definitions().len(), 4);
        assert_eq!(
            oracles.treasures().pool().len(),
            game_content::TREASURE_POOL.len()
        );
    }

    #[test]
    fn test_empty_enemy_file_uses_builtin() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(ContentFactory::ENEMIES_FILE), "[]").unwrap();

        let oracles = OracleManager::load_or_builtin(&ContentFactory::new(dir.path()));
        assert_eq!(oracles.enemies().normal_ids(), vec!["goblin", "skeleton"]);
    }
}
