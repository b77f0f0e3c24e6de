//! Droppable treasure pool.
use game_core::Treasure;

/// The pool room rewards are drawn from. Never empty.
pub struct TreasureOracleImpl {
    pool: Vec<Treasure>,
}

impl TreasureOracleImpl {
    /// Uses `pool`, or the built-in pool when `pool` is empty.
    pub fn from_pool(pool: Vec<Treasure>) -> Self {
        if pool.is_empty() {
            return Self::builtin();
        }
        Self { pool }
    }

    pub fn builtin() -> Self {
        Self {
            pool: game_content::TREASURE_POOL.clone(),
        }
    }

    pub fn pool(&self) -> &[Treasure] {
        &self.pool
    }
}
