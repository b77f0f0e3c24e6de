//! Traits and types describing read-only world data.
//!
//! Oracles expose enemy, boss, and unlock definitions so rules can look up
//! templates without coupling to a concrete loader. Randomness is also
//! injected from here through [`RandomSource`].
mod definitions;
mod oracles;
mod rng;
mod unlocks;

pub use definitions::{BossDefinition, ELITE_PREFIX, EnemyDefinition};
pub use oracles::{BossOracle, EnemyOracle, UnlockOracle};
pub use rng::{PcgRng, RandomSource, SequenceRng, pick, shuffle};
pub use unlocks::{UnlockCondition, UnlockDefinition, UnlockItemKind};
