//! Deterministic combat rules and data types shared across crates.
//!
//! `game-core` defines the canonical rules (grid, pathfinding, initiative,
//! damage, relic effects) and exposes pure APIs. State flows through
//! [`engine::CombatEngine`], which takes a [`CombatState`] snapshot and returns
//! the next one. No function here performs I/O or reads a clock; every random
//! draw comes from an injected [`env::RandomSource`].
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod grid;
pub mod items;
pub mod state;
pub mod stats;

pub use action::{Action, ActionError, ActionKind};
pub use combat::{HitResult, lifesteal_heal};
pub use config::{CombatConfig, DungeonOptions};
pub use engine::{ActionOutcome, CombatEngine, Resolution, is_combat_over, is_victory};
pub use env::{
    BossDefinition, BossOracle, EnemyDefinition, EnemyOracle, PcgRng, RandomSource, SequenceRng,
    UnlockCondition, UnlockDefinition, UnlockItemKind, UnlockOracle,
};
pub use error::{ErrorContext, ErrorSeverity, GameError};
pub use grid::{Grid, distance, find_path, is_adjacent, is_valid_position};
pub use items::{EffectKind, EffectValue, Inventory, Rarity, Reward, Treasure, TreasureKind};
pub use state::{
    AiKind, CombatState, Entity, EntityId, EntityKind, InitializationError, Position, Stats,
    Timeline,
};
pub use stats::{AggregatedEffects, aggregate};
