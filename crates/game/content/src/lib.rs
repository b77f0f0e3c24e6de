//! Data-driven content definitions and loaders.
//!
//! This crate houses the built-in game content and loaders for data files:
//! - Enemy, boss and unlock master data (JSON)
//! - The droppable treasure pool (RON)
//! - Combat and dungeon tunables (TOML)
//!
//! Built-in tables in [`builtin`] double as the fallback whenever a data file
//! is missing or malformed. Content is consumed by runtime oracles and never
//! appears in combat state.

pub mod builtin;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use builtin::{
    DEFAULT_BOSS_ID, MINOR_RELIC_TEMPLATES, MinorRelicTemplate, TREASURE_POOL, default_bosses,
    default_enemies, default_unlocks, minor_relic_template,
};

#[cfg(feature = "loaders")]
pub use loaders::{
    BossLoader, ConfigLoader, ContentFactory, EnemyLoader, GameSettings, LoadResult,
    TreasureLoader, UnlockLoader,
};
