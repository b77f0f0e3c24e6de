//! Runtime orchestration for the dungeon simulation.
//!
//! This crate wires `game-core` rules and `game-content` data into playable
//! runs. Consumers start a [`RunDriver`], hand each encounter to a
//! [`CombatSession`], and persist [`MetaProgress`] through a
//! [`MetaRepository`].
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes errors and the action provider abstraction
//! - [`providers`] hosts the AI policies
//! - [`dungeon`], [`rewards`], and [`encounter`] generate floors, loot, and fights
//! - [`session`] and [`run`] drive combat frames and whole runs
//! - [`progression`] and [`repository`] track and store meta progress
//! - [`oracle`] adapts static content with built-in fallbacks
pub mod api;
pub mod config;
pub mod dungeon;
pub mod encounter;
pub mod oracle;
pub mod progression;
pub mod providers;
pub mod repository;
pub mod rewards;
pub mod run;
pub mod session;

pub use api::{
    ActionProvider, ProviderKind, Result, RuntimeError, ScriptedActionProvider,
    WaitActionProvider,
};
pub use config::RuntimeConfig;
pub use dungeon::{Dungeon, Floor, Room, RoomStatus, RoomType};
pub use encounter::{EncounterFactory, apply_relic_effects_to_player};
pub use oracle::{
    BossOracleImpl, EnemyOracleImpl, OracleManager, TreasureOracleImpl, UnlockOracleImpl,
};
pub use progression::{GameStats, MetaProgress, process_unlocks};
pub use providers::{AiActionProvider, decide_action};
pub use repository::{
    FileMetaRepository, InMemoryMetaRepository, MetaRepository, RepositoryError,
};
pub use rewards::RewardGenerator;
pub use run::{AutoPlayer, GamePhase, RoomEntry, RunDriver, RunSummary};
pub use session::{CombatReport, CombatSession};
