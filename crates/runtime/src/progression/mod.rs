//! Meta progression: lifetime statistics and unlocks.
mod meta;
mod unlocks;

pub use meta::{GameStats, META_VERSION, MetaProgress, TreasureUnlock, TrophyUnlock};
pub use unlocks::{InitialUnlocks, check_unlock_condition, initial_unlocked_ids, process_unlocks};
