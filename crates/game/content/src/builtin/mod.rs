//! Built-in content used whenever data files are missing or unreadable.

mod bestiary;
mod treasures;
mod unlocks;

pub use bestiary::{DEFAULT_BOSS_ID, default_bosses, default_enemies};
pub use treasures::{MINOR_RELIC_TEMPLATES, MinorRelicTemplate, TREASURE_POOL, minor_relic_template};
pub use unlocks::default_unlocks;
