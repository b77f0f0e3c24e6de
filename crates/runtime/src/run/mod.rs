//! Headless run loop: room navigation, combat, and rewards.
mod autoplay;
mod driver;
mod phase;

pub use autoplay::{AutoPlayer, RunSummary};
pub use driver::{EXTRA_REWARD_CHOICES, REST_HEAL_RATIO, RoomEntry, RunDriver};
pub use phase::GamePhase;
