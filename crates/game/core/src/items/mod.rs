//! Treasures, their effect lines, and the run inventory.
mod effect;
mod inventory;
mod treasure;

pub use effect::{EffectKind, EffectValue};
pub use inventory::{Inventory, Reward};
pub use treasure::{Rarity, Treasure, TreasureKind};
