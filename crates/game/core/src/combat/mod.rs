//! Combat resolution: the damage pipeline and lifesteal.
pub mod damage;

pub use damage::{HitResult, apply_damage, calculate_damage, damage, lifesteal_heal};
