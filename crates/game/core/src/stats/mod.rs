//! Derived stats computed from equipped relics.
pub mod effects;

pub use effects::{AggregatedEffects, aggregate};
