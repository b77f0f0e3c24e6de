use super::{EffectKind, Treasure};

/// Reward attached to a room, granted when the room is cleared.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reward {
    pub treasure: Treasure,
}

impl Reward {
    pub fn new(treasure: Treasure) -> Self {
        Self { treasure }
    }
}

/// Treasures the player has collected during the current run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    pub treasures: Vec<Treasure>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_treasures(treasures: Vec<Treasure>) -> Self {
        Self { treasures }
    }

    pub fn is_empty(&self) -> bool {
        self.treasures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.treasures.len()
    }

    /// True if any effect line of any treasure has this kind.
    pub fn has_effect(&self, kind: EffectKind) -> bool {
        self.treasures.iter().any(|t| t.has_effect(kind))
    }

    /// Sum of levels over every effect line of this kind.
    pub fn effect_level(&self, kind: EffectKind) -> u32 {
        self.treasures
            .iter()
            .flat_map(|t| t.effects.iter())
            .filter(|e| e.kind == kind)
            .map(|e| e.level)
            .sum()
    }

    /// Returns a new inventory with the reward's treasure appended.
    #[must_use]
    pub fn with_reward(&self, reward: &Reward) -> Self {
        let mut treasures = self.treasures.clone();
        treasures.push(reward.treasure.clone());
        Self { treasures }
    }
}
