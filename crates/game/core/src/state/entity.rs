//! Combatants as immutable value objects.
//!
//! Every change produces a new [`Entity`]; the owning [`super::CombatState`]
//! swaps the updated copy into its entity list.

use strum::{Display, EnumString};

use super::{EntityId, Position};
use crate::items::Treasure;
use crate::stats::{AggregatedEffects, aggregate};

/// Base combat numbers. Immutable per entity instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Stats {
    pub max_hp: u32,
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
}

impl Stats {
    /// Starting stats of the player character.
    pub const PLAYER: Self = Self::new(100, 10, 5, 100);

    pub const fn new(max_hp: u32, attack: i32, defense: i32, speed: i32) -> Self {
        Self {
            max_hp,
            attack,
            defense,
            speed,
        }
    }
}

/// Decision policy attached to an enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AiKind {
    /// Close distance and attack.
    Melee,
    /// Melee with a chance to retreat at low health.
    Boss,
}

/// Closed set of combatant variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityKind {
    Player,
    Enemy { ai: AiKind, is_boss: bool },
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    /// Definition id this entity was spawned from (e.g. `"goblin"`).
    pub template: String,
    pub symbol: char,
    pub position: Position,
    /// Invariant: `hp <= stats.max_hp`.
    pub hp: u32,
    pub stats: Stats,
    pub relics: Vec<Treasure>,
}

impl Entity {
    /// Player at full health with base stats and no relics.
    pub fn player(position: Position) -> Self {
        Self {
            id: EntityId::PLAYER,
            kind: EntityKind::Player,
            template: "player".to_string(),
            symbol: '@',
            position,
            hp: Stats::PLAYER.max_hp,
            stats: Stats::PLAYER,
            relics: Vec::new(),
        }
    }

    /// Enemy at full health.
    pub fn enemy(
        id: EntityId,
        template: impl Into<String>,
        symbol: char,
        position: Position,
        stats: Stats,
        ai: AiKind,
    ) -> Self {
        Self {
            id,
            kind: EntityKind::Enemy {
                ai,
                is_boss: ai == AiKind::Boss,
            },
            template: template.into(),
            symbol,
            position,
            hp: stats.max_hp,
            stats,
            relics: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_relics(mut self, relics: Vec<Treasure>) -> Self {
        self.relics = relics;
        self
    }

    /// Replaces stats, keeping `hp` within the new maximum.
    #[must_use]
    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = stats;
        self.hp = self.hp.min(stats.max_hp);
        self
    }

    /// Sets current health, clamped to `[0, max_hp]`.
    #[must_use]
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp = hp.min(self.stats.max_hp);
        self
    }

    /// Unconditional relocation; occupancy is checked by the engine.
    #[must_use]
    pub fn moved_to(&self, position: Position) -> Self {
        Self {
            position,
            ..self.clone()
        }
    }

    /// `min(max_hp, hp + amount)`.
    #[must_use]
    pub fn healed(&self, amount: u32) -> Self {
        self.clone().with_hp(self.hp.saturating_add(amount))
    }

    pub fn is_dead(&self) -> bool {
        self.hp == 0
    }

    pub fn is_player(&self) -> bool {
        matches!(self.kind, EntityKind::Player)
    }

    pub fn is_enemy(&self) -> bool {
        matches!(self.kind, EntityKind::Enemy { .. })
    }

    pub fn is_boss(&self) -> bool {
        matches!(self.kind, EntityKind::Enemy { is_boss: true, .. })
    }

    pub fn ai(&self) -> Option<AiKind> {
        match self.kind {
            EntityKind::Enemy { ai, .. } => Some(ai),
            EntityKind::Player => None,
        }
    }

    /// `hp / max_hp`, or 0 for a zero maximum.
    pub fn hp_ratio(&self) -> f64 {
        if self.stats.max_hp == 0 {
            return 0.0;
        }
        f64::from(self.hp) / f64::from(self.stats.max_hp)
    }

    /// Bonuses from the equipped relics.
    pub fn effects(&self) -> AggregatedEffects {
        aggregate(&self.relics)
    }
}
