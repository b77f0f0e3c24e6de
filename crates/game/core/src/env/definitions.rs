//! Enemy and boss master data.
//!
//! Definitions are read-only templates. They are loaded by `game-content`,
//! served through [`super::EnemyOracle`] / [`super::BossOracle`], and turned
//! into [`Entity`] values when an encounter is built.

use crate::items::Treasure;
use crate::state::{AiKind, Entity, EntityId, Position, Stats};

/// Prefix marking an enemy id as elite.
pub const ELITE_PREFIX: &str = "elite_";

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EnemyDefinition {
    pub id: String,
    pub name: String,
    pub symbol: char,
    pub stats: Stats,
    #[cfg_attr(feature = "serde", serde(rename = "aiType"))]
    pub ai: AiKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub equipped_relics: Vec<Treasure>,
}

impl EnemyDefinition {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        symbol: char,
        stats: Stats,
        ai: AiKind,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            symbol,
            stats,
            ai,
            equipped_relics: Vec::new(),
        }
    }

    pub fn is_elite(&self) -> bool {
        self.id.starts_with(ELITE_PREFIX)
    }

    /// Full-health entity from this template.
    pub fn spawn(&self, id: EntityId, position: Position) -> Entity {
        Entity::enemy(id, self.id.clone(), self.symbol, position, self.stats, self.ai)
            .with_relics(self.equipped_relics.clone())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BossDefinition {
    pub id: String,
    pub name: String,
    pub symbol: char,
    pub stats: Stats,
    #[cfg_attr(feature = "serde", serde(default))]
    pub equipped_relics: Vec<Treasure>,
}

impl BossDefinition {
    /// Full-health boss entity. Bosses always use the boss policy.
    pub fn spawn(&self, id: EntityId, position: Position) -> Entity {
        Entity::enemy(
            id,
            self.id.clone(),
            self.symbol,
            position,
            self.stats,
            AiKind::Boss,
        )
        .with_relics(self.equipped_relics.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_copies_template() {
        let def = EnemyDefinition::new("elite_orc", "Orc Champion", 'O', Stats::new(80, 12, 4, 95), AiKind::Melee);
        assert!(def.is_elite());

        let orc = def.spawn(EntityId(3), Position::new(11, 5));
        assert_eq!(orc.id, EntityId(3));
        assert_eq!(orc.template, "elite_orc");
        assert_eq!(orc.hp, 80);
        assert_eq!(orc.ai(), Some(AiKind::Melee));
        assert!(!orc.is_boss());
    }

    #[test]
    fn test_boss_spawn_uses_boss_policy() {
        let def = BossDefinition {
            id: "lich".into(),
            name: "Lich".into(),
            symbol: 'L',
            stats: Stats::new(120, 18, 6, 12),
            equipped_relics: Vec::new(),
        };
        let lich = def.spawn(EntityId(1), Position::ORIGIN);
        assert!(lich.is_boss());
        assert_eq!(lich.ai(), Some(AiKind::Boss));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_enemy_json_shape() {
        let json = r#"{
            "id": "goblin",
            "name": "Goblin",
            "symbol": "g",
            "stats": { "maxHp": 30, "attack": 6, "defense": 2, "speed": 90 },
            "aiType": "melee"
        }"#;
        let def: EnemyDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(def.stats.max_hp, 30);
        assert_eq!(def.ai, AiKind::Melee);
        assert!(def.equipped_relics.is_empty());
    }
}
