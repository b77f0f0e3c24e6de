use std::sync::LazyLock;

use game_core::{EffectKind, EffectValue, Rarity, Treasure, TreasureKind};

/// Treasures that can drop from rooms, in draw order.
pub static TREASURE_POOL: LazyLock<Vec<Treasure>> = LazyLock::new(|| {
    use EffectKind::*;

    let major = |id: &str, name: &str, description: &str, rarity, effects: &[(EffectKind, i32)]| {
        Treasure::new(
            id,
            name,
            description,
            rarity,
            TreasureKind::MajorRelic,
            effects.iter().map(|&(k, v)| EffectValue::new(k, v)).collect(),
        )
    };
    let consumable = |id: &str, name: &str, description: &str, kind, value| {
        Treasure::new(
            id,
            name,
            description,
            Rarity::Common,
            TreasureKind::Consumable,
            vec![EffectValue::new(kind, value)],
        )
    };

    vec![
        // common
        major("relic_hp_boost", "Ring of Fortitude", "Max HP +15", Rarity::Common, &[(MaxHpBoost, 15)]),
        major("relic_speed_boost", "Ring of Agility", "Speed +8", Rarity::Common, &[(SpeedBoost, 8)]),
        major("relic_damage_boost", "Ring of Strength", "Bonus damage +3", Rarity::Common, &[(BonusDamage, 3)]),
        major("relic_evasion_boost", "Ring of Evasion", "Evasion +8%", Rarity::Common, &[(EvasionBoost, 8)]),
        major("relic_accuracy_boost", "Ring of Precision", "Accuracy +8%", Rarity::Common, &[(AccuracyBoost, 8)]),
        // rare
        major(
            "relic_berserker",
            "Berserker's Pendant",
            "Max HP +20, bonus damage +5, damage taken +2",
            Rarity::Rare,
            &[(MaxHpBoost, 20), (BonusDamage, 5), (DamageReduction, -2)],
        ),
        major(
            "relic_tank",
            "Fortress Shield",
            "Max HP +30, barrier +30, speed -10",
            Rarity::Rare,
            &[(MaxHpBoost, 30), (Barrier, 30), (SpeedBoost, -10)],
        ),
        major(
            "relic_assassin",
            "Assassin's Dagger",
            "Critical chance +25%, evasion +10%",
            Rarity::Rare,
            &[(Critical, 25), (EvasionBoost, 10)],
        ),
        major(
            "relic_plague",
            "Plague Vial",
            "Damage over time +10, enemy attack -20%",
            Rarity::Rare,
            &[(DotDamage, 10), (AttackDown, 20)],
        ),
        // epic
        major(
            "relic_storm",
            "Storm Orb",
            "Area attack, bonus damage +4",
            Rarity::Epic,
            &[(AreaAttack, 1), (BonusDamage, 4)],
        ),
        consumable("consumable_hp_potion", "Vitality Potion", "Max HP +15 (single use)", MaxHpBoost, 15),
        consumable("consumable_barrier_potion", "Barrier Potion", "Barrier +20 (single use)", Barrier, 20),
        consumable("consumable_speed_potion", "Swiftness Potion", "Speed +10 (single use)", SpeedBoost, 10),
    ]
});

/// Naming data for a minor relic that levels up one effect kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MinorRelicTemplate {
    pub effect: EffectKind,
    pub name: &'static str,
    pub description: &'static str,
    pub rarity: Rarity,
}

impl MinorRelicTemplate {
    const fn common(effect: EffectKind, name: &'static str, description: &'static str) -> Self {
        Self {
            effect,
            name,
            description,
            rarity: Rarity::Common,
        }
    }

    /// Builds the relic: one level of `effect`, tagged as its upgrade target.
    pub fn instantiate(&self, id: impl Into<String>) -> Treasure {
        Treasure::new(
            id,
            self.name,
            self.description,
            self.rarity,
            TreasureKind::MinorRelic,
            vec![EffectValue::new(self.effect, 1)],
        )
        .with_upgrade_target(self.effect)
    }
}

/// Upgradeable effect kinds, in candidate order.
pub const MINOR_RELIC_TEMPLATES: [MinorRelicTemplate; 10] = [
    MinorRelicTemplate::common(EffectKind::MaxHpBoost, "Crystal of Vitality", "Raises the level of max HP effects"),
    MinorRelicTemplate::common(EffectKind::SpeedBoost, "Crystal of Agility", "Raises the level of speed effects"),
    MinorRelicTemplate::common(EffectKind::BonusDamage, "Crystal of Strength", "Raises the level of bonus damage effects"),
    MinorRelicTemplate::common(EffectKind::Critical, "Crystal of Fortune", "Raises the level of critical chance effects"),
    MinorRelicTemplate::common(EffectKind::EvasionBoost, "Crystal of Evasion", "Raises the level of evasion effects"),
    MinorRelicTemplate::common(EffectKind::AccuracyBoost, "Crystal of Precision", "Raises the level of accuracy effects"),
    MinorRelicTemplate::common(EffectKind::Barrier, "Crystal of Warding", "Raises the level of barrier effects"),
    MinorRelicTemplate::common(EffectKind::Lifesteal, "Crystal of Thirst", "Raises the level of lifesteal effects"),
    MinorRelicTemplate::common(EffectKind::DamageReduction, "Crystal of Iron", "Raises the level of damage reduction effects"),
    MinorRelicTemplate::common(EffectKind::DotDamage, "Crystal of Venom", "Raises the level of damage over time effects"),
];

pub fn minor_relic_template(effect: EffectKind) -> Option<&'static MinorRelicTemplate> {
    MINOR_RELIC_TEMPLATES.iter().find(|t| t.effect == effect)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_composition() {
        let majors = TREASURE_POOL
            .iter()
            .filter(|t| t.kind == TreasureKind::MajorRelic)
            .count();
        let consumables = TREASURE_POOL
            .iter()
            .filter(|t| t.kind == TreasureKind::Consumable)
            .count();
        assert_eq!(majors, 10);
        assert_eq!(consumables, 3);
        assert!(TREASURE_POOL.iter().all(|t| t.kind != TreasureKind::MinorRelic));
    }

    #[test]
    fn test_pool_ids_are_unique() {
        let mut ids: Vec<_> = TREASURE_POOL.iter().map(|t| t.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), TREASURE_POOL.len());
    }

    #[test]
    fn test_minor_relic_instantiation() {
        let template = minor_relic_template(EffectKind::Lifesteal).unwrap();
        let relic = template.instantiate("minor_relic_lifesteal_1");

        assert_eq!(relic.kind, TreasureKind::MinorRelic);
        assert_eq!(relic.upgrade_target, Some(EffectKind::Lifesteal));
        assert_eq!(relic.effects, vec![EffectValue::new(EffectKind::Lifesteal, 1)]);
    }

    #[test]
    fn test_area_attack_has_no_template() {
        assert!(minor_relic_template(EffectKind::AreaAttack).is_none());
    }
}
