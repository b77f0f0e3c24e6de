//! Damage calculation and application.

use crate::env::RandomSource;
use crate::state::Entity;

/// Result of one resolved hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitResult {
    /// Damage rolled, including damage over time.
    pub damage: u32,
    pub critical: bool,
}

/// Calculate damage from an attack.
///
/// # Formula
///
/// ```text
/// base  = attack - defense
/// base += attacker.bonus_damage
/// base *= (100 - defender.attack_down_percent) / 100
/// if roll[0,100) < attacker.critical_chance:
///     base *= attacker.critical_multiplier
/// base -= defender.damage_reduction
/// final = max(1, floor(base)) + attacker.dot_damage
/// ```
///
/// The critical roll is drawn on every call so replays consume the same
/// number of draws regardless of relics.
pub fn calculate_damage<R>(attacker: &Entity, defender: &Entity, rng: &mut R) -> HitResult
where
    R: RandomSource + ?Sized,
{
    let attacker_fx = attacker.effects();
    let defender_fx = defender.effects();

    let mut base = f64::from(attacker.stats.attack - defender.stats.defense);
    base += f64::from(attacker_fx.bonus_damage);
    base *= f64::from(100 - defender_fx.attack_down_percent) / 100.0;

    let roll = rng.percent();
    let critical = roll < f64::from(attacker_fx.critical_chance);
    if critical {
        base *= attacker_fx.critical_multiplier;
    }

    base -= f64::from(defender_fx.damage_reduction);

    let direct = base.floor().max(1.0) as i64;
    let total = (direct + i64::from(attacker_fx.dot_damage)).max(0);

    HitResult {
        damage: u32::try_from(total).unwrap_or(u32::MAX),
        critical,
    }
}

/// Apply damage to current HP, clamped to 0.
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

/// Resolves an attack, returning the updated defender and the hit.
pub fn damage<R>(attacker: &Entity, defender: &Entity, rng: &mut R) -> (Entity, HitResult)
where
    R: RandomSource + ?Sized,
{
    let hit = calculate_damage(attacker, defender, rng);
    let damaged = defender
        .clone()
        .with_hp(apply_damage(defender.hp, hit.damage));
    (damaged, hit)
}

/// Health restored to an attacker: `floor(hp_lost * percent / 100)`.
///
/// `hp_lost` is what the defender actually lost, not the rolled damage.
pub fn lifesteal_heal(hp_lost: u32, lifesteal_percent: i32) -> u32 {
    if lifesteal_percent <= 0 {
        return 0;
    }
    (u64::from(hp_lost) * lifesteal_percent as u64 / 100) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::SequenceRng;
    use crate::items::{EffectKind, EffectValue, Rarity, Treasure, TreasureKind};
    use crate::state::{AiKind, EntityId, Position, Stats};

    fn fighter(id: u32, attack: i32, defense: i32, hp: u32) -> Entity {
        Entity::enemy(
            EntityId(id),
            "dummy",
            'd',
            Position::new(id as i32, 0),
            Stats::new(hp, attack, defense, 100),
            AiKind::Melee,
        )
    }

    fn relic(effects: Vec<EffectValue>) -> Treasure {
        Treasure::new("r", "r", "", Rarity::Common, TreasureKind::MajorRelic, effects)
    }

    #[test]
    fn test_plain_attack() {
        let mut rng = SequenceRng::constant(0.99);
        let hit = calculate_damage(&fighter(1, 10, 0, 50), &fighter(2, 0, 5, 50), &mut rng);
        assert_eq!(hit, HitResult { damage: 5, critical: false });
    }

    #[test]
    fn test_minimum_damage_is_one() {
        let mut rng = SequenceRng::constant(0.5);
        let hit = calculate_damage(&fighter(1, 2, 0, 50), &fighter(2, 0, 20, 50), &mut rng);
        assert_eq!(hit.damage, 1);
    }

    #[test]
    fn test_critical_roll_always_consumed() {
        let mut rng = SequenceRng::constant(0.0);
        calculate_damage(&fighter(1, 10, 0, 50), &fighter(2, 0, 5, 50), &mut rng);
        assert_eq!(rng.consumed(), 1);
    }

    #[test]
    fn test_full_pipeline() {
        let attacker = fighter(1, 20, 0, 50).with_relics(vec![relic(vec![
            EffectValue::new(EffectKind::BonusDamage, 4),
            EffectValue::new(EffectKind::Critical, 50),
            EffectValue::new(EffectKind::DotDamage, 3),
        ])]);
        let defender = fighter(2, 0, 4, 100).with_relics(vec![relic(vec![
            EffectValue::new(EffectKind::AttackDown, 50),
            EffectValue::new(EffectKind::DamageReduction, 2),
        ])]);

        // (20 - 4 + 4) * 0.5 = 10, crit (roll 10 < 50) -> 15, -2 -> 13, +3 dot -> 16
        let mut rng = SequenceRng::constant(0.1);
        let hit = calculate_damage(&attacker, &defender, &mut rng);
        assert_eq!(hit, HitResult { damage: 16, critical: true });

        // roll 60 >= 50: no crit. 10 - 2 = 8, +3 -> 11
        let mut rng = SequenceRng::constant(0.6);
        let hit = calculate_damage(&attacker, &defender, &mut rng);
        assert_eq!(hit, HitResult { damage: 11, critical: false });
    }

    #[test]
    fn test_damage_clamps_hp_at_zero() {
        let mut rng = SequenceRng::constant(0.99);
        let (defender, hit) = damage(&fighter(1, 10, 0, 50), &fighter(2, 0, 5, 3), &mut rng);
        assert_eq!(hit.damage, 5);
        assert_eq!(defender.hp, 0);
        assert!(defender.is_dead());
    }

    #[test]
    fn test_lifesteal_uses_floor() {
        assert_eq!(lifesteal_heal(7, 50), 3);
        assert_eq!(lifesteal_heal(10, 0), 0);
        assert_eq!(lifesteal_heal(10, -20), 0);
    }
}
