//! Folding equipped relics into a single bonus table.
//!
//! Aggregation is a pure integer sum, so the result does not depend on the
//! order of relics or of their effect lines. The only non-summed fields are
//! `critical_multiplier` (fixed default) and `has_area_attack` (boolean OR).

use crate::config::CombatConfig;
use crate::items::{EffectKind, EffectValue, Treasure};

/// Derived bonuses for one entity. Recomputed on demand, never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AggregatedEffects {
    pub max_hp_boost: i32,
    pub barrier: i32,
    pub speed_boost: i32,
    pub evasion_boost: i32,
    pub accuracy_boost: i32,

    pub bonus_damage: i32,
    /// Additive percentage.
    pub critical_chance: i32,
    pub critical_multiplier: f64,
    pub has_area_attack: bool,
    pub dot_damage: i32,
    pub lifesteal_percent: i32,

    pub damage_reduction: i32,

    pub attack_down_percent: i32,
    pub speed_down_percent: i32,
}

impl AggregatedEffects {
    /// Table with every bonus at zero and the default critical multiplier.
    pub const fn empty() -> Self {
        Self {
            max_hp_boost: 0,
            barrier: 0,
            speed_boost: 0,
            evasion_boost: 0,
            accuracy_boost: 0,
            bonus_damage: 0,
            critical_chance: 0,
            critical_multiplier: CombatConfig::DEFAULT_CRITICAL_MULTIPLIER,
            has_area_attack: false,
            dot_damage: 0,
            lifesteal_percent: 0,
            damage_reduction: 0,
            attack_down_percent: 0,
            speed_down_percent: 0,
        }
    }

    fn apply(&mut self, effect: &EffectValue) {
        let value = effect.contribution();
        match effect.kind {
            EffectKind::MaxHpBoost => self.max_hp_boost += value,
            EffectKind::Barrier => self.barrier += value,
            EffectKind::SpeedBoost => self.speed_boost += value,
            EffectKind::EvasionBoost => self.evasion_boost += value,
            EffectKind::AccuracyBoost => self.accuracy_boost += value,
            EffectKind::BonusDamage => self.bonus_damage += value,
            EffectKind::Critical => self.critical_chance += value,
            EffectKind::AreaAttack => self.has_area_attack = true,
            EffectKind::DotDamage => self.dot_damage += value,
            EffectKind::Lifesteal => self.lifesteal_percent += value,
            EffectKind::DamageReduction => self.damage_reduction += value,
            EffectKind::AttackDown => self.attack_down_percent += value,
            EffectKind::SpeedDown => self.speed_down_percent += value,
        }
    }
}

impl Default for AggregatedEffects {
    fn default() -> Self {
        Self::empty()
    }
}

/// Sums every effect line of every relic.
pub fn aggregate<'a>(relics: impl IntoIterator<Item = &'a Treasure>) -> AggregatedEffects {
    let mut effects = AggregatedEffects::empty();
    for relic in relics {
        for effect in &relic.effects {
            effects.apply(effect);
        }
    }
    effects
}
