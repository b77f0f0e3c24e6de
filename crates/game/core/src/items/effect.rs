use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Kind of bonus a relic grants.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "camelCase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum EffectKind {
    // stat boosts
    MaxHpBoost,
    Barrier,
    SpeedBoost,
    EvasionBoost,
    AccuracyBoost,

    // offense
    BonusDamage,
    Critical,
    AreaAttack,
    DotDamage,
    Lifesteal,

    // defense
    DamageReduction,

    // debuffs carried onto the wearer's opponents
    AttackDown,
    SpeedDown,
}

const fn default_level() -> u32 {
    1
}

/// One effect line on a treasure. `level` multiplies `value` when aggregated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectValue {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: EffectKind,
    pub value: i32,
    #[cfg_attr(feature = "serde", serde(default = "default_level"))]
    pub level: u32,
}

impl EffectValue {
    pub const fn new(kind: EffectKind, value: i32) -> Self {
        Self {
            kind,
            value,
            level: default_level(),
        }
    }

    pub const fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// Contribution to the aggregated total: `value * level`.
    pub const fn contribution(&self) -> i32 {
        self.value * self.level as i32
    }

    /// Same effect one level higher.
    #[must_use]
    pub const fn upgraded(self) -> Self {
        self.with_level(self.level + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_kind_names_are_camel_case() {
        assert_eq!(EffectKind::MaxHpBoost.to_string(), "maxHpBoost");
        assert_eq!(EffectKind::from_str("dotDamage"), Ok(EffectKind::DotDamage));
    }

    #[test]
    fn test_upgrade_scales_contribution() {
        let effect = EffectValue::new(EffectKind::BonusDamage, 3);
        assert_eq!(effect.contribution(), 3);

        let upgraded = effect.upgraded();
        assert_eq!(upgraded.level, 2);
        assert_eq!(upgraded.contribution(), 6);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_missing_level_defaults_to_one() {
        let effect: EffectValue =
            serde_json::from_str(r#"{"type":"damageReduction","value":5}"#).unwrap();
        assert_eq!(effect, EffectValue::new(EffectKind::DamageReduction, 5));
    }
}
