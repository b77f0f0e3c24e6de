use strum::{Display, EnumString};

use super::{EffectKind, EffectValue};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "camelCase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Rarity {
    Common,
    Rare,
    Epic,
}

/// Treasure category, which also drives the reward roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "camelCase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum TreasureKind {
    /// Strong standalone effects.
    MajorRelic,
    /// Levels up an effect the player already owns.
    MinorRelic,
    /// Single-use bonus.
    Consumable,
}

/// Item gained during a run. Equipped treasures feed effect aggregation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Treasure {
    pub id: String,
    pub name: String,
    pub description: String,
    pub rarity: Rarity,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: TreasureKind,
    pub effects: Vec<EffectValue>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub upgrade_target: Option<EffectKind>,
}

impl Treasure {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        rarity: Rarity,
        kind: TreasureKind,
        effects: Vec<EffectValue>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            rarity,
            kind,
            effects,
            upgrade_target: None,
        }
    }

    pub fn with_upgrade_target(mut self, target: EffectKind) -> Self {
        self.upgrade_target = Some(target);
        self
    }

    pub fn has_effect(&self, kind: EffectKind) -> bool {
        self.effects.iter().any(|e| e.kind == kind)
    }
}
