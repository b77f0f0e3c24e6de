//! Unlock rules for trophies and treasures carried across runs.

use strum::{Display, EnumString};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum UnlockItemKind {
    Trophy,
    Treasure,
}

/// Condition evaluated against lifetime run statistics.
///
/// Serialized as `{"type": "...", "value": ...}` with `value` omitted for
/// conditions that carry none.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", content = "value", rename_all = "camelCase")
)]
pub enum UnlockCondition {
    FirstClear,
    BossKill(String),
    ClearCount(u32),
    FloorReached(u32),
    TreasureCollected(String),
    Always,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct UnlockDefinition {
    pub item_id: String,
    #[cfg_attr(feature = "serde", serde(rename = "itemType"))]
    pub item_kind: UnlockItemKind,
    pub condition: UnlockCondition,
    pub display_name: String,
    pub description: String,
}

impl UnlockDefinition {
    pub fn new(
        item_id: impl Into<String>,
        item_kind: UnlockItemKind,
        condition: UnlockCondition,
        display_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            item_id: item_id.into(),
            item_kind,
            condition,
            display_name: display_name.into(),
            description: description.into(),
        }
    }

    /// Unlocked from the very first run.
    pub fn is_initial(&self) -> bool {
        self.condition == UnlockCondition::Always
    }
}
