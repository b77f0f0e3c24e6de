use game_core::{UnlockCondition, UnlockDefinition, UnlockItemKind};

pub fn default_unlocks() -> Vec<UnlockDefinition> {
    vec![
        UnlockDefinition::new(
            "hp_ring",
            UnlockItemKind::Treasure,
            UnlockCondition::Always,
            "Ring of Vitality",
            "A ring that raises maximum HP",
        ),
        UnlockDefinition::new(
            "speed_ring",
            UnlockItemKind::Treasure,
            UnlockCondition::Always,
            "Ring of Haste",
            "A ring that raises speed",
        ),
        UnlockDefinition::new(
            "iron_sword",
            UnlockItemKind::Treasure,
            UnlockCondition::Always,
            "Iron Sword",
            "A plain but dependable blade",
        ),
        UnlockDefinition::new(
            "first_victory",
            UnlockItemKind::Trophy,
            UnlockCondition::FirstClear,
            "First Victory",
            "Cleared the dungeon for the first time",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_trophy_needs_a_clear() {
        let defs = default_unlocks();
        let initial: Vec<_> = defs.iter().filter(|d| d.is_initial()).collect();
        assert_eq!(initial.len(), 3);
        assert!(initial.iter().all(|d| d.item_kind == UnlockItemKind::Treasure));
    }
}
