//! Unlock rule evaluation.

use game_core::{UnlockCondition, UnlockDefinition, UnlockItemKind};

use super::meta::{GameStats, MetaProgress};

pub fn check_unlock_condition(condition: &UnlockCondition, stats: &GameStats) -> bool {
    match condition {
        UnlockCondition::Always => true,
        UnlockCondition::FirstClear => stats.total_clears >= 1,
        UnlockCondition::BossKill(id) => stats.bosses_killed.iter().any(|b| b == id),
        UnlockCondition::ClearCount(n) => stats.total_clears >= *n,
        UnlockCondition::FloorReached(n) => stats.max_floor_reached >= *n,
        UnlockCondition::TreasureCollected(id) => {
            stats.treasures_collected.iter().any(|t| t == id)
        }
    }
}

/// Unlocks every item whose condition holds.
///
/// Conditions are checked against the stats `meta` had on entry.
#[must_use]
pub fn process_unlocks(meta: MetaProgress, definitions: &[UnlockDefinition]) -> MetaProgress {
    let stats = meta.stats.clone();
    definitions
        .iter()
        .filter(|def| check_unlock_condition(&def.condition, &stats))
        .fold(meta, |meta, def| match def.item_kind {
            UnlockItemKind::Trophy => meta.unlock_trophy(&def.item_id),
            UnlockItemKind::Treasure => meta.unlock_treasure(&def.item_id),
        })
}

/// Ids available from the very first run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InitialUnlocks {
    pub trophies: Vec<String>,
    pub treasures: Vec<String>,
}

pub fn initial_unlocked_ids(definitions: &[UnlockDefinition]) -> InitialUnlocks {
    let mut initial = InitialUnlocks::default();
    for def in definitions.iter().filter(|d| d.is_initial()) {
        match def.item_kind {
            UnlockItemKind::Trophy => initial.trophies.push(def.item_id.clone()),
            UnlockItemKind::Treasure => initial.treasures.push(def.item_id.clone()),
        }
    }
    initial
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> GameStats {
        GameStats {
            total_runs: 4,
            total_clears: 2,
            max_floor_reached: 3,
            bosses_killed: vec!["dragon_lord".into()],
            treasures_collected: vec!["relic_storm".into()],
        }
    }

    #[test]
    fn test_conditions() {
        let stats = stats();
        assert!(check_unlock_condition(&UnlockCondition::Always, &stats));
        assert!(check_unlock_condition(&UnlockCondition::FirstClear, &stats));
        assert!(check_unlock_condition(&UnlockCondition::ClearCount(2), &stats));
        assert!(!check_unlock_condition(&UnlockCondition::ClearCount(3), &stats));
        assert!(check_unlock_condition(&UnlockCondition::FloorReached(3), &stats));
        assert!(!check_unlock_condition(&UnlockCondition::FloorReached(4), &stats));
        assert!(check_unlock_condition(
            &UnlockCondition::BossKill("dragon_lord".into()),
            &stats
        ));
        assert!(!check_unlock_condition(
            &UnlockCondition::TreasureCollected("relic_tank".into()),
            &stats
        ));
        assert!(!check_unlock_condition(
            &UnlockCondition::FirstClear,
            &GameStats::default()
        ));
    }

    #[test]
    fn test_process_unlocks_on_fresh_progress() {
        let definitions = game_content::default_unlocks();
        let meta = process_unlocks(MetaProgress::initial(), &definitions);

        assert_eq!(meta.unlocked_treasures.len(), 3);
        assert!(meta.unlocked_trophies.is_empty());
    }

    #[test]
    fn test_process_unlocks_after_clear() {
        let definitions = game_content::default_unlocks();
        let meta = MetaProgress::initial().record_clear(3);
        let meta = process_unlocks(meta, &definitions);

        assert!(meta.is_trophy_unlocked("first_victory"));
        let again = process_unlocks(meta.clone(), &definitions);
        assert_eq!(again, meta);
    }

    #[test]
    fn test_initial_ids() {
        let initial = initial_unlocked_ids(&game_content::default_unlocks());
        assert_eq!(initial.treasures, vec!["hp_ring", "speed_ring", "iron_sword"]);
        assert!(initial.trophies.is_empty());
    }
}
