//! Progress carried across runs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Save format version understood by this build.
pub const META_VERSION: u32 = 1;

/// Lifetime statistics over every run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStats {
    pub total_runs: u32,
    pub total_clears: u32,
    pub max_floor_reached: u32,
    /// Distinct boss ids, in first-kill order.
    pub bosses_killed: Vec<String>,
    /// Every collected treasure id, duplicates included.
    pub treasures_collected: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrophyUnlock {
    pub trophy_id: String,
    pub unlocked: bool,
    pub unlocked_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreasureUnlock {
    pub treasure_id: String,
    pub unlocked: bool,
    pub unlocked_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaProgress {
    pub version: u32,
    pub stats: GameStats,
    pub unlocked_trophies: Vec<TrophyUnlock>,
    pub unlocked_treasures: Vec<TreasureUnlock>,
    pub last_played_at: DateTime<Utc>,
}

impl MetaProgress {
    /// Empty progress stamped with the current time.
    pub fn initial() -> Self {
        Self {
            version: META_VERSION,
            stats: GameStats::default(),
            unlocked_trophies: Vec::new(),
            unlocked_treasures: Vec::new(),
            last_played_at: Utc::now(),
        }
    }

    /// Unlocks a trophy. Already unlocked ids are left untouched.
    #[must_use]
    pub fn unlock_trophy(mut self, trophy_id: &str) -> Self {
        if !self.unlocked_trophies.iter().any(|t| t.trophy_id == trophy_id) {
            self.unlocked_trophies.push(TrophyUnlock {
                trophy_id: trophy_id.to_string(),
                unlocked: true,
                unlocked_at: Utc::now(),
            });
        }
        self
    }

    /// Unlocks a treasure. Already unlocked ids are left untouched.
    #[must_use]
    pub fn unlock_treasure(mut self, treasure_id: &str) -> Self {
        if !self
            .unlocked_treasures
            .iter()
            .any(|t| t.treasure_id == treasure_id)
        {
            self.unlocked_treasures.push(TreasureUnlock {
                treasure_id: treasure_id.to_string(),
                unlocked: true,
                unlocked_at: Utc::now(),
            });
        }
        self
    }

    #[must_use]
    pub fn record_run_start(mut self) -> Self {
        self.stats.total_runs += 1;
        self.last_played_at = Utc::now();
        self
    }

    #[must_use]
    pub fn record_clear(mut self, floor_reached: u32) -> Self {
        self.stats.total_clears += 1;
        self.stats.max_floor_reached = self.stats.max_floor_reached.max(floor_reached);
        self
    }

    #[must_use]
    pub fn record_boss_kill(mut self, boss_id: &str) -> Self {
        if !self.stats.bosses_killed.iter().any(|b| b == boss_id) {
            self.stats.bosses_killed.push(boss_id.to_string());
        }
        self
    }

    #[must_use]
    pub fn record_treasure_collected(mut self, treasure_id: &str) -> Self {
        self.stats.treasures_collected.push(treasure_id.to_string());
        self
    }

    pub fn is_trophy_unlocked(&self, trophy_id: &str) -> bool {
        self.unlocked_trophies
            .iter()
            .any(|t| t.trophy_id == trophy_id && t.unlocked)
    }

    pub fn is_treasure_unlocked(&self, treasure_id: &str) -> bool {
        self.unlocked_treasures
            .iter()
            .any(|t| t.treasure_id == treasure_id && t.unlocked)
    }
}

impl Default for MetaProgress {
    fn default() -> Self {
        Self::initial()
    }
}
