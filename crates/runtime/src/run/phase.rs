use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Where a run currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    /// Choosing the next room.
    Navigation,
    Combat,
    /// Picking a treasure after a won fight.
    Reward,
    Victory,
    Defeat,
}

impl GamePhase {
    pub const fn is_finished(self) -> bool {
        matches!(self, GamePhase::Victory | GamePhase::Defeat)
    }
}
