//! Rooms: the nodes of a floor graph.

use game_core::Reward;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Normal,
    Elite,
    Horde,
    Boss,
    Rest,
}

impl RoomType {
    /// Nominal number of enemies the room is advertised with.
    pub const fn enemy_count(self) -> u32 {
        match self {
            RoomType::Normal => 2,
            RoomType::Elite => 1,
            RoomType::Horde => 6,
            RoomType::Boss => 1,
            RoomType::Rest => 0,
        }
    }

    pub const fn is_combat(self) -> bool {
        !matches!(self, RoomType::Rest)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Locked,
    Available,
    Current,
    Cleared,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub status: RoomStatus,
    /// Graph level, 1 for the start room.
    pub depth: u32,
    pub next_rooms: Vec<String>,
    pub enemy_count: u32,
    pub reward: Reward,
}

impl Room {
    /// A locked room with no outgoing edges.
    pub fn new(id: impl Into<String>, room_type: RoomType, depth: u32, reward: Reward) -> Self {
        Self {
            id: id.into(),
            room_type,
            status: RoomStatus::Locked,
            depth,
            next_rooms: Vec::new(),
            enemy_count: room_type.enemy_count(),
            reward,
        }
    }

    /// Changes the type and recomputes the enemy count.
    #[must_use]
    pub fn with_type(mut self, room_type: RoomType) -> Self {
        self.room_type = room_type;
        self.enemy_count = room_type.enemy_count();
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: RoomStatus) -> Self {
        self.status = status;
        self
    }

    /// Appends edges, skipping ids already present.
    pub fn add_next_rooms<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for id in ids {
            let id = id.into();
            if !self.next_rooms.contains(&id) {
                self.next_rooms.push(id);
            }
        }
    }

    pub fn leads_to(&self, id: &str) -> bool {
        self.next_rooms.iter().any(|n| n == id)
    }
}
