//! Dungeon layout: floors of rooms linked as a layered graph, plus the
//! navigation state of the current run.
//!
//! [`Dungeon`] is a value type. Every operation returns a new dungeon and
//! leaves the receiver untouched; invalid requests return an unchanged copy.
mod floor;
pub mod graph;
mod room;

pub use floor::Floor;
pub use graph::{GraphParams, LevelLayout, RoomGraph, generate_level_layouts, generate_room_graph};
pub use room::{Room, RoomStatus, RoomType};

use game_core::{DungeonOptions, Inventory, RandomSource};
use serde::{Deserialize, Serialize};

use crate::rewards::RewardGenerator;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dungeon {
    pub total_floors: u32,
    /// 0-based index of the current floor.
    pub current_floor_index: u32,
    pub current_floor: Option<Floor>,
    pub current_room_id: Option<String>,
    pub options: DungeonOptions,
}

impl Dungeon {
    /// A dungeon with no floor generated yet.
    pub fn new(options: DungeonOptions) -> Self {
        Self {
            total_floors: options.floors_count,
            current_floor_index: 0,
            current_floor: None,
            current_room_id: None,
            options,
        }
    }

    /// Generates floor 1 and stands on its start room.
    #[must_use]
    pub fn start<R>(
        &self,
        inventory: &Inventory,
        rewards: &mut RewardGenerator<'_>,
        rng: &mut R,
    ) -> Self
    where
        R: RandomSource + ?Sized,
    {
        self.enter_floor(0, inventory, rewards, rng)
    }

    /// Moves to the next floor. Past the last floor the dungeon is unchanged.
    #[must_use]
    pub fn advance_to_next_floor<R>(
        &self,
        inventory: &Inventory,
        rewards: &mut RewardGenerator<'_>,
        rng: &mut R,
    ) -> Self
    where
        R: RandomSource + ?Sized,
    {
        let next = self.current_floor_index + 1;
        if next >= self.total_floors {
            return self.clone();
        }
        self.enter_floor(next, inventory, rewards, rng)
    }

    fn enter_floor<R>(
        &self,
        index: u32,
        inventory: &Inventory,
        rewards: &mut RewardGenerator<'_>,
        rng: &mut R,
    ) -> Self
    where
        R: RandomSource + ?Sized,
    {
        let mut floor = Floor::generate(index + 1, &self.options, inventory, rewards, rng);
        let start_id = floor.start_room_id.clone();
        if let Some(start) = floor.room_mut(&start_id) {
            start.status = RoomStatus::Available;
        }

        Self {
            current_floor_index: index,
            current_floor: Some(floor),
            current_room_id: Some(start_id),
            ..self.clone()
        }
    }

    /// 1-based number of the current floor.
    pub fn floor_number(&self) -> u32 {
        self.current_floor_index + 1
    }

    pub fn is_final_floor(&self) -> bool {
        self.current_floor_index + 1 >= self.total_floors
    }

    /// Makes an available room current. Any other request is a no-op.
    #[must_use]
    pub fn select_room(&self, room_id: &str) -> Self {
        let mut next = self.clone();
        let Some(floor) = next.current_floor.as_mut() else {
            return next;
        };
        let Some(room) = floor
            .room_mut(room_id)
            .filter(|r| r.status == RoomStatus::Available)
        else {
            tracing::debug!("Room {} is not available", room_id);
            return next;
        };

        room.status = RoomStatus::Current;
        next.current_room_id = Some(room_id.to_string());
        next
    }

    /// Clears the current room and unlocks its locked successors.
    ///
    /// Only a room whose status is `current` is affected.
    #[must_use]
    pub fn clear_room(&self) -> Self {
        let mut next = self.clone();
        let (Some(floor), Some(room_id)) = (next.current_floor.as_mut(), self.current_room_id.as_deref())
        else {
            return next;
        };
        let Some(room) = floor
            .room_mut(room_id)
            .filter(|r| r.status == RoomStatus::Current)
        else {
            return next;
        };

        room.status = RoomStatus::Cleared;
        let successors = room.next_rooms.clone();
        for id in &successors {
            if let Some(successor) = floor.room_mut(id)
                && successor.status == RoomStatus::Locked
            {
                successor.status = RoomStatus::Available;
            }
        }
        next
    }

    /// Rooms the player may enter next, in creation order.
    pub fn available_rooms(&self) -> Vec<&Room> {
        self.current_floor
            .as_ref()
            .map(|floor| floor.rooms_with_status(RoomStatus::Available).collect())
            .unwrap_or_default()
    }

    pub fn current_room(&self) -> Option<&Room> {
        let floor = self.current_floor.as_ref()?;
        floor.room(self.current_room_id.as_deref()?)
    }

    pub fn is_boss_room_cleared(&self) -> bool {
        self.current_floor
            .as_ref()
            .and_then(Floor::boss_room)
            .is_some_and(|boss| boss.status == RoomStatus::Cleared)
    }
}
