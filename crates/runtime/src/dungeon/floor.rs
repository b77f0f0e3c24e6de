use game_core::{DungeonOptions, Inventory, RandomSource};
use serde::{Deserialize, Serialize};

use super::graph::{GraphParams, generate_room_graph};
use super::room::{Room, RoomStatus, RoomType};
use crate::rewards::RewardGenerator;

/// One generated floor. Rooms are stored in creation order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Floor {
    pub floor_number: u32,
    pub rooms: Vec<Room>,
    pub start_room_id: String,
    pub boss_room_id: String,
    pub rest_room_count: u32,
}

impl Floor {
    /// Generates floor `floor_number` (1-based). Every room starts locked.
    pub fn generate<R>(
        floor_number: u32,
        options: &DungeonOptions,
        inventory: &Inventory,
        rewards: &mut RewardGenerator<'_>,
        rng: &mut R,
    ) -> Self
    where
        R: RandomSource + ?Sized,
    {
        let params = GraphParams {
            floor_number,
            inventory,
            max_rest_rooms: options.max_rest_rooms_per_floor,
        };
        let graph = generate_room_graph(&params, rewards, rng);

        tracing::info!(
            "Generated floor {}: {} rooms, {} rest",
            floor_number,
            graph.rooms.len(),
            graph.rest_room_count
        );

        Self {
            floor_number,
            rooms: graph.rooms,
            start_room_id: graph.start_room_id,
            boss_room_id: graph.boss_room_id,
            rest_room_count: graph.rest_room_count,
        }
    }

    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    pub(crate) fn room_mut(&mut self, id: &str) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|r| r.id == id)
    }

    pub fn start_room(&self) -> Option<&Room> {
        self.room(&self.start_room_id)
    }

    pub fn boss_room(&self) -> Option<&Room> {
        self.room(&self.boss_room_id)
    }

    pub fn rooms_of_type(&self, room_type: RoomType) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(move |r| r.room_type == room_type)
    }

    pub fn rooms_with_status(&self, status: RoomStatus) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(move |r| r.status == status)
    }

    /// Rooms reachable from `from` by following edges, `from` included.
    pub fn reachable_from(&self, from: &str) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        let mut stack = vec![from];
        while let Some(id) = stack.pop() {
            if seen.contains(&id) {
                continue;
            }
            let Some(room) = self.room(id) else {
                continue;
            };
            seen.push(room.id.as_str());
            stack.extend(room.next_rooms.iter().map(String::as_str));
        }
        seen
    }
}
