//! Layered room-graph generation for one floor.
//!
//! A floor has six levels. Level 1 is the start room and level 6 the boss;
//! every room links to at least one room of the next level, so all rooms
//! reach the boss. Draw order is fixed so a seed always yields the same floor:
//!
//! 1. level sizes and per-room choice counts
//! 2. one reward per room, in creation order
//! 3. edges level by level, then the optional skip edge
//! 4. special room assignment

use game_core::env::{pick, shuffle};
use game_core::{Inventory, RandomSource};

use super::room::{Room, RoomType};
use crate::rewards::RewardGenerator;

pub const LEVEL_COUNT: usize = 6;
/// Upper bound on rooms in levels 3 and 4.
pub const MAX_WIDE_LEVEL_ROOMS: u32 = 6;
/// Upper bound on rooms in level 5.
pub const MAX_PRE_BOSS_ROOMS: u32 = 3;
/// At most this many non-start, non-boss rooms become special.
pub const MAX_SPECIAL_ROOMS: usize = 4;
pub const SKIP_EDGE_CHANCE: f64 = 0.5;
pub const REST_ROOM_CHANCE: f64 = 0.3;
pub const ELITE_ROOM_CHANCE: f64 = 0.6;

/// Room count and outgoing edge count for one level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelLayout {
    pub level: u32,
    /// One entry per room.
    pub choices: Vec<u32>,
}

impl LevelLayout {
    pub fn room_count(&self) -> usize {
        self.choices.len()
    }

    fn min_choices(&self) -> u32 {
        self.choices.iter().copied().min().unwrap_or(1)
    }
}

/// Output of [`generate_room_graph`]. Rooms are in creation order.
#[derive(Clone, Debug)]
pub struct RoomGraph {
    pub rooms: Vec<Room>,
    pub start_room_id: String,
    pub boss_room_id: String,
    pub rest_room_count: u32,
}

pub struct GraphParams<'a> {
    pub floor_number: u32,
    pub inventory: &'a Inventory,
    pub max_rest_rooms: u32,
}

fn choices_1_to_3<R: RandomSource + ?Sized>(rng: &mut R, count: u32) -> Vec<u32> {
    (0..count).map(|_| 1 + rng.below(3) as u32).collect()
}

/// Sizes each level from the narrowest branching of the previous one.
pub fn generate_level_layouts<R>(rng: &mut R) -> Vec<LevelLayout>
where
    R: RandomSource + ?Sized,
{
    let level1 = 2 + rng.below(2) as u32;

    let level2 = choices_1_to_3(rng, level1);
    let m2 = level2.iter().copied().min().unwrap_or(1);

    let count3 = MAX_WIDE_LEVEL_ROOMS.min(m2 + rng.below((7 - m2) as usize) as u32);
    let level3 = choices_1_to_3(rng, count3);
    let m3 = level3.iter().copied().min().unwrap_or(1);

    let count4 = MAX_WIDE_LEVEL_ROOMS.min(m3 + rng.below((7 - m3) as usize) as u32);
    let level4 = choices_1_to_3(rng, count4);
    let m4 = level4.iter().copied().min().unwrap_or(1);

    let count5 = MAX_PRE_BOSS_ROOMS.min(m4 + rng.below((4 - m4) as usize) as u32);

    vec![
        LevelLayout {
            level: 1,
            choices: vec![level1],
        },
        LevelLayout {
            level: 2,
            choices: level2,
        },
        LevelLayout {
            level: 3,
            choices: level3,
        },
        LevelLayout {
            level: 4,
            choices: level4,
        },
        LevelLayout {
            level: 5,
            choices: vec![1; count5 as usize],
        },
        LevelLayout {
            level: 6,
            choices: vec![0],
        },
    ]
}

/// Builds one floor's room graph.
pub fn generate_room_graph<R>(
    params: &GraphParams<'_>,
    rewards: &mut RewardGenerator<'_>,
    rng: &mut R,
) -> RoomGraph
where
    R: RandomSource + ?Sized,
{
    let layouts = generate_level_layouts(rng);

    // Rooms, level by level. `by_level[i]` holds indices into `rooms`.
    let mut rooms: Vec<Room> = Vec::new();
    let mut by_level: Vec<Vec<usize>> = Vec::with_capacity(layouts.len());
    for layout in &layouts {
        let mut level_rooms = Vec::with_capacity(layout.room_count());
        for _ in 0..layout.room_count() {
            let id = format!("f{}_r{}", params.floor_number, rooms.len());
            let reward = rewards.generate_room_reward(rng, params.inventory);
            level_rooms.push(rooms.len());
            rooms.push(Room::new(id, RoomType::Normal, layout.level, reward));
        }
        by_level.push(level_rooms);
    }

    let start = 0;
    let boss = rooms.len() - 1;
    rooms[boss] = rooms[boss].clone().with_type(RoomType::Boss);

    connect_levels(&mut rooms, &layouts, &by_level, rng);
    add_skip_edge(&mut rooms, &layouts, &by_level, rng);
    let rest_room_count = assign_special_rooms(&mut rooms, params.max_rest_rooms, rng);

    RoomGraph {
        start_room_id: rooms[start].id.clone(),
        boss_room_id: rooms[boss].id.clone(),
        rooms,
        rest_room_count,
    }
}

/// Each room links to `choices` distinct rooms of the next level.
fn connect_levels<R>(
    rooms: &mut [Room],
    layouts: &[LevelLayout],
    by_level: &[Vec<usize>],
    rng: &mut R,
) where
    R: RandomSource + ?Sized,
{
    for (level, layout) in layouts.iter().enumerate().take(layouts.len() - 1) {
        let next_level = &by_level[level + 1];

        for (&room, &choices) in by_level[level].iter().zip(&layout.choices) {
            let mut candidates = next_level.clone();
            shuffle(rng, &mut candidates);
            let ids: Vec<String> = candidates
                .iter()
                .take(choices as usize)
                .map(|&i| rooms[i].id.clone())
                .collect();
            rooms[room].add_next_rooms(ids);
        }
    }
}

/// With [`SKIP_EDGE_CHANCE`], one room of levels 1-4 with fewer than three
/// choices also links two levels ahead.
fn add_skip_edge<R>(
    rooms: &mut [Room],
    layouts: &[LevelLayout],
    by_level: &[Vec<usize>],
    rng: &mut R,
) where
    R: RandomSource + ?Sized,
{
    if !rng.chance(SKIP_EDGE_CHANCE) {
        return;
    }

    let sources: Vec<(usize, usize)> = layouts
        .iter()
        .enumerate()
        .take(layouts.len() - 2)
        .flat_map(|(level, layout)| {
            by_level[level]
                .iter()
                .zip(&layout.choices)
                .filter(|&(_, &choices)| choices < 3)
                .map(move |(&room, _)| (room, level + 2))
        })
        .collect();

    let Some(&(source, target_level)) = pick(rng, &sources) else {
        return;
    };
    if let Some(&target) = pick(rng, &by_level[target_level]) {
        let id = rooms[target].id.clone();
        tracing::debug!("Skip edge {} -> {}", rooms[source].id, id);
        rooms[source].add_next_rooms([id]);
    }
}

/// Turns up to [`MAX_SPECIAL_ROOMS`] middle rooms into rest, elite or horde
/// rooms. Returns the number of rest rooms.
fn assign_special_rooms<R>(rooms: &mut [Room], max_rest_rooms: u32, rng: &mut R) -> u32
where
    R: RandomSource + ?Sized,
{
    let mut candidates: Vec<usize> = (1..rooms.len().saturating_sub(1)).collect();
    shuffle(rng, &mut candidates);

    let mut rest_count = 0;
    for &index in candidates.iter().take(MAX_SPECIAL_ROOMS) {
        let roll = rng.next_f64();
        let room_type = if rest_count < 1 && rest_count < max_rest_rooms && roll < REST_ROOM_CHANCE
        {
            rest_count += 1;
            RoomType::Rest
        } else if roll < ELITE_ROOM_CHANCE {
            RoomType::Elite
        } else {
            RoomType::Horde
        };
        rooms[index] = rooms[index].clone().with_type(room_type);
    }

    rest_count
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{PcgRng, SequenceRng};

    #[test]
    fn test_layout_with_zero_draws() {
        let layouts = generate_level_layouts(&mut SequenceRng::constant(0.0));

        assert_eq!(layouts.len(), LEVEL_COUNT);
        assert_eq!(layouts[0].choices, vec![2]);
        assert_eq!(layouts[1].choices, vec![1, 1]);
        assert_eq!(layouts[2].choices, vec![1]);
        assert_eq!(layouts[3].choices, vec![1]);
        assert_eq!(layouts[4].choices, vec![1]);
        assert_eq!(layouts[5].choices, vec![0]);
    }

    #[test]
    fn test_layout_with_max_draws() {
        let layouts = generate_level_layouts(&mut SequenceRng::constant(0.999));

        assert_eq!(layouts[0].choices, vec![3]);
        assert_eq!(layouts[1].choices, vec![3, 3, 3]);
        assert_eq!(layouts[2].room_count(), 6);
        assert_eq!(layouts[3].room_count(), 6);
        assert_eq!(layouts[4].room_count(), 3);
    }

    #[test]
    fn test_layout_bounds_hold_for_many_seeds() {
        for seed in 0..200 {
            let layouts = generate_level_layouts(&mut PcgRng::seeded(seed));
            assert!((2..=3).contains(&layouts[1].room_count()));
            assert!((1..=6).contains(&layouts[2].room_count()));
            assert!((1..=6).contains(&layouts[3].room_count()));
            assert!((1..=3).contains(&layouts[4].room_count()));
            assert!(layouts[1..4]
                .iter()
                .flat_map(|l| &l.choices)
                .all(|c| (1..=3).contains(c)));
        }
    }

    #[test]
    fn test_graph_ids_and_endpoints() {
        let inventory = Inventory::new();
        let params = GraphParams {
            floor_number: 2,
            inventory: &inventory,
            max_rest_rooms: 2,
        };
        let graph = generate_room_graph(&params, &mut RewardGenerator::builtin(), &mut PcgRng::seeded(42));

        assert_eq!(graph.start_room_id, "f2_r0");
        assert_eq!(
            graph.boss_room_id,
            format!("f2_r{}", graph.rooms.len() - 1)
        );
        let boss = graph.rooms.last().unwrap();
        assert_eq!(boss.room_type, RoomType::Boss);
        assert_eq!(boss.enemy_count, 1);
        assert!(boss.next_rooms.is_empty());
        assert_eq!(graph.rooms[0].room_type, RoomType::Normal);
    }
}
