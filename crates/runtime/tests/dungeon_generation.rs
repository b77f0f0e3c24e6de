//! Structural properties of generated floors over many seeds.

use game_core::{DungeonOptions, Inventory, PcgRng};
use runtime::dungeon::{Floor, RoomType};
use runtime::rewards::RewardGenerator;

fn floor(seed: u64, number: u32) -> Floor {
    Floor::generate(
        number,
        &DungeonOptions::default(),
        &Inventory::new(),
        &mut RewardGenerator::builtin(),
        &mut PcgRng::seeded(seed),
    )
}

#[test]
fn single_start_and_boss() {
    for seed in 0..100 {
        let floor = floor(seed, 1);

        let bosses: Vec<_> = floor.rooms_of_type(RoomType::Boss).collect();
        assert_eq!(bosses.len(), 1, "seed {seed}");
        assert_eq!(bosses[0].id, floor.boss_room_id);
        assert_eq!(bosses[0].depth, 6);

        let start = floor.start_room().unwrap();
        assert_eq!(start.id, "f1_r0");
        assert_eq!(start.depth, 1);
        assert_eq!(start.room_type, RoomType::Normal);
        assert_eq!(floor.rooms.iter().filter(|r| r.depth == 1).count(), 1);
    }
}

#[test]
fn rest_rooms_are_bounded() {
    let max = DungeonOptions::default().max_rest_rooms_per_floor;
    for seed in 0..100 {
        let floor = floor(seed, 2);
        let rests = floor.rooms_of_type(RoomType::Rest).count() as u32;
        assert_eq!(rests, floor.rest_room_count, "seed {seed}");
        assert!(rests <= max.min(1));

        let specials = floor
            .rooms
            .iter()
            .filter(|r| matches!(r.room_type, RoomType::Rest | RoomType::Elite | RoomType::Horde))
            .count();
        assert!(specials <= 4);
    }
}

#[test]
fn edges_point_deeper_without_duplicates() {
    for seed in 0..100 {
        let floor = floor(seed, 1);
        for room in &floor.rooms {
            let mut targets = room.next_rooms.clone();
            targets.sort();
            targets.dedup();
            assert_eq!(targets.len(), room.next_rooms.len(), "seed {seed} room {}", room.id);

            for id in &room.next_rooms {
                let next = floor.room(id).unwrap();
                assert!(next.depth > room.depth && next.depth <= room.depth + 2);
            }
            if room.room_type != RoomType::Boss {
                assert!(!room.next_rooms.is_empty(), "seed {seed} room {} is a dead end", room.id);
            }
        }
    }
}

#[test]
fn every_reachable_room_reaches_the_boss() {
    for seed in 0..100 {
        let floor = floor(seed, 3);
        for id in floor.reachable_from(&floor.start_room_id) {
            assert!(
                floor.reachable_from(id).contains(&floor.boss_room_id.as_str()),
                "seed {seed}: {id} cannot reach the boss"
            );
        }
    }
}

#[test]
fn enemy_counts_follow_room_type() {
    for seed in 0..50 {
        for room in floor(seed, 1).rooms {
            assert_eq!(room.enemy_count, room.room_type.enemy_count());
        }
    }
}

#[test]
fn same_seed_same_floor() {
    assert_eq!(floor(1234, 1), floor(1234, 1));
    assert_ne!(floor(1, 1), floor(2, 1));
}
