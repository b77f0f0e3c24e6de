//! Builds the opening [`CombatState`] for a room.
//!
//! The arena is always 15x10 with the player on the left. Enemy ids are
//! assigned sequentially from 1 in spawn order, so the player keeps
//! [`EntityId::PLAYER`] and the timeline iterates player first.

use game_core::env::pick;
use game_core::{
    BossOracle, CombatState, EnemyOracle, Entity, EntityId, Grid, InitializationError, Inventory,
    Position, RandomSource, Stats, aggregate,
};

use crate::dungeon::RoomType;

pub const PLAYER_START: Position = Position::new(2, 5);
/// Single elite or boss spawn.
pub const CHAMPION_POSITION: Position = Position::new(11, 5);
pub const ELITE_FALLBACK_POSITIONS: [Position; 2] = [Position::new(10, 4), Position::new(12, 6)];
pub const HORDE_POSITIONS: [Position; 8] = [
    Position::new(9, 3),
    Position::new(11, 3),
    Position::new(13, 3),
    Position::new(9, 5),
    Position::new(11, 5),
    Position::new(13, 5),
    Position::new(9, 7),
    Position::new(11, 7),
];
pub const DEFAULT_BOSS_ID: &str = game_content::DEFAULT_BOSS_ID;

/// Applies inventory relics to a player entity.
///
/// Max hp and speed gain the aggregated boosts; current hp rises by the same
/// amount as max hp. Attack and defense bonuses stay in the relics and are
/// applied during damage resolution.
pub fn apply_relic_effects_to_player(base: &Entity, inventory: &Inventory) -> Entity {
    let effects = aggregate(&inventory.treasures);

    let max_hp = (i64::from(base.stats.max_hp) + i64::from(effects.max_hp_boost)).max(0) as u32;
    let stats = Stats {
        max_hp,
        speed: base.stats.speed + effects.speed_boost,
        ..base.stats
    };
    let hp_increase = i64::from(max_hp) - i64::from(base.stats.max_hp);
    let hp = (i64::from(base.hp) + hp_increase).clamp(0, i64::from(max_hp)) as u32;

    Entity {
        hp,
        stats,
        relics: inventory.treasures.clone(),
        ..base.clone()
    }
}

/// Spawns encounters from enemy and boss templates.
#[derive(Clone, Copy)]
pub struct EncounterFactory<'a> {
    enemies: &'a dyn EnemyOracle,
    bosses: &'a dyn BossOracle,
}

impl<'a> EncounterFactory<'a> {
    pub fn new(enemies: &'a dyn EnemyOracle, bosses: &'a dyn BossOracle) -> Self {
        Self { enemies, bosses }
    }

    /// Opening state for a room.
    ///
    /// `current_hp` is the hp carried over from earlier rooms and is clamped to
    /// the relic-adjusted maximum. `boss_id` only matters for boss rooms.
    pub fn create_encounter<R>(
        &self,
        room_type: RoomType,
        inventory: &Inventory,
        current_hp: u32,
        boss_id: Option<&str>,
        rng: &mut R,
    ) -> Result<CombatState, InitializationError>
    where
        R: RandomSource + ?Sized,
    {
        let player = apply_relic_effects_to_player(&Entity::player(PLAYER_START), inventory)
            .with_hp(current_hp);

        let mut entities = vec![player];
        entities.extend(self.spawn_enemies(room_type, boss_id, rng));

        tracing::info!(
            "Encounter {}: {} enemies",
            room_type,
            entities.len() - 1
        );
        CombatState::new(Grid::arena(), entities)
    }

    /// Enemies for a room type, in spawn order.
    pub fn spawn_enemies<R>(
        &self,
        room_type: RoomType,
        boss_id: Option<&str>,
        rng: &mut R,
    ) -> Vec<Entity>
    where
        R: RandomSource + ?Sized,
    {
        match room_type {
            RoomType::Normal => self.normal(rng),
            RoomType::Elite => self.elite(rng),
            RoomType::Horde => self.horde(rng),
            RoomType::Boss => self.boss(boss_id),
            RoomType::Rest => Vec::new(),
        }
    }

    fn normal<R>(&self, rng: &mut R) -> Vec<Entity>
    where
        R: RandomSource + ?Sized,
    {
        let ids = self.enemies.normal_ids();
        if ids.is_empty() {
            return Vec::new();
        }

        let count = if rng.chance(0.5) { 1 } else { 2 };
        let positions: Vec<Position> = (0..count)
            .map(|i| Position::new(10 + i * 2, 4 + i))
            .collect();
        self.spawn_from(&ids, &positions, rng)
    }

    fn elite<R>(&self, rng: &mut R) -> Vec<Entity>
    where
        R: RandomSource + ?Sized,
    {
        let elite_ids = self.enemies.elite_ids();
        if elite_ids.is_empty() {
            let normal_ids = self.enemies.normal_ids();
            tracing::debug!("No elite enemies defined, spawning two normal enemies");
            return self.spawn_from(&normal_ids, &ELITE_FALLBACK_POSITIONS, rng);
        }
        self.spawn_from(&elite_ids, &[CHAMPION_POSITION], rng)
    }

    fn horde<R>(&self, rng: &mut R) -> Vec<Entity>
    where
        R: RandomSource + ?Sized,
    {
        let ids = self.enemies.normal_ids();
        if ids.is_empty() {
            return Vec::new();
        }

        let count = 4 + rng.below(3);
        self.spawn_from(&ids, &HORDE_POSITIONS[..count.min(HORDE_POSITIONS.len())], rng)
    }

    fn boss(&self, boss_id: Option<&str>) -> Vec<Entity> {
        let requested = boss_id.unwrap_or(DEFAULT_BOSS_ID);
        match self.bosses.resolve(requested) {
            Some(definition) => {
                if definition.id != requested {
                    tracing::warn!("Unknown boss {}, using {}", requested, definition.id);
                }
                vec![definition.spawn(EntityId(1), CHAMPION_POSITION)]
            }
            None => {
                tracing::warn!("No boss definitions available");
                Vec::new()
            }
        }
    }

    /// One enemy per position, each template drawn uniformly from `ids`.
    fn spawn_from<R>(&self, ids: &[&str], positions: &[Position], rng: &mut R) -> Vec<Entity>
    where
        R: RandomSource + ?Sized,
    {
        let mut spawned = Vec::with_capacity(positions.len());
        for &position in positions {
            let Some(&id) = pick(rng, ids) else {
                break;
            };
            if let Some(definition) = self.enemies.resolve(id) {
                let entity_id = EntityId(spawned.len() as u32 + 1);
                spawned.push(definition.spawn(entity_id, position));
            }
        }
        spawned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::{BossOracleImpl, EnemyOracleImpl};
    use game_core::{EffectKind, EffectValue, Rarity, SequenceRng, Treasure, TreasureKind};

    fn relic(effects: Vec<EffectValue>) -> Treasure {
        Treasure::new("r", "R", "", Rarity::Common, TreasureKind::MajorRelic, effects)
    }

    #[test]
    fn test_relics_raise_max_hp_and_speed() {
        let inventory = Inventory::from_treasures(vec![relic(vec![
            EffectValue::new(EffectKind::MaxHpBoost, 20),
            EffectValue::new(EffectKind::SpeedBoost, 8),
            EffectValue::new(EffectKind::BonusDamage, 3),
        ])]);
        let base = Entity::player(PLAYER_START).with_hp(50);

        let player = apply_relic_effects_to_player(&base, &inventory);
        assert_eq!(player.stats.max_hp, 120);
        assert_eq!(player.stats.speed, 108);
        assert_eq!(player.stats.attack, base.stats.attack);
        assert_eq!(player.hp, 70);
        assert_eq!(player.relics.len(), 1);
    }

    #[test]
    fn test_negative_boost_clamps_hp() {
        let inventory =
            Inventory::from_treasures(vec![relic(vec![EffectValue::new(EffectKind::MaxHpBoost, -30)])]);
        let player = apply_relic_effects_to_player(&Entity::player(PLAYER_START), &inventory);
        assert_eq!(player.stats.max_hp, 70);
        assert_eq!(player.hp, 70);
    }

    #[test]
    fn test_normal_room_single_enemy() {
        let enemies = EnemyOracleImpl::builtin();
        let bosses = BossOracleImpl::builtin();
        let factory = EncounterFactory::new(&enemies, &bosses);

        let state = factory
            .create_encounter(
                RoomType::Normal,
                &Inventory::new(),
                80,
                None,
                &mut SequenceRng::new(vec![0.1, 0.0]),
            )
            .unwrap();

        assert_eq!(state.entities.len(), 2);
        assert_eq!(state.player().unwrap().hp, 80);
        let enemy = &state.entities[1];
        assert_eq!(enemy.id, EntityId(1));
        assert_eq!(enemy.template, "goblin");
        assert_eq!(enemy.position, Position::new(10, 4));
    }

    #[test]
    fn test_normal_room_two_enemies() {
        let enemies = EnemyOracleImpl::builtin();
        let bosses = BossOracleImpl::builtin();
        let factory = EncounterFactory::new(&enemies, &bosses);

        let spawned =
            factory.spawn_enemies(RoomType::Normal, None, &mut SequenceRng::new(vec![0.9, 0.0, 0.9]));
        let positions: Vec<_> = spawned.iter().map(|e| e.position).collect();
        assert_eq!(positions, vec![Position::new(10, 4), Position::new(12, 5)]);
        assert_eq!(spawned[1].template, "skeleton");
        assert_eq!(spawned[1].id, EntityId(2));
    }

    #[test]
    fn test_elite_falls_back_to_two_normals() {
        let enemies = EnemyOracleImpl::builtin();
        let bosses = BossOracleImpl::builtin();
        let factory = EncounterFactory::new(&enemies, &bosses);

        let spawned = factory.spawn_enemies(RoomType::Elite, None, &mut SequenceRng::constant(0.0));
        let positions: Vec<_> = spawned.iter().map(|e| e.position).collect();
        assert_eq!(positions, ELITE_FALLBACK_POSITIONS.to_vec());
    }

    #[test]
    fn test_horde_size_follows_roll() {
        let enemies = EnemyOracleImpl::builtin();
        let bosses = BossOracleImpl::builtin();
        let factory = EncounterFactory::new(&enemies, &bosses);

        let low = factory.spawn_enemies(RoomType::Horde, None, &mut SequenceRng::constant(0.0));
        assert_eq!(low.len(), 4);
        let high = factory.spawn_enemies(RoomType::Horde, None, &mut SequenceRng::constant(0.99));
        assert_eq!(high.len(), 6);
        assert_eq!(high[5].position, Position::new(13, 5));
    }

    #[test]
    fn test_boss_room_uses_default_boss() {
        let enemies = EnemyOracleImpl::builtin();
        let bosses = BossOracleImpl::builtin();
        let factory = EncounterFactory::new(&enemies, &bosses);

        let spawned = factory.spawn_enemies(RoomType::Boss, None, &mut SequenceRng::constant(0.0));
        assert_eq!(spawned.len(), 1);
        assert!(spawned[0].is_boss());
        assert_eq!(spawned[0].template, DEFAULT_BOSS_ID);
        assert_eq!(spawned[0].position, CHAMPION_POSITION);

        let unknown = factory.spawn_enemies(RoomType::Boss, Some("lich"), &mut SequenceRng::constant(0.0));
        assert_eq!(unknown[0].template, DEFAULT_BOSS_ID);
    }

    #[test]
    fn test_rest_room_has_no_enemies() {
        let enemies = EnemyOracleImpl::builtin();
        let bosses = BossOracleImpl::builtin();
        let factory = EncounterFactory::new(&enemies, &bosses);

        let state = factory
            .create_encounter(RoomType::Rest, &Inventory::new(), 100, None, &mut SequenceRng::constant(0.0))
            .unwrap();
        assert_eq!(state.entities.len(), 1);
        assert!(!state.has_enemies());
    }
}
