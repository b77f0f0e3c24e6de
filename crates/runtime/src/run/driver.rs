//! Phase machine for one run through the dungeon.

use game_core::{
    CombatState, DungeonOptions, Entity, GameError, Inventory, RandomSource, Reward, Treasure,
    UnlockOracle,
};

use crate::api::{Result, RuntimeError};
use crate::dungeon::{Dungeon, RoomStatus, RoomType};
use crate::encounter::{EncounterFactory, PLAYER_START, apply_relic_effects_to_player};
use crate::oracle::OracleManager;
use crate::progression::{MetaProgress, process_unlocks};
use crate::rewards::RewardGenerator;

use super::GamePhase;

/// Share of max hp restored by a rest room.
pub const REST_HEAL_RATIO: f64 = 0.3;
/// Alternatives offered next to the room's own reward.
pub const EXTRA_REWARD_CHOICES: usize = 2;

/// What happened when a room was entered.
#[derive(Clone, Debug, PartialEq)]
pub enum RoomEntry {
    /// A fight starts from this state.
    Combat(CombatState),
    /// Rest room: the player healed and the room is already cleared.
    Rested { healed: u32 },
}

/// Drives one run: navigation, combat hand-off, rewards, and the final
/// bookkeeping into [`MetaProgress`].
pub struct RunDriver {
    oracles: OracleManager,
    dungeon: Dungeon,
    inventory: Inventory,
    player_hp: u32,
    phase: GamePhase,
    meta: MetaProgress,
    reward_choices: Vec<Treasure>,
    /// Boss template fought in the current combat, if any.
    pending_boss: Option<String>,
    /// Minor relics generated so far this run.
    relics_issued: u32,
}

impl RunDriver {
    /// Records a run start and generates floor 1.
    pub fn start<R>(
        oracles: OracleManager,
        options: DungeonOptions,
        meta: MetaProgress,
        rng: &mut R,
    ) -> Self
    where
        R: RandomSource + ?Sized,
    {
        let inventory = Inventory::new();
        let mut rewards = RewardGenerator::new(oracles.treasures().pool());
        let dungeon = Dungeon::new(options).start(&inventory, &mut rewards, rng);
        let relics_issued = rewards.issued();

        let meta = meta.record_run_start();
        tracing::info!(
            "Run #{} started: {} floors",
            meta.stats.total_runs,
            dungeon.total_floors
        );

        Self {
            player_hp: Entity::player(PLAYER_START).hp,
            oracles,
            dungeon,
            inventory,
            phase: GamePhase::Navigation,
            meta,
            reward_choices: Vec::new(),
            pending_boss: None,
            relics_issued,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn dungeon(&self) -> &Dungeon {
        &self.dungeon
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn player_hp(&self) -> u32 {
        self.player_hp
    }

    /// Max hp after relic bonuses.
    pub fn player_max_hp(&self) -> u32 {
        apply_relic_effects_to_player(&Entity::player(PLAYER_START), &self.inventory)
            .stats
            .max_hp
    }

    pub fn meta(&self) -> &MetaProgress {
        &self.meta
    }

    pub fn into_meta(self) -> MetaProgress {
        self.meta
    }

    /// Treasures offered in the reward phase. The room's own reward comes first.
    pub fn reward_choices(&self) -> &[Treasure] {
        &self.reward_choices
    }

    fn expect_phase(&self, expected: GamePhase) -> Result<()> {
        if self.phase != expected {
            return Err(RuntimeError::InvalidPhase {
                expected,
                actual: self.phase,
            });
        }
        Ok(())
    }


    /// Enters an available room.
    pub fn enter_room<R>(&mut self, room_id: &str, rng: &mut R) -> Result<RoomEntry>
    where
        R: RandomSource + ?Sized,
    {
        self.expect_phase(GamePhase::Navigation)?;
        let floor = self
            .dungeon
            .current_floor
            .as_ref()
            .ok_or(RuntimeError::NoActiveFloor)?;
        let room = floor
            .room(room_id)
            .filter(|r| r.status == RoomStatus::Available)
            .ok_or_else(|| RuntimeError::RoomUnavailable(room_id.to_string()))?;
        let room_type = room.room_type;

        self.dungeon = self.dungeon.select_room(room_id);
        tracing::info!("Entered {} room {}", room_type, room_id);

        if room_type == RoomType::Rest {
            let healed = self.rest();
            self.dungeon = self.dungeon.clear_room();
            return Ok(RoomEntry::Rested { healed });
        }

        let factory = EncounterFactory::new(self.oracles.enemies(), self.oracles.bosses());
        let state = factory
            .create_encounter(room_type, &self.inventory, self.player_hp, None, rng)
            .inspect_err(|e| {
                let ctx = e.context();
                tracing::error!(
                    code = e.error_code(),
                    actor = ?ctx.actor,
                    position = ?ctx.position,
                    "Encounter for {} room {} is invalid: {}",
                    room_type,
                    room_id,
                    e
                );
            })?;
        self.pending_boss = state
            .enemies()
            .find(|e| e.is_boss())
            .map(|boss| boss.template.clone());
        self.phase = GamePhase::Combat;
        Ok(RoomEntry::Combat(state))
    }

    fn rest(&mut self) -> u32 {
        let max_hp = self.player_max_hp();
        let amount = ((f64::from(max_hp) * REST_HEAL_RATIO).floor() as u32).max(1);
        let healed_hp = self.player_hp.saturating_add(amount).min(max_hp);
        let healed = healed_hp - self.player_hp.min(healed_hp);
        self.player_hp = healed_hp;
        tracing::info!("Rested: +{} hp ({}/{})", healed, self.player_hp, max_hp);
        healed
    }

    /// Takes the final combat state back from the session.
    pub fn finish_combat<R>(&mut self, state: &CombatState, rng: &mut R) -> Result<GamePhase>
    where
        R: RandomSource + ?Sized,
    {
        self.expect_phase(GamePhase::Combat)?;

        let Some(player) = state.player().filter(|p| !p.is_dead()) else {
            self.player_hp = 0;
            self.pending_boss = None;
            self.end_run(GamePhase::Defeat);
            return Ok(self.phase);
        };
        if state.has_enemies() {
            return Err(RuntimeError::CombatInProgress);
        }

        self.player_hp = player.hp;
        if let Some(boss) = self.pending_boss.take() {
            self.meta = std::mem::take(&mut self.meta).record_boss_kill(&boss);
        }

        let room_reward = self
            .dungeon
            .current_room()
            .map(|room| room.reward.treasure.clone());
        self.dungeon = self.dungeon.clear_room();

        let mut rewards =
            RewardGenerator::new(self.oracles.treasures().pool()).with_issued(self.relics_issued);
        let mut choices: Vec<Treasure> = room_reward.into_iter().collect();
        choices.extend(rewards.generate_treasure_choices(EXTRA_REWARD_CHOICES, rng, &self.inventory));
        self.relics_issued = rewards.issued();
        self.reward_choices = choices;
        self.phase = GamePhase::Reward;
        Ok(self.phase)
    }

    /// Takes reward `index` and moves on.
    ///
    /// After the boss room this advances to the next floor, or ends the run in
    /// victory on the final floor.
    pub fn claim_reward<R>(&mut self, index: usize, rng: &mut R) -> Result<GamePhase>
    where
        R: RandomSource + ?Sized,
    {
        self.expect_phase(GamePhase::Reward)?;
        let treasure = self
            .reward_choices
            .get(index)
            .cloned()
            .ok_or(RuntimeError::InvalidRewardChoice {
                index,
                available: self.reward_choices.len(),
            })?;

        tracing::info!("Claimed {} ({})", treasure.name, treasure.id);
        self.meta = std::mem::take(&mut self.meta).record_treasure_collected(&treasure.id);
        self.inventory = self.inventory.with_reward(&Reward::new(treasure));
        self.reward_choices.clear();

        let boss_cleared = self
            .dungeon
            .current_room()
            .is_some_and(|room| room.room_type == RoomType::Boss);
        if !boss_cleared {
            self.phase = GamePhase::Navigation;
            return Ok(self.phase);
        }

        if self.dungeon.is_final_floor() {
            self.meta = std::mem::take(&mut self.meta).record_clear(self.dungeon.floor_number());
            self.end_run(GamePhase::Victory);
        } else {
            let mut rewards = RewardGenerator::new(self.oracles.treasures().pool())
                .with_issued(self.relics_issued);
            self.dungeon = self
                .dungeon
                .advance_to_next_floor(&self.inventory, &mut rewards, rng);
            self.relics_issued = rewards.issued();
            self.phase = GamePhase::Navigation;
        }
        Ok(self.phase)
    }

    fn end_run(&mut self, phase: GamePhase) {
        let meta = std::mem::take(&mut self.meta);
        self.meta = process_unlocks(meta, self.oracles.unlocks().definitions());
        self.phase = phase;
        tracing::info!(
            "Run ended in {} on floor {} with {} treasures",
            phase,
            self.dungeon.floor_number(),
            self.inventory.len()
        );
    }
}
