//! Plays whole runs without input.

use game_core::env::pick;
use game_core::{CombatConfig, RandomSource};
use serde::Serialize;

use super::{GamePhase, RoomEntry, RunDriver};
use crate::api::{ActionProvider, Result, RuntimeError};
use crate::session::{CombatSession, DEFAULT_FRAME_DT, DEFAULT_MAX_FRAMES};

/// Outcome of an automatically played run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub outcome: GamePhase,
    pub floor_reached: u32,
    pub rooms_cleared: u32,
    pub combats: u32,
    pub player_hp: u32,
    pub treasures: Vec<String>,
}

/// Picks rooms at random, fights with the given providers, and always takes
/// the room's own reward.
pub struct AutoPlayer<'a> {
    player: &'a dyn ActionProvider,
    enemies: &'a dyn ActionProvider,
    config: CombatConfig,
    frame_dt: f64,
    max_frames: u32,
}

impl<'a> AutoPlayer<'a> {
    pub fn new(
        player: &'a dyn ActionProvider,
        enemies: &'a dyn ActionProvider,
        config: CombatConfig,
    ) -> Self {
        Self {
            player,
            enemies,
            config,
            frame_dt: DEFAULT_FRAME_DT,
            max_frames: DEFAULT_MAX_FRAMES,
        }
    }

    pub fn with_frame_dt(mut self, frame_dt: f64) -> Self {
        self.frame_dt = frame_dt;
        self
    }

    pub fn with_max_frames(mut self, max_frames: u32) -> Self {
        self.max_frames = max_frames;
        self
    }

    /// Plays until victory or defeat.
    pub async fn play(
        &self,
        driver: &mut RunDriver,
        rng: &mut (dyn RandomSource + Send),
    ) -> Result<RunSummary> {
        let mut rooms_cleared = 0;
        let mut combats = 0;

        loop {
            match driver.phase() {
                GamePhase::Navigation => {
                    let room_id = {
                        let available = driver.dungeon().available_rooms();
                        pick(rng, &available).map(|room| room.id.clone())
                    }
                    .ok_or(RuntimeError::NoActiveFloor)?;

                    match driver.enter_room(&room_id, rng)? {
                        RoomEntry::Combat(state) => {
                            let mut session = CombatSession::new(state, self.config.clone());
                            session
                                .run_to_completion(
                                    self.player,
                                    self.enemies,
                                    rng,
                                    self.frame_dt,
                                    self.max_frames,
                                )
                                .await?;
                            combats += 1;
                            driver.finish_combat(session.state(), rng)?;
                        }
                        RoomEntry::Rested { .. } => rooms_cleared += 1,
                    }
                }
                GamePhase::Reward => {
                    driver.claim_reward(0, rng)?;
                    rooms_cleared += 1;
                }
                GamePhase::Combat => {
                    return Err(RuntimeError::InvalidPhase {
                        expected: GamePhase::Navigation,
                        actual: GamePhase::Combat,
                    });
                }
                GamePhase::Victory | GamePhase::Defeat => break,
            }
        }

        Ok(RunSummary {
            outcome: driver.phase(),
            floor_reached: driver.dungeon().floor_number(),
            rooms_cleared,
            combats,
            player_hp: driver.player_hp(),
            treasures: driver
                .inventory()
                .treasures
                .iter()
                .map(|t| t.id.clone())
                .collect(),
        })
    }
}
