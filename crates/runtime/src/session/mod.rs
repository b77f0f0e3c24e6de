//! Frame-step combat driver.
//!
//! A [`CombatSession`] owns one [`CombatState`] and moves it forward one frame
//! at a time. Each frame either ticks the timeline or, when someone holds the
//! turn, waits for exactly one action from that entity.

use game_core::{
    Action, ActionOutcome, CombatConfig, CombatEngine, CombatState, EntityId, GameError,
    RandomSource, is_combat_over, is_victory,
};

use crate::api::{ActionProvider, Result, RuntimeError};
use crate::providers::decide_action;

/// Default frame length in seconds.
pub const DEFAULT_FRAME_DT: f64 = 1.0 / 60.0;
/// Frames before [`CombatSession::run_to_completion`] gives up.
pub const DEFAULT_MAX_FRAMES: u32 = 100_000;

/// Result of a finished combat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CombatReport {
    pub victory: bool,
    pub frames: u32,
    pub actions: u32,
}

pub struct CombatSession {
    state: CombatState,
    config: CombatConfig,
    frames: u32,
    actions: u32,
}

impl CombatSession {
    pub fn new(state: CombatState, config: CombatConfig) -> Self {
        Self {
            state,
            config,
            frames: 0,
            actions: 0,
        }
    }

    pub fn state(&self) -> &CombatState {
        &self.state
    }

    pub fn into_state(self) -> CombatState {
        self.state
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    pub fn current_turn(&self) -> Option<EntityId> {
        self.state.current_turn
    }

    pub fn is_over(&self) -> bool {
        is_combat_over(&self.state)
    }

    pub fn is_victory(&self) -> bool {
        is_victory(&self.state)
    }

    pub fn report(&self) -> CombatReport {
        CombatReport {
            victory: self.is_victory(),
            frames: self.frames,
            actions: self.actions,
        }
    }

    /// Advances one frame and returns who holds the turn.
    ///
    /// While a turn is pending the timeline is left alone; the holder must act
    /// first.
    pub fn advance(&mut self, dt: f64) -> Result<Option<EntityId>> {
        if self.is_over() {
            return Err(RuntimeError::CombatFinished);
        }
        self.frames += 1;
        if self.state.current_turn.is_none() {
            self.state = CombatEngine::new(&self.config).tick(&self.state, dt);
        }
        Ok(self.state.current_turn)
    }

    /// Resolves an action for the player. Fails unless the player holds the turn.
    pub fn submit_player_action<R>(&mut self, action: Action, rng: &mut R) -> Result<ActionOutcome>
    where
        R: RandomSource + ?Sized,
    {
        if self.state.current_turn != Some(EntityId::PLAYER) {
            return Err(RuntimeError::NotPlayerTurn {
                current: self.state.current_turn,
            });
        }
        self.resolve(EntityId::PLAYER, action, rng)
    }

    /// Lets the enemy holding the turn act on its own policy.
    ///
    /// Returns `None` when no enemy holds the turn.
    pub fn step_enemy<R>(&mut self, rng: &mut R) -> Result<Option<ActionOutcome>>
    where
        R: RandomSource + ?Sized,
    {
        let Some(actor) = self.state.current_turn.filter(|id| !id.is_player()) else {
            return Ok(None);
        };
        let action = decide_action(&self.state, actor, rng)
            .ok_or(RuntimeError::InvalidEntityId(actor))?
            .with_cost(self.config.default_ap_cost);
        self.resolve(actor, action, rng).map(Some)
    }

    fn resolve<R>(&mut self, actor: EntityId, action: Action, rng: &mut R) -> Result<ActionOutcome>
    where
        R: RandomSource + ?Sized,
    {
        if self.is_over() {
            return Err(RuntimeError::CombatFinished);
        }

        let resolution = CombatEngine::new(&self.config).execute(&self.state, actor, action, rng);
        match &resolution.outcome {
            ActionOutcome::Rejected(error) => tracing::debug!(
                code = error.error_code(),
                severity = error.severity().as_str(),
                "{} {} rejected: {}",
                actor,
                action,
                error
            ),
            outcome => tracing::debug!("{} {} -> {:?}", actor, action, outcome),
        }
        for removed in &resolution.removed {
            tracing::debug!("{} was defeated", removed);
        }

        self.state = resolution.state;
        self.actions += 1;
        Ok(resolution.outcome)
    }

    /// Plays frames until combat ends, asking the providers for every turn.
    pub async fn run_to_completion(
        &mut self,
        player: &dyn ActionProvider,
        enemies: &dyn ActionProvider,
        rng: &mut (dyn RandomSource + Send),
        dt: f64,
        max_frames: u32,
    ) -> Result<CombatReport> {
        let start_frame = self.frames;
        while !self.is_over() {
            if self.frames - start_frame >= max_frames {
                tracing::warn!("Combat stalled after {} frames", max_frames);
                return Err(RuntimeError::FrameLimitExceeded { frames: max_frames });
            }

            let Some(actor) = self.advance(dt)? else {
                continue;
            };
            let provider = if actor.is_player() { player } else { enemies };
            let action = provider.provide_action(actor, &self.state, rng).await?;
            self.resolve(actor, action, rng)?;
        }

        let report = self.report();
        tracing::info!(
            "Combat finished: {} after {} frames, {} actions",
            if report.victory { "victory" } else { "defeat" },
            report.frames,
            report.actions
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ScriptedActionProvider, WaitActionProvider};
    use crate::providers::AiActionProvider;
    use game_core::{AiKind, Entity, Grid, PcgRng, Position, SequenceRng, Stats};

    fn duel(enemy_hp: u32) -> CombatState {
        let player = Entity::player(Position::new(0, 0));
        let goblin = Entity::enemy(
            EntityId(1),
            "goblin",
            'g',
            Position::new(1, 0),
            Stats::new(30, 6, 2, 50),
            AiKind::Melee,
        )
        .with_hp(enemy_hp);
        CombatState::new(Grid::new(5, 5), vec![player, goblin]).unwrap()
    }

    #[test]
    fn test_advance_until_player_ready() {
        let mut session = CombatSession::new(duel(30), CombatConfig::default());

        assert_eq!(session.advance(0.5).unwrap(), None);
        assert_eq!(session.advance(0.5).unwrap(), Some(EntityId::PLAYER));
        // pending turn blocks further ticks
        assert_eq!(session.advance(0.5).unwrap(), Some(EntityId::PLAYER));
        assert_eq!(session.state().timeline.gauge(EntityId::PLAYER), Some(100.0));
    }

    #[test]
    fn test_player_action_requires_turn() {
        let mut session = CombatSession::new(duel(30), CombatConfig::default());
        let err = session
            .submit_player_action(Action::wait(), &mut SequenceRng::constant(0.5))
            .unwrap_err();
        assert!(matches!(err, RuntimeError::NotPlayerTurn { current: None }));
    }

    #[test]
    fn test_player_kills_weak_enemy() {
        let mut session = CombatSession::new(duel(3), CombatConfig::default());
        session.advance(1.0).unwrap();

        // 0.99 never rolls a critical
        let outcome = session
            .submit_player_action(Action::attack(Position::new(1, 0)), &mut SequenceRng::constant(0.99))
            .unwrap();
        assert!(matches!(outcome, ActionOutcome::Attacked { target: EntityId(1), .. }));
        assert!(session.is_over());
        assert!(session.is_victory());
        assert!(matches!(session.advance(1.0), Err(RuntimeError::CombatFinished)));
    }

    #[test]
    fn test_enemy_step_charges_configured_cost() {
        let config = CombatConfig {
            default_ap_cost: 40,
            ..CombatConfig::default()
        };
        let player = Entity::player(Position::new(0, 0));
        let fast_goblin = Entity::enemy(
            EntityId(1),
            "goblin",
            'g',
            Position::new(1, 0),
            Stats::new(30, 6, 2, 200),
            AiKind::Melee,
        );
        let state = CombatState::new(Grid::new(5, 5), vec![player, fast_goblin]).unwrap();
        let mut session = CombatSession::new(state, config);

        assert_eq!(session.advance(0.5).unwrap(), Some(EntityId(1)));
        let outcome = session.step_enemy(&mut SequenceRng::constant(0.5)).unwrap();

        assert!(matches!(outcome, Some(ActionOutcome::Attacked { target: EntityId::PLAYER, .. })));
        assert_eq!(session.state().timeline.gauge(EntityId(1)), Some(60.0));
        assert_eq!(session.state().timeline.gauge(EntityId::PLAYER), Some(50.0));
    }

    #[test]
    fn test_step_enemy_ignores_player_turn() {
        let mut session = CombatSession::new(duel(30), CombatConfig::default());
        session.advance(1.0).unwrap();
        assert_eq!(session.step_enemy(&mut SequenceRng::constant(0.5)).unwrap(), None);
    }

    #[tokio::test]
    async fn test_ai_duel_runs_to_completion() {
        let mut session = CombatSession::new(duel(30), CombatConfig::default());
        let ai = AiActionProvider::new();
        let mut rng = PcgRng::seeded(1);

        let report = session
            .run_to_completion(&ai, &ai, &mut rng, 0.1, 10_000)
            .await
            .unwrap();
        assert!(report.victory);
        assert!(report.actions > 0);
        assert!(session.state().enemies().next().is_none());
    }

    #[tokio::test]
    async fn test_frame_limit() {
        let mut session = CombatSession::new(duel(30), CombatConfig::default());
        let waiting = WaitActionProvider;
        let script = ScriptedActionProvider::new(Vec::<Action>::new());
        let mut rng = PcgRng::seeded(1);

        let err = session
            .run_to_completion(&script, &waiting, &mut rng, 0.1, 50)
            .await
            .unwrap_err();
        assert!(matches!(err, RuntimeError::FrameLimitExceeded { frames: 50 }));
    }
}
