//! Combat engine: initiative ticks and action resolution.
//!
//! The engine never mutates its input. [`CombatEngine::tick`] and
//! [`CombatEngine::execute`] read a [`CombatState`] and return the next one,
//! so drivers can keep, diff, or replay snapshots freely.
mod turns;

pub use turns::{accumulate, next_actor};

use crate::action::{Action, ActionError, ActionKind};
use crate::combat::{damage, lifesteal_heal};
use crate::config::CombatConfig;
use crate::env::RandomSource;
use crate::state::{CombatState, EntityId, Position};

/// What an executed action did.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionOutcome {
    Moved {
        from: Position,
        to: Position,
    },
    Attacked {
        target: EntityId,
        damage: u32,
        critical: bool,
        /// Health the attacker regained through lifesteal.
        healed: u32,
    },
    Waited,
    /// The action was a no-op; AP is still charged unless the actor is unknown.
    Rejected(ActionError),
}

/// Next state plus a description of what happened.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    pub state: CombatState,
    pub outcome: ActionOutcome,
    /// Entities that died and were purged during this step.
    pub removed: Vec<EntityId>,
}

impl Resolution {
    pub fn is_rejected(&self) -> bool {
        matches!(self.outcome, ActionOutcome::Rejected(_))
    }
}

/// Stateless rules engine parameterised by [`CombatConfig`].
#[derive(Clone, Copy, Debug)]
pub struct CombatEngine<'a> {
    config: &'a CombatConfig,
}

impl<'a> CombatEngine<'a> {
    pub fn new(config: &'a CombatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CombatConfig {
        self.config
    }

    /// Resolves one action for `actor`.
    ///
    /// Steps, in order: apply the action (invalid targets are no-ops), purge
    /// the dead from entities and timeline, charge AP clamped at zero, clear
    /// `current_turn`. An unknown actor leaves the state untouched.
    pub fn execute<R>(
        &self,
        state: &CombatState,
        actor: EntityId,
        action: Action,
        rng: &mut R,
    ) -> Resolution
    where
        R: RandomSource + ?Sized,
    {
        let Some(acting) = state.entity(actor).filter(|e| !e.is_dead()).cloned() else {
            return Resolution {
                state: state.clone(),
                outcome: ActionOutcome::Rejected(ActionError::ActorNotFound { actor }),
                removed: Vec::new(),
            };
        };

        let mut next = state.clone();

        let outcome = match action.kind {
            ActionKind::Move(target) => {
                if !next.grid.contains(target) {
                    ActionOutcome::Rejected(ActionError::OutOfBounds { actor, target })
                } else if let Some(occupant) = next.entity_at(target).filter(|e| e.id != actor) {
                    ActionOutcome::Rejected(ActionError::Blocked {
                        actor,
                        target,
                        occupant: occupant.id,
                    })
                } else {
                    next.replace_entity(acting.moved_to(target));
                    ActionOutcome::Moved {
                        from: acting.position,
                        to: target,
                    }
                }
            }
            ActionKind::Attack(target) => {
                match next
                    .entity_at(target)
                    .filter(|e| e.id != actor)
                    .cloned()
                {
                    None => ActionOutcome::Rejected(ActionError::NoTarget { actor, target }),
                    Some(defender) => {
                        let (damaged, hit) = damage(&acting, &defender, rng);
                        let hp_lost = defender.hp - damaged.hp;
                        next.replace_entity(damaged);

                        let heal = lifesteal_heal(hp_lost, acting.effects().lifesteal_percent);
                        if heal > 0 {
                            next.replace_entity(acting.healed(heal));
                        }

                        ActionOutcome::Attacked {
                            target: defender.id,
                            damage: hit.damage,
                            critical: hit.critical,
                            healed: heal,
                        }
                    }
                }
            }
            ActionKind::Wait => ActionOutcome::Waited,
        };

        let removed = next.purge_dead();
        next.timeline.consume(actor, action.ap_cost);
        next.current_turn = None;

        Resolution {
            state: next,
            outcome,
            removed,
        }
    }
}

/// Combat ends when the player is gone or no enemy remains.
pub fn is_combat_over(state: &CombatState) -> bool {
    state.player().is_none() || !state.has_enemies()
}

/// Player alive and every enemy defeated.
pub fn is_victory(state: &CombatState) -> bool {
    state.player().is_some() && !state.has_enemies()
}
