//! Asynchronous abstraction for sourcing player and enemy intent.
//!
//! Session drivers plug in [`ActionProvider`] implementations so combat can
//! run with human input, scripted fixtures, or AI policies.
use std::collections::VecDeque;

use async_trait::async_trait;
use game_core::{Action, CombatState, EntityId, RandomSource};
use tokio::sync::Mutex;

use super::errors::Result;

/// Trait for providing actions based on the current combat state.
///
/// Different implementations can handle:
/// - Player input (from a UI or CLI)
/// - Enemy AI decisions
/// - Scripted/replayed actions
/// - Testing fixtures
#[async_trait]
pub trait ActionProvider: Send + Sync {
    /// Provide an action for the given entity based on the current state.
    ///
    /// # Arguments
    /// * `entity` - The entity that needs to act
    /// * `state` - Read-only snapshot of the current combat
    /// * `rng` - Draw source for policies that roll dice
    async fn provide_action(
        &self,
        entity: EntityId,
        state: &CombatState,
        rng: &mut (dyn RandomSource + Send),
    ) -> Result<Action>;
}

/// A simple action provider that always returns Wait action.
/// Useful for testing or as a fallback.
pub struct WaitActionProvider;

#[async_trait]
impl ActionProvider for WaitActionProvider {
    async fn provide_action(
        &self,
        _entity: EntityId,
        _state: &CombatState,
        _rng: &mut (dyn RandomSource + Send),
    ) -> Result<Action> {
        Ok(Action::wait())
    }
}

/// Replays a fixed queue of actions, then waits forever.
#[derive(Default)]
pub struct ScriptedActionProvider {
    queue: Mutex<VecDeque<Action>>,
}

impl ScriptedActionProvider {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            queue: Mutex::new(actions.into_iter().collect()),
        }
    }

    pub async fn push(&self, action: Action) {
        self.queue.lock().await.push_back(action);
    }

    pub async fn remaining(&self) -> usize {
        self.queue.lock().await.len()
    }
}

#[async_trait]
impl ActionProvider for ScriptedActionProvider {
    async fn provide_action(
        &self,
        _entity: EntityId,
        _state: &CombatState,
        _rng: &mut (dyn RandomSource + Send),
    ) -> Result<Action> {
        Ok(self.queue.lock().await.pop_front().unwrap_or_else(Action::wait))
    }
}
