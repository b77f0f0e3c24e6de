//! Read-only view shared by the decision policies.

use game_core::{CombatState, Entity, Position, distance, find_path, is_adjacent};

/// What one entity sees when picking its action.
///
/// Enemies always target the player. The player targets the nearest enemy,
/// keeping spawn order on ties.
pub struct AiContext<'a> {
    pub actor: &'a Entity,
    pub state: &'a CombatState,
    target: Option<&'a Entity>,
}

impl<'a> AiContext<'a> {
    pub fn new(actor: &'a Entity, state: &'a CombatState) -> Self {
        let target = if actor.is_player() {
            state
                .enemies()
                .min_by_key(|e| distance(actor.position, e.position))
        } else {
            state.player()
        };

        Self {
            actor,
            state,
            target,
        }
    }

    pub fn target(&self) -> Option<&'a Entity> {
        self.target
    }

    pub fn is_adjacent_to(&self, target: &Entity) -> bool {
        is_adjacent(self.actor.position, target.position)
    }

    /// Next cell on the shortest open-grid path to `goal`, if the actor is not
    /// already there.
    pub fn step_toward(&self, goal: Position) -> Option<Position> {
        let path = find_path(&self.state.grid, self.actor.position, goal);
        (path.len() > 1).then(|| path[1])
    }
}
