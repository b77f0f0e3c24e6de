//! Authoritative combat state representation.
//!
//! A [`CombatState`] is a snapshot: the engine reads one and returns the next.
//! Entities are owned exclusively by the state's entity list, and the timeline
//! tracks exactly the living entities.
mod common;
mod entity;
mod error;
mod turn;

pub use common::{EntityId, Position};
pub use entity::{AiKind, Entity, EntityKind, Stats};
pub use error::InitializationError;
pub use turn::Timeline;

use crate::grid::Grid;

/// Canonical snapshot of one encounter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatState {
    pub grid: Grid,
    /// Living combatants, player first, enemies in spawn order.
    pub entities: Vec<Entity>,
    pub timeline: Timeline,
    /// Entity whose gauge is ready and who acts next, if any.
    ///
    /// Invariant: names an id present in both `entities` and `timeline`.
    pub current_turn: Option<EntityId>,
}

impl CombatState {
    /// Validates placement and builds a state with every gauge at zero.
    pub fn new(grid: Grid, entities: Vec<Entity>) -> Result<Self, InitializationError> {
        for (index, entity) in entities.iter().enumerate() {
            if !grid.contains(entity.position) {
                return Err(InitializationError::out_of_bounds(
                    entity.id,
                    entity.position,
                ));
            }
            if entity.hp > entity.stats.max_hp {
                return Err(InitializationError::hp_above_maximum(
                    entity.id,
                    entity.hp,
                    entity.stats.max_hp,
                ));
            }
            for earlier in &entities[..index] {
                if earlier.id == entity.id {
                    return Err(InitializationError::duplicate(entity.id));
                }
                if earlier.position == entity.position {
                    return Err(InitializationError::occupied(
                        entity.id,
                        entity.position,
                        earlier.id,
                    ));
                }
            }
        }

        let living: Vec<Entity> = entities.into_iter().filter(|e| !e.is_dead()).collect();
        let timeline = Timeline::initialize(living.iter().map(|e| e.id));

        Ok(Self {
            grid,
            entities: living,
            timeline,
            current_turn: None,
        })
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Living entity standing on `position`.
    pub fn entity_at(&self, position: Position) -> Option<&Entity> {
        self.entities
            .iter()
            .find(|e| e.position == position && !e.is_dead())
    }

    pub fn player(&self) -> Option<&Entity> {
        self.entities.iter().find(|e| e.is_player())
    }

    pub fn enemies(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.is_enemy())
    }

    pub fn has_enemies(&self) -> bool {
        self.entities.iter().any(Entity::is_enemy)
    }

    pub fn is_occupied(&self, position: Position) -> bool {
        self.entity_at(position).is_some()
    }

    /// Replaces the entity with the same id. Returns false if absent.
    pub(crate) fn replace_entity(&mut self, updated: Entity) -> bool {
        match self.entities.iter_mut().find(|e| e.id == updated.id) {
            Some(slot) => {
                *slot = updated;
                true
            }
            None => false,
        }
    }

    /// Drops dead entities from both the entity list and the timeline.
    ///
    /// Returns the ids removed, in entity-list order.
    pub(crate) fn purge_dead(&mut self) -> Vec<EntityId> {
        let removed: Vec<EntityId> = self
            .entities
            .iter()
            .filter(|e| e.is_dead())
            .map(|e| e.id)
            .collect();
        self.entities.retain(|e| !e.is_dead());
        for id in &removed {
            self.timeline.remove(*id);
        }
        if self.current_turn.is_some_and(|id| removed.contains(&id)) {
            self.current_turn = None;
        }
        removed
    }
}
