//! Errors raised while assembling a combat state.

use crate::error::{ErrorContext, ErrorSeverity, GameError};
use crate::state::{EntityId, Position};

/// Entity list rejected by [`super::CombatState::new`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InitializationError {
    #[error("entity {id} appears more than once")]
    DuplicateEntity { id: EntityId, context: ErrorContext },

    #[error("entity {id} placed outside the grid at {position}")]
    OutOfBounds {
        id: EntityId,
        position: Position,
        context: ErrorContext,
    },

    #[error("entity {id} placed on {position}, already occupied by {occupant}")]
    PositionOccupied {
        id: EntityId,
        position: Position,
        occupant: EntityId,
        context: ErrorContext,
    },

    #[error("entity {id} has hp {hp} above its maximum {max_hp}")]
    HpAboveMaximum {
        id: EntityId,
        hp: u32,
        max_hp: u32,
        context: ErrorContext,
    },
}

impl InitializationError {
    pub fn duplicate(id: EntityId) -> Self {
        Self::DuplicateEntity {
            id,
            context: ErrorContext::new().with_actor(id),
        }
    }

    pub fn out_of_bounds(id: EntityId, position: Position) -> Self {
        Self::OutOfBounds {
            id,
            position,
            context: ErrorContext::new().with_actor(id).with_position(position),
        }
    }

    pub fn occupied(id: EntityId, position: Position, occupant: EntityId) -> Self {
        Self::PositionOccupied {
            id,
            position,
            occupant,
            context: ErrorContext::new().with_actor(id).with_position(position),
        }
    }

    pub fn hp_above_maximum(id: EntityId, hp: u32, max_hp: u32) -> Self {
        Self::HpAboveMaximum {
            id,
            hp,
            max_hp,
            context: ErrorContext::new().with_actor(id),
        }
    }
}

impl GameError for InitializationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn context(&self) -> ErrorContext {
        use InitializationError::*;
        match *self {
            DuplicateEntity { context, .. }
            | OutOfBounds { context, .. }
            | PositionOccupied { context, .. }
            | HpAboveMaximum { context, .. } => context,
        }
    }

    fn error_code(&self) -> &'static str {
        use InitializationError::*;
        match self {
            DuplicateEntity { .. } => "INIT_DUPLICATE_ENTITY",
            OutOfBounds { .. } => "INIT_OUT_OF_BOUNDS",
            PositionOccupied { .. } => "INIT_POSITION_OCCUPIED",
            HpAboveMaximum { .. } => "INIT_HP_ABOVE_MAXIMUM",
        }
    }
}
