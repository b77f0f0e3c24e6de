//! Why an action resolved as a no-op.
//!
//! These are never returned as `Err` from the engine: an invalid target simply
//! does nothing, and the reason is reported inside the resolution outcome.

use crate::error::{ErrorContext, ErrorSeverity, GameError};
use crate::state::{EntityId, Position};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    #[error("actor {actor} is not part of this combat")]
    ActorNotFound { actor: EntityId },

    #[error("target {target} is outside the grid")]
    OutOfBounds { actor: EntityId, target: Position },

    #[error("target {target} is occupied by {occupant}")]
    Blocked {
        actor: EntityId,
        target: Position,
        occupant: EntityId,
    },

    #[error("nothing to attack at {target}")]
    NoTarget { actor: EntityId, target: Position },
}

impl ActionError {
    pub fn actor(&self) -> EntityId {
        match *self {
            Self::ActorNotFound { actor }
            | Self::OutOfBounds { actor, .. }
            | Self::Blocked { actor, .. }
            | Self::NoTarget { actor, .. } => actor,
        }
    }
}

impl GameError for ActionError {
    fn context(&self) -> ErrorContext {
        let ctx = ErrorContext::new().with_actor(self.actor());
        match *self {
            Self::ActorNotFound { .. } => ctx,
            Self::OutOfBounds { target, .. }
            | Self::Blocked { target, .. }
            | Self::NoTarget { target, .. } => ctx.with_position(target),
        }
    }

    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ActorNotFound { .. } => ErrorSeverity::Validation,
            Self::OutOfBounds { .. } | Self::Blocked { .. } | Self::NoTarget { .. } => {
                ErrorSeverity::Recoverable
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ActorNotFound { .. } => "ACTION_ACTOR_NOT_FOUND",
            Self::OutOfBounds { .. } => "ACTION_OUT_OF_BOUNDS",
            Self::Blocked { .. } => "ACTION_BLOCKED",
            Self::NoTarget { .. } => "ACTION_NO_TARGET",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocked_move_is_recoverable_with_cell() {
        let err = ActionError::Blocked {
            actor: EntityId::PLAYER,
            target: Position::new(2, 1),
            occupant: EntityId(1),
        };

        assert!(err.severity().is_recoverable());
        assert_eq!(err.error_code(), "ACTION_BLOCKED");
        assert_eq!(
            err.context(),
            ErrorContext::new()
                .with_actor(EntityId::PLAYER)
                .with_position(Position::new(2, 1))
        );
    }

    #[test]
    fn test_unknown_actor_is_validation_without_cell() {
        let err = ActionError::ActorNotFound { actor: EntityId(7) };

        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(err.context().position, None);
    }
}
