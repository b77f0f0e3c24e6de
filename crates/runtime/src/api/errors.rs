//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from repositories, encounter construction, and session or
//! run misuse so callers can bubble them up with consistent context.
use std::fmt;

use game_core::{EntityId, InitializationError};
use thiserror::Error;

pub use crate::repository::RepositoryError;
use crate::run::GamePhase;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{kind} action provider not set")]
    ProviderNotSet { kind: ProviderKind },

    #[error("entity {0} is not part of the combat")]
    InvalidEntityId(EntityId),

    #[error("player action submitted while {current:?} holds the turn")]
    NotPlayerTurn { current: Option<EntityId> },

    #[error("combat has already finished")]
    CombatFinished,

    #[error("combat is still in progress")]
    CombatInProgress,

    #[error("combat did not finish within {frames} frames")]
    FrameLimitExceeded { frames: u32 },

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("failed to build encounter")]
    InitialState(#[source] InitializationError),

    #[error("no floor has been generated")]
    NoActiveFloor,

    #[error("room {0} cannot be entered")]
    RoomUnavailable(String),

    #[error("run is in the {actual} phase, expected {expected}")]
    InvalidPhase {
        expected: GamePhase,
        actual: GamePhase,
    },

    #[error("reward choice {index} is out of range ({available} offered)")]
    InvalidRewardChoice { index: usize, available: usize },
}

impl From<InitializationError> for RuntimeError {
    fn from(error: InitializationError) -> Self {
        RuntimeError::InitialState(error)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ProviderKind {
    Player,
    Enemy,
}

impl ProviderKind {
    pub fn for_entity(entity: EntityId) -> Self {
        if entity.is_player() {
            ProviderKind::Player
        } else {
            ProviderKind::Enemy
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProviderKind::Player => "player",
            ProviderKind::Enemy => "enemy",
        };
        write!(f, "{}", label)
    }
}
