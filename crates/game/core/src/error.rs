//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (`ActionError`, `InitializationError`) live next to
//! the code that raises them and implement [`GameError`] so callers can
//! classify failures uniformly.

use crate::state::{EntityId, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The caller may try another action. Examples: destination blocked,
    /// empty target cell.
    Recoverable,

    /// Invalid input rejected outright. Examples: actor not found, duplicate
    /// entity id.
    Validation,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Entity and cell an error refers to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorContext {
    pub actor: Option<EntityId>,
    pub position: Option<Position>,
}

impl ErrorContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            actor: None,
            position: None,
        }
    }

    #[must_use]
    pub const fn with_actor(mut self, actor: EntityId) -> Self {
        self.actor = Some(actor);
        self
    }

    #[must_use]
    pub const fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }
}

pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    fn context(&self) -> ErrorContext;

    /// Stable identifier for logs.
    fn error_code(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_classification() {
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(!ErrorSeverity::Validation.is_recoverable());
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
    }

    #[test]
    fn test_context_builder() {
        let ctx = ErrorContext::new()
            .with_actor(EntityId(3))
            .with_position(Position::new(1, 2));

        assert_eq!(ctx.actor, Some(EntityId(3)));
        assert_eq!(ctx.position, Some(Position::new(1, 2)));
    }
}
