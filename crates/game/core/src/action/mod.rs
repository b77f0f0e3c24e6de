//! Actions an entity can submit on its turn.
mod error;

pub use error::ActionError;

use crate::config::CombatConfig;
use crate::state::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    /// Relocate to the target cell if it is inside the grid and free.
    Move(Position),
    /// Strike whatever stands on the target cell.
    Attack(Position),
    Wait,
}

/// An action with the AP it costs. Costs share the gauge's 0-100+ scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    pub kind: ActionKind,
    pub ap_cost: u32,
}

impl Action {
    pub const fn new(kind: ActionKind, ap_cost: u32) -> Self {
        Self { kind, ap_cost }
    }

    pub const fn move_to(target: Position) -> Self {
        Self::new(ActionKind::Move(target), CombatConfig::DEFAULT_AP_COST)
    }

    pub const fn attack(target: Position) -> Self {
        Self::new(ActionKind::Attack(target), CombatConfig::DEFAULT_AP_COST)
    }

    pub const fn wait() -> Self {
        Self::new(ActionKind::Wait, CombatConfig::DEFAULT_AP_COST)
    }

    #[must_use]
    pub const fn with_cost(mut self, ap_cost: u32) -> Self {
        self.ap_cost = ap_cost;
        self
    }

    pub const fn target(&self) -> Option<Position> {
        match self.kind {
            ActionKind::Move(p) | ActionKind::Attack(p) => Some(p),
            ActionKind::Wait => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ActionKind::Move(p) => write!(f, "move {p} ({} AP)", self.ap_cost),
            ActionKind::Attack(p) => write!(f, "attack {p} ({} AP)", self.ap_cost),
            ActionKind::Wait => write!(f, "wait ({} AP)", self.ap_cost),
        }
    }
}
