//! Decision policies for combatants.
//!
//! [`decide_action`] is a pure function of the combat snapshot and a random
//! source. It dispatches on the actor's [`AiKind`]:
//!
//! - **melee**: attack when adjacent, otherwise follow the shortest path
//! - **boss**: melee, plus a chance to retreat when badly hurt
//!
//! The player has no `AiKind` and is driven by the melee policy.

pub mod boss;
pub mod context;
pub mod melee;
pub mod provider;

use game_core::{Action, AiKind, CombatState, EntityId, RandomSource};

pub use context::AiContext;
pub use provider::AiActionProvider;

/// Picks the action `actor` takes now. `None` only when the actor is absent.
pub fn decide_action<R>(state: &CombatState, actor: EntityId, rng: &mut R) -> Option<Action>
where
    R: RandomSource + ?Sized,
{
    let entity = state.entity(actor)?;
    let ctx = AiContext::new(entity, state);

    let action = match entity.ai() {
        None | Some(AiKind::Melee) => melee::decide(&ctx),
        Some(AiKind::Boss) => boss::decide(&ctx, rng),
    };
    Some(action)
}
