//! Close in and strike.

use game_core::Action;

use super::AiContext;

/// Attack when adjacent, otherwise step along the path toward the target.
pub fn decide(ctx: &AiContext<'_>) -> Action {
    let Some(target) = ctx.target() else {
        return Action::wait();
    };

    if ctx.is_adjacent_to(target) {
        return Action::attack(target.position);
    }

    match ctx.step_toward(target.position) {
        Some(next) => Action::move_to(next),
        None => Action::wait(),
    }
}
