//! Melee with a chance to back off when badly hurt.

use game_core::{Action, Entity, Position, RandomSource, distance};

use super::{AiContext, melee};

/// Below this hp ratio the boss considers retreating.
pub const RETREAT_HP_RATIO: f64 = 0.3;
/// Chance to retreat once the hp condition holds.
pub const RETREAT_CHANCE: f64 = 0.3;

/// Like melee, but a wounded adjacent boss may step away instead of attacking.
///
/// The retreat roll is drawn only when the boss is adjacent and below
/// [`RETREAT_HP_RATIO`].
pub fn decide<R>(ctx: &AiContext<'_>, rng: &mut R) -> Action
where
    R: RandomSource + ?Sized,
{
    let Some(target) = ctx.target() else {
        return Action::wait();
    };

    if ctx.is_adjacent_to(target)
        && ctx.actor.hp_ratio() < RETREAT_HP_RATIO
        && rng.chance(RETREAT_CHANCE)
        && let Some(cell) = retreat_position(ctx, target)
    {
        return Action::move_to(cell);
    }

    melee::decide(ctx)
}

/// Free neighbouring cell strictly farther from `threat`, farthest first.
/// Ties keep row-major neighbour order.
pub fn retreat_position(ctx: &AiContext<'_>, threat: &Entity) -> Option<Position> {
    let origin = ctx.actor.position;
    let current = distance(origin, threat.position);

    let mut best: Option<(Position, u32)> = None;
    for cell in ctx.state.grid.neighbors8(origin) {
        if ctx.state.is_occupied(cell) {
            continue;
        }
        let away = distance(cell, threat.position);
        if away > current && best.is_none_or(|(_, d)| away > d) {
            best = Some((cell, away));
        }
    }

    best.map(|(cell, _)| cell)
}
