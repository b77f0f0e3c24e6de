use crate::config::CombatConfig;
use crate::state::{CombatState, Entity, EntityId, Timeline};

use super::CombatEngine;

/// Advances every living entity's gauge by `max(0, speed) * dt`.
///
/// Gauges never decrease here; a negative `dt` is treated as zero.
pub fn accumulate(timeline: &Timeline, entities: &[Entity], dt: f64) -> Timeline {
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    let mut next = timeline.clone();
    for entity in entities.iter().filter(|e| !e.is_dead()) {
        if let Some(gauge) = next.gauge(entity.id) {
            let gain = f64::from(entity.stats.speed.max(0)) * dt;
            next.set(entity.id, gauge + gain);
        }
    }
    next
}

/// Picks the strictly greatest gauge at or above the ready threshold.
///
/// Ties keep the first entry in id order. Returns `None` when nobody is ready.
pub fn next_actor(timeline: &Timeline) -> Option<EntityId> {
    let mut best: Option<(EntityId, f64)> = None;
    for (id, gauge) in timeline.iter() {
        if gauge < CombatConfig::READY_THRESHOLD {
            continue;
        }
        if best.is_none_or(|(_, top)| gauge > top) {
            best = Some((id, gauge));
        }
    }
    best.map(|(id, _)| id)
}

/// Turn scheduling methods for CombatEngine.
impl CombatEngine<'_> {
    /// One frame of initiative: accumulate gauges, then pick who acts.
    pub fn tick(&self, state: &CombatState, dt: f64) -> CombatState {
        let hold = self.config.hold_when_ready && state.timeline.any_ready();
        let timeline = if hold {
            state.timeline.clone()
        } else {
            accumulate(&state.timeline, &state.entities, dt)
        };
        let current_turn = next_actor(&timeline);

        CombatState {
            timeline,
            current_turn,
            ..state.clone()
        }
    }

    /// True if `entity` has a gauge at or above the ready threshold.
    pub fn can_act(&self, state: &CombatState, entity: EntityId) -> bool {
        state.timeline.is_ready(entity)
    }
}
