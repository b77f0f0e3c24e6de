use std::collections::BTreeMap;

use super::EntityId;
use crate::config::CombatConfig;

/// Initiative gauges keyed by entity id.
///
/// Keys exist only for living entities. Iteration is in ascending id order,
/// which places the player first and fixes tie-breaking.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timeline {
    gauges: BTreeMap<EntityId, f64>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every id starts at zero.
    pub fn initialize(ids: impl IntoIterator<Item = EntityId>) -> Self {
        Self {
            gauges: ids.into_iter().map(|id| (id, 0.0)).collect(),
        }
    }

    pub fn gauge(&self, id: EntityId) -> Option<f64> {
        self.gauges.get(&id).copied()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.gauges.contains_key(&id)
    }

    pub fn set(&mut self, id: EntityId, gauge: f64) {
        self.gauges.insert(id, gauge.max(0.0));
    }

    pub fn remove(&mut self, id: EntityId) -> Option<f64> {
        self.gauges.remove(&id)
    }

    /// `gauge = max(0, gauge - cost)`. Unknown ids are ignored.
    pub fn consume(&mut self, id: EntityId, cost: u32) {
        if let Some(gauge) = self.gauges.get_mut(&id) {
            *gauge = (*gauge - f64::from(cost)).max(0.0);
        }
    }

    pub fn is_ready(&self, id: EntityId) -> bool {
        self.gauge(id)
            .is_some_and(|g| g >= CombatConfig::READY_THRESHOLD)
    }

    /// True if any gauge has reached the ready threshold.
    pub fn any_ready(&self) -> bool {
        self.gauges
            .values()
            .any(|&g| g >= CombatConfig::READY_THRESHOLD)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, f64)> + '_ {
        self.gauges.iter().map(|(&id, &g)| (id, g))
    }

    pub fn len(&self) -> usize {
        self.gauges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gauges.is_empty()
    }
}
