/// Combat configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// When set, gauges stop accumulating while any entity is ready to act.
    ///
    /// Off by default: accumulation always proceeds and the strictly greatest
    /// ready gauge acts first.
    pub hold_when_ready: bool,

    /// AP cost charged for actions that do not carry an explicit cost.
    pub default_ap_cost: u32,
}

impl CombatConfig {
    // ===== fixed rule constants =====
    /// Gauge value at which an entity may act.
    pub const READY_THRESHOLD: f64 = 100.0;
    /// Inclusive distance treated as melee range.
    pub const ADJACENCY_RANGE: f64 = 1.5;
    /// Critical multiplier applied when no relic overrides it.
    pub const DEFAULT_CRITICAL_MULTIPLIER: f64 = 1.5;
    /// Encounter arena size.
    pub const ARENA_WIDTH: u32 = 15;
    pub const ARENA_HEIGHT: u32 = 10;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_AP_COST: u32 = 100;

    pub fn new() -> Self {
        Self {
            hold_when_ready: false,
            default_ap_cost: Self::DEFAULT_AP_COST,
        }
    }

    pub fn with_hold_when_ready(mut self, hold: bool) -> Self {
        self.hold_when_ready = hold;
        self
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Dungeon generation parameters.
///
/// Only `floors_count` and `max_rest_rooms_per_floor` shape generation today.
/// `min_rooms_to_reach_boss`, `max_rooms_to_reach_boss` and `branching_factor`
/// are reserved: they load from `config.toml`, but the
/// fixed six-level layout does not read them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DungeonOptions {
    pub floors_count: u32,
    pub min_rooms_to_reach_boss: u32,
    pub max_rooms_to_reach_boss: u32,
    pub branching_factor: u32,
    pub max_rest_rooms_per_floor: u32,
}

impl DungeonOptions {
    pub const DEFAULT_FLOORS: u32 = 3;
    pub const DEFAULT_MAX_REST_ROOMS: u32 = 2;

    pub fn with_floors(mut self, floors_count: u32) -> Self {
        self.floors_count = floors_count;
        self
    }
}

impl Default for DungeonOptions {
    fn default() -> Self {
        Self {
            floors_count: Self::DEFAULT_FLOORS,
            min_rooms_to_reach_boss: 4,
            max_rooms_to_reach_boss: 6,
            branching_factor: 2,
            max_rest_rooms_per_floor: Self::DEFAULT_MAX_REST_ROOMS,
        }
    }
}
