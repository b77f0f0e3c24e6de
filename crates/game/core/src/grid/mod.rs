//! Rectangular combat grid and distance helpers.
//!
//! The grid holds no obstacles; occupancy is a property of the entity list and
//! is enforced by the engine, not by pathfinding.
mod path;

use arrayvec::ArrayVec;

use crate::config::CombatConfig;
use crate::state::Position;

pub use path::find_path;

/// Orthogonal step offsets in exploration order: up, down, left, right.
pub const CARDINAL_OFFSETS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Surrounding offsets in row-major order, skipping the centre.
pub const SURROUNDING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Immutable combat arena dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    pub width: u32,
    pub height: u32,
}

impl Grid {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Default encounter arena.
    pub const fn arena() -> Self {
        Self::new(CombatConfig::ARENA_WIDTH, CombatConfig::ARENA_HEIGHT)
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height
    }

    /// In-bounds orthogonal neighbours in [`CARDINAL_OFFSETS`] order.
    pub fn neighbors4(&self, pos: Position) -> ArrayVec<Position, 4> {
        CARDINAL_OFFSETS
            .iter()
            .map(|&(dx, dy)| pos.offset(dx, dy))
            .filter(|p| self.contains(*p))
            .collect()
    }

    /// In-bounds surrounding cells in [`SURROUNDING_OFFSETS`] order.
    pub fn neighbors8(&self, pos: Position) -> ArrayVec<Position, 8> {
        SURROUNDING_OFFSETS
            .iter()
            .map(|&(dx, dy)| pos.offset(dx, dy))
            .filter(|p| self.contains(*p))
            .collect()
    }
}

/// Bounds check against the grid.
pub fn is_valid_position(grid: &Grid, pos: Position) -> bool {
    grid.contains(pos)
}

/// Manhattan distance between two cells.
pub fn distance(a: Position, b: Position) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

/// Melee adjacency: orthogonal neighbour or the same cell.
pub fn is_adjacent(a: Position, b: Position) -> bool {
    f64::from(distance(a, b)) <= CombatConfig::ADJACENCY_RANGE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let grid = Grid::new(5, 5);
        assert!(is_valid_position(&grid, Position::new(0, 0)));
        assert!(is_valid_position(&grid, Position::new(4, 4)));
        assert!(!is_valid_position(&grid, Position::new(5, 0)));
        assert!(!is_valid_position(&grid, Position::new(0, -1)));
    }

    #[test]
    fn test_distance_is_manhattan() {
        assert_eq!(distance(Position::new(0, 0), Position::new(3, 4)), 7);
        assert_eq!(distance(Position::new(2, 2), Position::new(2, 2)), 0);
    }

    #[test]
    fn test_diagonal_is_not_adjacent() {
        let origin = Position::new(3, 3);
        assert!(is_adjacent(origin, Position::new(3, 4)));
        assert!(is_adjacent(origin, origin));
        assert!(!is_adjacent(origin, Position::new(4, 4)));
    }

    #[test]
    fn test_neighbors_clip_at_corner() {
        let grid = Grid::new(3, 3);
        let n4 = grid.neighbors4(Position::ORIGIN);
        assert_eq!(n4.as_slice(), &[Position::new(0, 1), Position::new(1, 0)]);

        let n8 = grid.neighbors8(Position::ORIGIN);
        assert_eq!(
            n8.as_slice(),
            &[Position::new(1, 0), Position::new(0, 1), Position::new(1, 1)]
        );
    }
}
