//! A* over the open grid with 4-directional unit-cost moves.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use super::{Grid, distance};
use crate::state::Position;

/// Finds a shortest orthogonal path from `start` to `goal`, both inclusive.
///
/// - invalid `start` or `goal` returns an empty path
/// - `start == goal` returns `[start]`
/// - ties are broken by lowest `(f, h, position)` so results are reproducible
///
/// Entities are not obstacles here; callers only ever step to `path[1]` and the
/// engine rejects moves into occupied cells.
pub fn find_path(grid: &Grid, start: Position, goal: Position) -> Vec<Position> {
    if !grid.contains(start) || !grid.contains(goal) {
        return Vec::new();
    }
    if start == goal {
        return vec![start];
    }

    let mut frontier = BinaryHeap::new();
    let mut came_from: HashMap<Position, Position> = HashMap::new();
    let mut cost_so_far: HashMap<Position, u32> = HashMap::new();

    let h0 = distance(start, goal);
    frontier.push(Reverse((h0, h0, start)));
    cost_so_far.insert(start, 0);

    while let Some(Reverse((_, _, current))) = frontier.pop() {
        if current == goal {
            let mut path = vec![goal];
            let mut node = goal;
            while let Some(&prev) = came_from.get(&node) {
                path.push(prev);
                node = prev;
            }
            path.reverse();
            return path;
        }

        let current_cost = cost_so_far.get(&current).copied().unwrap_or(u32::MAX);
        for next in grid.neighbors4(current) {
            let new_cost = current_cost.saturating_add(1);
            let better = cost_so_far
                .get(&next)
                .is_none_or(|&known| new_cost < known);
            if better {
                cost_so_far.insert(next, new_cost);
                came_from.insert(next, current);
                let h = distance(next, goal);
                frontier.push(Reverse((new_cost + h, h, next)));
            }
        }
    }

    Vec::new()
}
