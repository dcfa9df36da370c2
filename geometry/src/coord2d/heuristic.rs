//! Estimates of the distance remaining in a [Maze].
//!
//! Every square in a maze costs at least 1 to enter, so both
//! of these never overestimate the remaining cost.

use super::maze::Maze;
use super::Point;

/// Distance along the grid to the nearest goal, ignoring walls.
pub fn manhattan(state: &Point, maze: &Maze) -> usize {
    maze.goals()
        .map(|goal| state.manhattan_distance(*goal) as usize)
        .min()
        .unwrap_or(0)
}

/// Straight line distance to the nearest goal, rounded down.
pub fn euclidean(state: &Point, maze: &Maze) -> usize {
    maze.goals()
        .map(|goal| state.euclidean_distance(*goal).floor() as usize)
        .min()
        .unwrap_or(0)
}

/// No estimate at all.
pub fn null(_state: &Point, _maze: &Maze) -> usize {
    0
}
