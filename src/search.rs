use itertools::Itertools;
use log::{debug, info, warn};

use crate::bfs::{bfs, bfs_reach};
use crate::coordinate::Coordinate;
use crate::grid::Grid;

/// Breadth-first path search over the 4-connected passable cells of a [Grid]. The search only
/// reads the grid; its frontier and visited marks are allocated per call, so one [PathSearch]
/// can serve concurrent queries against a shared grid.
#[derive(Clone, Debug)]
pub struct PathSearch {
    /// Return `[start, end]` instead of `[start]` when both endpoints are the same cell. This
    /// also applies when `start` is itself one of the goals of a multi-goal search.
    pub repeat_trivial_endpoint: bool,
    /// Reject endpoints on different connected components before searching.
    pub use_components: bool,
}

impl Default for PathSearch {
    fn default() -> PathSearch {
        PathSearch {
            repeat_trivial_endpoint: false,
            use_components: true,
        }
    }
}

impl PathSearch {
    pub fn new() -> PathSearch {
        PathSearch::default()
    }

    /// Computes a minimum-edge-count path from `start` to `end`, inclusive of both. Endpoints
    /// that are out of bounds or blocked have no path and yield [None], as does an `end` that
    /// cannot be reached. When several shortest paths exist any one of them may be returned.
    pub fn find_path(
        &self,
        grid: &Grid,
        start: Coordinate,
        end: Coordinate,
    ) -> Option<Vec<Coordinate>> {
        if !grid.is_passable(start) || !grid.is_passable(end) {
            debug!("{} or {} is out of bounds or blocked", start, end);
            return None;
        }
        if start == end {
            return Some(if self.repeat_trivial_endpoint {
                vec![start, end]
            } else {
                vec![start]
            });
        }
        if self.use_components && !grid.connected(start, end) {
            info!("{} is not reachable from {}", end, start);
            return None;
        }
        let path = bfs(
            &start,
            |&node| grid.passable_neighbours(node),
            |&node| node == end,
        );
        if path.is_none() && self.use_components {
            warn!("{} shares a component with {} but could not be pathed to", end, start);
        }
        path
    }

    /// Computes a path from `start` to whichever of `goals` is closest and returns the selected
    /// goal alongside the path. Goals that are out of bounds or blocked are ignored.
    pub fn find_path_to_any(
        &self,
        grid: &Grid,
        start: Coordinate,
        goals: &[Coordinate],
    ) -> Option<(Coordinate, Vec<Coordinate>)> {
        if !grid.is_passable(start) {
            debug!("{} is out of bounds or blocked", start);
            return None;
        }
        let goals = goals
            .iter()
            .copied()
            .filter(|&goal| grid.is_passable(goal))
            .filter(|&goal| !self.use_components || grid.connected(start, goal))
            .collect::<Vec<_>>();
        if goals.is_empty() {
            info!("None of the goals are reachable from {}", start);
            return None;
        }
        let path = bfs(
            &start,
            |&node| grid.passable_neighbours(node),
            |node| goals.contains(node),
        )?;
        let goal = *path.last()?;
        if self.repeat_trivial_endpoint && path.len() == 1 {
            return Some((goal, vec![start, goal]));
        }
        Some((goal, path))
    }

    /// Like [find_path](Self::find_path), but also succeeds on reaching any cell adjacent to
    /// `goal`. Useful when the goal itself is blocked, for example when walking up to a wall.
    pub fn find_path_approximate(
        &self,
        grid: &Grid,
        start: Coordinate,
        goal: Coordinate,
    ) -> Option<Vec<Coordinate>> {
        let mut targets = goal.neighbours();
        targets.push(goal);
        self.find_path_to_any(grid, start, &targets)
            .map(|(_, path)| path)
    }
}

/// Computes a shortest path with the default [PathSearch] settings.
pub fn find_path(grid: &Grid, start: Coordinate, end: Coordinate) -> Option<Vec<Coordinate>> {
    PathSearch::default().find_path(grid, start, end)
}

/// Edge distance from `source` to every cell, indexed by [Grid::index]. Blocked and unreachable
/// cells, or every cell if `source` itself is not passable, are [None].
pub fn distance_map(grid: &Grid, source: Coordinate) -> Vec<Option<usize>> {
    let (rows, cols) = grid.dimensions();
    let mut distances = vec![None; rows * cols];
    if !grid.is_passable(source) {
        return distances;
    }
    for (coordinate, distance) in bfs_reach(&source, |&node| grid.passable_neighbours(node)) {
        if let Some(ix) = grid.index(coordinate) {
            distances[ix] = Some(distance);
        }
    }
    distances
}

/// Checks that `path` is non-empty, stays on passable cells and only takes 4-connected steps.
pub fn is_valid_path(grid: &Grid, path: &[Coordinate]) -> bool {
    !path.is_empty()
        && path.iter().all(|&c| grid.is_passable(c))
        && path.iter().tuple_windows().all(|(a, b)| a.is_adjacent(b))
}

/// Number of edges along `path`.
pub fn path_cost(path: &[Coordinate]) -> usize {
    path.len().saturating_sub(1)
}
