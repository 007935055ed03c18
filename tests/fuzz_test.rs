//! Fuzzes the path search by checking for many random grids that a path is found exactly when
//! the goal is reachable, and that its length matches an independent BFS distance.

use grid_bfs::{find_path, is_valid_path, path_cost, Coordinate, Grid, PathSearch};
use rand::prelude::*;
use std::collections::VecDeque;

fn random_grid(rows: usize, cols: usize, rng: &mut StdRng) -> Grid {
    let mut blocked = Vec::new();
    for row in 0..rows {
        for col in 0..cols {
            if rng.gen_bool(0.4) {
                blocked.push(Coordinate::new(row, col));
            }
        }
    }
    Grid::new(rows, cols, &blocked).unwrap()
}

/// Plain level-order BFS over a dense distance table, written without the crate's search code.
fn reference_distance(grid: &Grid, start: Coordinate, end: Coordinate) -> Option<usize> {
    let passable = |r: i64, c: i64| {
        r >= 0
            && c >= 0
            && grid.is_passable(Coordinate::new(r as usize, c as usize))
    };
    if !passable(start.row as i64, start.col as i64) || !passable(end.row as i64, end.col as i64)
    {
        return None;
    }
    let (rows, cols) = grid.dimensions();
    let mut dist = vec![vec![usize::MAX; cols]; rows];
    dist[start.row][start.col] = 0;
    let mut queue = VecDeque::from([(start.row as i64, start.col as i64)]);
    while let Some((r, c)) = queue.pop_front() {
        let d = dist[r as usize][c as usize];
        for (dr, dc) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
            let (nr, nc) = (r + dr, c + dc);
            if passable(nr, nc) && dist[nr as usize][nc as usize] == usize::MAX {
                dist[nr as usize][nc as usize] = d + 1;
                queue.push_back((nr, nc));
            }
        }
    }
    let d = dist[end.row][end.col];
    (d != usize::MAX).then_some(d)
}

fn visualize_grid(grid: &Grid, start: &Coordinate, end: &Coordinate) {
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let c = Coordinate::new(row, col);
            if *start == c {
                print!("S");
            } else if *end == c {
                print!("G");
            } else if !grid.is_passable(c) {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, N, &mut rng);
        let start = Coordinate::new(rng.gen_range(0..N), rng.gen_range(0..N));
        let end = Coordinate::new(rng.gen_range(0..N), rng.gen_range(0..N));
        let expected = reference_distance(&grid, start, end);
        let path = find_path(&grid, start, end);
        // Show the grid if the search disagrees with the reference
        if path.as_ref().map(|p| path_cost(p)) != expected {
            visualize_grid(&grid, &start, &end);
        }
        assert_eq!(path.as_ref().map(|p| path_cost(p)), expected);
        if let Some(path) = path {
            assert!(is_valid_path(&grid, &path));
            assert_eq!(path.first(), Some(&start));
            assert_eq!(path.last(), Some(&end));
        }
    }
}

#[test]
fn fuzz_without_components() {
    const N_GRIDS: usize = 500;
    let mut rng = StdRng::seed_from_u64(1);
    let solver = PathSearch {
        use_components: false,
        ..PathSearch::default()
    };
    for _ in 0..N_GRIDS {
        let (rows, cols) = (rng.gen_range(1..8), rng.gen_range(1..8));
        let grid = random_grid(rows, cols, &mut rng);
        let start = Coordinate::new(0, 0);
        let end = Coordinate::new(rows - 1, cols - 1);
        let path = solver.find_path(&grid, start, end);
        assert_eq!(
            path.as_ref().map(|p| path_cost(p)),
            reference_distance(&grid, start, end)
        );
        assert_eq!(path.is_some(), grid.connected(start, end));
    }
}

#[test]
fn repeated_calls_are_identical() {
    let mut rng = StdRng::seed_from_u64(2);
    let grid = random_grid(12, 12, &mut rng);
    let solver = PathSearch::new();
    for _ in 0..50 {
        let start = Coordinate::new(rng.gen_range(0..12), rng.gen_range(0..12));
        let end = Coordinate::new(rng.gen_range(0..12), rng.gen_range(0..12));
        let first = solver.find_path(&grid, start, end);
        assert_eq!(solver.find_path(&grid, start, end), first);
    }
}
