//! # grid_bfs
//!
//! Shortest obstacle-free paths on a binary occupancy grid. Paths are found with
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search) over the
//! 4-connected neighbourhood (no diagonals, no wraparound), so every returned path has the
//! minimal number of steps. Note that this assumes a uniform-cost grid. Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists.
//!
//! ```
//! use grid_bfs::{find_path, Coordinate, Grid};
//!
//! let grid = Grid::new(3, 3, &[Coordinate::new(1, 1)]).unwrap();
//! let path = find_path(&grid, Coordinate::new(0, 0), Coordinate::new(2, 2)).unwrap();
//! assert_eq!(path.len(), 5);
//! ```
pub mod bfs;
pub mod coordinate;
pub mod error;
pub mod grid;
pub mod search;

pub use coordinate::Coordinate;
pub use error::{GridError, Result};
pub use grid::Grid;
pub use search::{distance_map, find_path, is_valid_path, path_cost, PathSearch};
