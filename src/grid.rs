use core::fmt;
use std::str::FromStr;

use grid_util::grid::{BoolGrid, ValueGrid};
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::coordinate::Coordinate;
use crate::error::{GridError, Result};

/// [Grid] is an immutable occupancy surface. Cells live in a [BoolGrid] whose values determine
/// whether a cell is blocked ([true]) or passable ([false]), with columns along `x` and rows
/// along `y`. Connected components of passable cells are computed once at construction using a
/// [UnionFind] structure so that unreachable goals can be rejected without flood-filling.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: BoolGrid,
    components: UnionFind<usize>,
}

impl Grid {
    /// Builds a `rows` by `cols` grid with every cell passable, then blocks each coordinate in
    /// `blocked`. Fails on a zero dimension, on dimensions the cell storage cannot address, or on
    /// the first blocked coordinate outside the grid.
    pub fn new(rows: usize, cols: usize, blocked: &[Coordinate]) -> Result<Grid> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyDimensions { rows, cols });
        }
        let max_side = i32::MAX as usize;
        if rows > max_side || cols > max_side || rows.checked_mul(cols).is_none() {
            return Err(GridError::TooLarge { rows, cols });
        }
        if let Some(coordinate) = blocked.iter().find(|c| c.row >= rows || c.col >= cols) {
            return Err(GridError::OutOfRange {
                coordinate: *coordinate,
                rows,
                cols,
            });
        }
        let mut cells = BoolGrid::new(cols, rows, false);
        for coordinate in blocked {
            cells.set(coordinate.col as i32, coordinate.row as i32, true);
        }
        let mut grid = Grid {
            cells,
            components: UnionFind::new(rows * cols),
        };
        grid.generate_components();
        Ok(grid)
    }

    /// A grid without any blocked cells.
    pub fn open(rows: usize, cols: usize) -> Result<Grid> {
        Grid::new(rows, cols, &[])
    }

    /// Links every passable cell to its passable right and lower neighbour. Together these cover
    /// all 4-connected edges.
    fn generate_components(&mut self) {
        let w = self.cells.width() as i32;
        let h = self.cells.height() as i32;
        info!("Generating connected components for {}x{} grid", h, w);
        for y in 0..h {
            for x in 0..w {
                if self.cells.get(x, y) {
                    continue;
                }
                let ix = self.cells.compute_ix(x, y);
                if x + 1 < w && !self.cells.get(x + 1, y) {
                    self.components.union(ix, self.cells.compute_ix(x + 1, y));
                }
                if y + 1 < h && !self.cells.get(x, y + 1) {
                    self.components.union(ix, self.cells.compute_ix(x, y + 1));
                }
            }
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }
    pub fn rows(&self) -> usize {
        self.cells.height()
    }
    pub fn cols(&self) -> usize {
        self.cells.width()
    }

    pub fn in_bounds(&self, coordinate: Coordinate) -> bool {
        coordinate.row < self.rows() && coordinate.col < self.cols()
    }

    /// Maps an in-bounds coordinate onto the `(x, y)` pair of the cell storage. Dimensions are
    /// capped at [i32::MAX] on construction, so the casts are lossless.
    fn xy(&self, coordinate: Coordinate) -> Option<(i32, i32)> {
        self.in_bounds(coordinate)
            .then(|| (coordinate.col as i32, coordinate.row as i32))
    }

    /// Flat index of `coordinate` in the cell storage, or [None] if it lies outside the grid.
    /// Every in-bounds cell has a distinct index below `rows * cols`.
    pub fn index(&self, coordinate: Coordinate) -> Option<usize> {
        self.xy(coordinate).map(|(x, y)| self.cells.compute_ix(x, y))
    }

    /// Whether `coordinate` is blocked. Querying outside the grid is an error.
    pub fn is_blocked(&self, coordinate: Coordinate) -> Result<bool> {
        self.xy(coordinate)
            .map(|(x, y)| self.cells.get(x, y))
            .ok_or(GridError::OutOfRange {
                coordinate,
                rows: self.rows(),
                cols: self.cols(),
            })
    }

    /// Total counterpart of [is_blocked](Self::is_blocked): cells outside the grid are simply
    /// not passable.
    pub fn is_passable(&self, coordinate: Coordinate) -> bool {
        self.xy(coordinate)
            .is_some_and(|(x, y)| !self.cells.get(x, y))
    }

    /// The passable 4-connected neighbours of `coordinate`.
    pub fn passable_neighbours(&self, coordinate: Coordinate) -> SmallVec<[Coordinate; 4]> {
        let mut neighbours = coordinate.neighbours();
        neighbours.retain(|n| self.is_passable(*n));
        neighbours
    }

    pub fn blocked_count(&self) -> usize {
        let w = self.cells.width() as i32;
        let h = self.cells.height() as i32;
        (0..h)
            .flat_map(|y| (0..w).map(move |x| (x, y)))
            .filter(|&(x, y)| self.cells.get(x, y))
            .count()
    }

    /// Retrieves the component id of a passable cell.
    pub fn component(&self, coordinate: Coordinate) -> Option<usize> {
        if !self.is_passable(coordinate) {
            return None;
        }
        self.index(coordinate).map(|ix| self.components.find(ix))
    }

    /// Checks if both cells are passable and on the same component.
    pub fn connected(&self, a: Coordinate, b: Coordinate) -> bool {
        match (self.component(a), self.component(b)) {
            (Some(ca), Some(cb)) => ca == cb,
            _ => false,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.cells.height() as i32 {
            let line = (0..self.cells.width() as i32)
                .map(|x| if self.cells.get(x, y) { '#' } else { '.' })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Parses a text map with one line per row. `.`, `S` and `G` are passable, `#`, `@` and `T`
/// are blocked. Blank lines are skipped.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Grid> {
        let mut cols = 0;
        let mut rows = 0;
        let mut blocked = Vec::new();
        for (line_ix, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let width = line.chars().count();
            if rows == 0 {
                cols = width;
            } else if width != cols {
                return Err(GridError::MalformedMap {
                    line: line_ix + 1,
                    reason: format!("expected {} cells, found {}", cols, width),
                });
            }
            for (col, c) in line.chars().enumerate() {
                let is_blocked = match c {
                    '.' | 'S' | 'G' => false,
                    '#' | '@' | 'T' => true,
                    other => {
                        return Err(GridError::MalformedMap {
                            line: line_ix + 1,
                            reason: format!("unknown cell '{}'", other),
                        })
                    }
                };
                if is_blocked {
                    blocked.push(Coordinate::new(rows, col));
                }
            }
            rows += 1;
        }
        if rows == 0 {
            return Err(GridError::EmptyDimensions { rows, cols });
        }
        Grid::new(rows, cols, &blocked)
    }
}
