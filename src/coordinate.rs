use core::fmt;
use grid_util::point::Point;
use smallvec::SmallVec;

use crate::error::GridError;

/// A cell on the grid, identified by row and column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Coordinate {
        Coordinate { row, col }
    }

    /// The 4-connected neighbourhood in the order up, left, right, down. Neighbours that would
    /// leave the range of [usize] are skipped, so there is never any wraparound. Grid bounds are
    /// not checked here.
    pub fn neighbours(&self) -> SmallVec<[Coordinate; 4]> {
        let mut neighbours = SmallVec::new();
        if let Some(row) = self.row.checked_sub(1) {
            neighbours.push(Coordinate::new(row, self.col));
        }
        if let Some(col) = self.col.checked_sub(1) {
            neighbours.push(Coordinate::new(self.row, col));
        }
        if let Some(col) = self.col.checked_add(1) {
            neighbours.push(Coordinate::new(self.row, col));
        }
        if let Some(row) = self.row.checked_add(1) {
            neighbours.push(Coordinate::new(row, self.col));
        }
        neighbours
    }

    pub fn manhattan_distance(&self, other: &Coordinate) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Whether `other` is immediately above, below, left or right of this cell.
    pub fn is_adjacent(&self, other: &Coordinate) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Coordinate::new(row, col)
    }
}

/// Columns map to `x` and rows to `y`. Fails if either component exceeds [i32::MAX].
impl TryFrom<Coordinate> for Point {
    type Error = GridError;

    fn try_from(coordinate: Coordinate) -> Result<Self, Self::Error> {
        let overflow = |_| GridError::PointOverflow { coordinate };
        let x = i32::try_from(coordinate.col).map_err(overflow)?;
        let y = i32::try_from(coordinate.row).map_err(overflow)?;
        Ok(Point::new(x, y))
    }
}

impl TryFrom<Point> for Coordinate {
    type Error = GridError;

    fn try_from(point: Point) -> Result<Self, Self::Error> {
        if point.x < 0 || point.y < 0 {
            return Err(GridError::NegativePoint {
                x: point.x,
                y: point.y,
            });
        }
        Ok(Coordinate::new(point.y as usize, point.x as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_two_neighbours() {
        let neighbours = Coordinate::new(0, 0).neighbours();
        assert_eq!(
            neighbours.as_slice(),
            &[Coordinate::new(0, 1), Coordinate::new(1, 0)]
        );
    }

    #[test]
    fn interior_neighbour_order() {
        let neighbours = Coordinate::new(2, 2).neighbours();
        assert_eq!(
            neighbours.as_slice(),
            &[
                Coordinate::new(1, 2),
                Coordinate::new(2, 1),
                Coordinate::new(2, 3),
                Coordinate::new(3, 2),
            ]
        );
        assert!(neighbours.iter().all(|n| n.is_adjacent(&Coordinate::new(2, 2))));
    }

    #[test]
    fn no_wraparound_at_usize_max() {
        let edge = Coordinate::new(usize::MAX, usize::MAX);
        assert_eq!(edge.neighbours().len(), 2);
    }

    #[test]
    fn diagonal_is_not_adjacent() {
        let c = Coordinate::new(1, 1);
        assert!(!c.is_adjacent(&Coordinate::new(2, 2)));
        assert!(!c.is_adjacent(&c));
        assert_eq!(c.manhattan_distance(&Coordinate::new(3, 0)), 3);
    }

    #[test]
    fn point_conversion() {
        let c = Coordinate::new(4, 7);
        let p = Point::try_from(c).unwrap();
        assert_eq!(p, Point::new(7, 4));
        assert_eq!(Coordinate::try_from(p), Ok(c));
        assert_eq!(
            Coordinate::try_from(Point::new(-1, 3)),
            Err(GridError::NegativePoint { x: -1, y: 3 })
        );
    }

    #[test]
    fn point_conversion_rejects_large_components() {
        let wide = Coordinate::new(0, i32::MAX as usize + 1);
        assert_eq!(
            Point::try_from(wide),
            Err(GridError::PointOverflow { coordinate: wide })
        );
        let tall = Coordinate::new(i32::MAX as usize + 4, 0);
        assert!(Point::try_from(tall).is_err());
        let edge = Coordinate::new(i32::MAX as usize, i32::MAX as usize);
        assert_eq!(Point::try_from(edge), Ok(Point::new(i32::MAX, i32::MAX)));
    }

    #[test]
    fn display() {
        assert_eq!(Coordinate::new(1, 4).to_string(), "(1, 4)");
    }
}
