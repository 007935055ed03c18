use grid_bfs::{find_path, Coordinate, Grid};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    let grid = Grid::new(3, 3, &[Coordinate::new(1, 1)]).unwrap();
    println!("{}", grid);
    let start = Coordinate::new(0, 0);
    let end = Coordinate::new(2, 2);
    let path = find_path(&grid, start, end).unwrap();
    println!("Path:");
    for c in path {
        println!("{}", c);
    }
}
