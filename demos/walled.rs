use grid_bfs::{Coordinate, Grid, PathSearch};

// A wall splits the grid in two, so the goal on the right cannot be reached, while its
// approximate variant still walks up to the wall.
// |S.#..|
// |..#.G|
// |..#..|

fn main() {
    let wall = (0..3).map(|row| Coordinate::new(row, 2)).collect::<Vec<_>>();
    let grid = Grid::new(3, 5, &wall).unwrap();
    println!("{}", grid);
    let solver = PathSearch::new();
    let start = Coordinate::new(0, 0);
    let goal = Coordinate::new(1, 4);
    match solver.find_path(&grid, start, goal) {
        Some(path) => println!("Found a path of {} cells", path.len()),
        None => println!("{} is not reachable from {}", goal, start),
    }
    if let Some(path) = solver.find_path_approximate(&grid, start, Coordinate::new(1, 2)) {
        println!("Closest approach to the wall:");
        for c in path {
            println!("{}", c);
        }
    }
}
