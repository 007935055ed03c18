use grid_bfs::{find_path, Coordinate, Grid};

// Reads a map in the '.'/'#' text format from the first argument, or uses a built-in maze,
// and paths from the top-left to the bottom-right corner.

const MAZE: &str = "\
S.#.......
.##.####.#
....#....#
.####.##.#
......#..G
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let text = match std::env::args().nth(1) {
        Some(file) => std::fs::read_to_string(file)?,
        None => MAZE.to_owned(),
    };
    let grid: Grid = text.parse()?;
    let (rows, cols) = grid.dimensions();
    let start = Coordinate::new(0, 0);
    let end = Coordinate::new(rows - 1, cols - 1);
    match find_path(&grid, start, end) {
        Some(path) => {
            let mut rendered = grid
                .to_string()
                .lines()
                .map(|line| line.chars().collect::<Vec<_>>())
                .collect::<Vec<_>>();
            for c in &path {
                rendered[c.row][c.col] = '*';
            }
            for line in rendered {
                println!("{}", line.into_iter().collect::<String>());
            }
            println!("{} steps", path.len() - 1);
        }
        None => println!("No path from {} to {}", start, end),
    }
    Ok(())
}
