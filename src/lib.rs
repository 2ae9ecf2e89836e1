//! Shortest paths on 2D grids with walls and weighted cells.
//!
//! Three interchangeable strategies run over the same [`Grid`]:
//! breadth-first search, Dijkstra's algorithm and A* with a Manhattan
//! heuristic. Each reports the path it found and how many cells it explored.
//!
//! ```
//! use gridpath::{Cell, CellState, Grid, PathFinder};
//!
//! let mut grid = Grid::new(3, 3);
//! grid.set(1, 1, CellState::Wall);
//!
//! let mut finder = PathFinder::bfs(&grid);
//! let path = finder.find_path(Cell::new(0, 0), Cell::new(2, 2)).unwrap();
//! assert_eq!(path.len(), 5);
//! ```

pub mod errors;
pub mod geometry;
pub mod grid;
pub mod graph_algos;

pub use errors::GridError;
pub use geometry::{Cell, manhattan_distance};
pub use grid::{CellState, Grid, ObstacleConfig, SharedGrid};
pub use graph_algos::{PathFinder, SearchOutcome, Strategy, a_star, bfs, dijkstra, search};
