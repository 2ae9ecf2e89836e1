use super::frontier::Fifo;
use super::kernel::{SearchPolicy, UNREACHED, run};
use super::{SearchOutcome, Strategy};
use crate::geometry::Cell;
use crate::grid::Grid;


/// Breadth-first search
/// Every step costs 1 regardless of cell weights, so the path is shortest in edge count.
pub(crate) struct BreadthFirst;

impl SearchPolicy for BreadthFirst {
    const STRATEGY: Strategy = Strategy::Unweighted;

    type Key = ();
    type Frontier = Fifo;

    fn step_cost(_grid: &Grid, _cell: Cell) -> u64 {
        1
    }

    fn key(_g: u64, _cell: Cell, _goal: Cell) -> Self::Key {}

    // first visit wins, the FIFO order already reaches every cell at its lowest level first
    fn improves(_candidate: u64, best: u64) -> bool {
        best == UNREACHED
    }
}

/// Shortest path in number of steps using breadth-first search
/// https://en.wikipedia.org/wiki/Breadth-first_search
pub fn bfs(grid: &Grid, start: Cell, goal: Cell) -> SearchOutcome {
    run::<BreadthFirst>(grid, start, goal)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellState;

    fn cells(coords: &[(usize, usize)]) -> Vec<Cell> {
        coords.iter().map(|&c| Cell::from(c)).collect()
    }

    #[test]
    fn test_bfs_open_grid() {
        let grid = Grid::new(3, 3);
        let outcome = bfs(&grid, Cell::new(0, 0), Cell::new(2, 2));

        let path = outcome.path.unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path[0], Cell::new(0, 0));
        assert_eq!(path[4], Cell::new(2, 2));
        assert_eq!(outcome.cost, Some(4));
    }

    #[test]
    fn test_bfs_detours_around_wall() {
        let mut grid = Grid::new(3, 3);
        grid.set(1, 1, CellState::Wall);

        let outcome = bfs(&grid, Cell::new(0, 0), Cell::new(2, 2));

        // down is tried before right, so the left edge is taken
        assert_eq!(outcome.path, Some(cells(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)])));
        // the goal is the last of the eight walkable cells to leave the queue
        assert_eq!(outcome.explored, 8);
    }

    #[test]
    fn test_bfs_unreachable() {
        let mut grid = Grid::new(3, 3);
        for col in 0..3 {
            grid.set(1, col, CellState::Wall);
        }

        let outcome = bfs(&grid, Cell::new(0, 0), Cell::new(2, 2));
        assert_eq!(outcome.path, None);
        assert_eq!(outcome.cost, None);
        // only the top row can be reached
        assert_eq!(outcome.explored, 3);
    }

    #[test]
    fn test_bfs_ignores_weights() {
        let mut grid = Grid::new(3, 2);
        grid.set(0, 1, CellState::Weighted(10));

        let outcome = bfs(&grid, Cell::new(0, 0), Cell::new(0, 2));
        assert_eq!(outcome.path, Some(cells(&[(0, 0), (0, 1), (0, 2)])));
        assert_eq!(outcome.cost, Some(2));
    }

    #[test]
    fn test_bfs_invalid_endpoints() {
        let mut grid = Grid::new(3, 3);
        grid.set(0, 0, CellState::Wall);

        let from_wall = bfs(&grid, Cell::new(0, 0), Cell::new(2, 2));
        assert_eq!(from_wall, SearchOutcome::not_found(0));

        let to_wall = bfs(&grid, Cell::new(2, 2), Cell::new(0, 0));
        assert_eq!(to_wall, SearchOutcome::not_found(0));

        let out_of_range = bfs(&grid, Cell::new(1, 1), Cell::new(3, 0));
        assert_eq!(out_of_range, SearchOutcome::not_found(0));
    }

    #[test]
    fn test_bfs_start_is_goal() {
        let grid = Grid::new(4, 4);
        let outcome = bfs(&grid, Cell::new(2, 1), Cell::new(2, 1));
        assert_eq!(outcome.path, Some(vec![Cell::new(2, 1)]));
        assert_eq!(outcome.cost, Some(0));
        assert_eq!(outcome.explored, 1);
    }
}
