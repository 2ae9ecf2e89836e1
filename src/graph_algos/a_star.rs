use super::dijkstra::Dijkstra;
use super::frontier::MinQueue;
use super::kernel::{SearchPolicy, run};
use super::{SearchOutcome, Strategy};
use crate::geometry::Cell;
use crate::grid::Grid;


/// A* Algorithm with a Manhattan distance heuristic
/// https://en.wikipedia.org/wiki/A*_search_algorithm
/// Every step costs at least 1 and moves at most one unit of Manhattan distance,
/// so the heuristic never overestimates and is consistent.
pub(crate) struct AStar;

impl SearchPolicy for AStar {
    const STRATEGY: Strategy = Strategy::Heuristic;

    // (f, h): on equal f the entry closer to the goal goes first
    type Key = (u64, u64);
    type Frontier = MinQueue<(u64, u64), usize>;

    fn step_cost(grid: &Grid, cell: Cell) -> u64 {
        Dijkstra::step_cost(grid, cell)
    }

    fn key(g: u64, cell: Cell, goal: Cell) -> (u64, u64) {
        let h = cell.manhattan(&goal) as u64;
        (g.saturating_add(h), h)
    }
}

/// Cheapest path using A*
/// Finds paths of the same cost as `dijkstra`, usually exploring far fewer cells
pub fn a_star(grid: &Grid, start: Cell, goal: Cell) -> SearchOutcome {
    run::<AStar>(grid, start, goal)
}
