use super::frontier::MinQueue;
use super::kernel::{SearchPolicy, run};
use super::{SearchOutcome, Strategy};
use crate::geometry::Cell;
use crate::grid::Grid;


/// Dijkstra's algorithm
/// The frontier is ordered by the accumulated cost from the start.
pub(crate) struct Dijkstra;

impl SearchPolicy for Dijkstra {
    const STRATEGY: Strategy = Strategy::CostAware;

    type Key = u64;
    type Frontier = MinQueue<u64, usize>;

    fn step_cost(grid: &Grid, cell: Cell) -> u64 {
        u64::from(grid.cost(cell.row, cell.col))
    }

    fn key(g: u64, _cell: Cell, _goal: Cell) -> u64 {
        g
    }
}

/// Identify the cheapest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// The cost of a path is the sum of the costs of every cell entered after the start.
pub fn dijkstra(grid: &Grid, start: Cell, goal: Cell) -> SearchOutcome {
    run::<Dijkstra>(grid, start, goal)
}
