pub mod frontier;
mod kernel;
mod shortest_path;
pub mod bfs;
pub mod dijkstra;
pub mod a_star;

pub use a_star::a_star;
pub use bfs::bfs;
pub use dijkstra::dijkstra;
pub use frontier::MinQueue;

use std::fmt;

use crate::geometry::Cell;
use crate::grid::Grid;


/// Search strategy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    Unweighted, // breadth-first search, every step costs 1
    CostAware, // Dijkstra, steps cost the weight of the cell entered
    Heuristic, // A* with a Manhattan distance heuristic, same costs as Dijkstra
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Unweighted, Strategy::CostAware, Strategy::Heuristic];
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Unweighted => "BFS",
            Strategy::CostAware => "Dijkstra",
            Strategy::Heuristic => "A*",
        };
        f.write_str(name)
    }
}


/// Result of a single search
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    pub path: Option<Vec<Cell>>, // start to goal inclusive
    pub cost: Option<u64>, // cost of the path under the strategy's cost model
    pub explored: usize, // cells finalized during the search
}

impl SearchOutcome {

    pub(crate) fn not_found(explored: usize) -> Self {
        Self { path: None, cost: None, explored }
    }

    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }
}


/// Run a search with the given strategy
pub fn search(grid: &Grid, strategy: Strategy, start: Cell, goal: Cell) -> SearchOutcome {
    match strategy {
        Strategy::Unweighted => bfs(grid, start, goal),
        Strategy::CostAware => dijkstra(grid, start, goal),
        Strategy::Heuristic => a_star(grid, start, goal),
    }
}


/// A search strategy bound to a grid
/// The grid stays borrowed for as long as the path finder lives, so it cannot change
/// underneath a search. Only the figures of the most recent call are kept.
#[derive(Debug)]
pub struct PathFinder<'g> {
    grid: &'g Grid,
    strategy: Strategy,
    explored: usize,
    last_cost: Option<u64>,
}

impl<'g> PathFinder<'g> {

    pub fn new(grid: &'g Grid, strategy: Strategy) -> Self {
        Self {
            grid,
            strategy,
            explored: 0,
            last_cost: None,
        }
    }

    pub fn bfs(grid: &'g Grid) -> Self {
        Self::new(grid, Strategy::Unweighted)
    }

    pub fn dijkstra(grid: &'g Grid) -> Self {
        Self::new(grid, Strategy::CostAware)
    }

    pub fn a_star(grid: &'g Grid) -> Self {
        Self::new(grid, Strategy::Heuristic)
    }

    /// Find a shortest path from start to goal, None if there is none
    /// Start or goal on a wall or out of range count as unreachable.
    pub fn find_path(&mut self, start: Cell, goal: Cell) -> Option<Vec<Cell>> {
        let SearchOutcome { path, cost, explored } = search(self.grid, self.strategy, start, goal);
        self.explored = explored;
        self.last_cost = cost;
        path
    }

    /// Cells explored by the last `find_path` call
    pub fn explored_nodes(&self) -> usize {
        self.explored
    }

    /// Cost of the path found by the last `find_path` call
    pub fn last_cost(&self) -> Option<u64> {
        self.last_cost
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn grid(&self) -> &'g Grid {
        self.grid
    }
}
