use log::{debug, trace};

use super::frontier::Frontier;
use super::shortest_path::{NO_PARENT, shortest_path};
use super::{SearchOutcome, Strategy};
use crate::geometry::Cell;
use crate::grid::Grid;

/// Best known distance of a cell nobody has reached yet
pub(crate) const UNREACHED: u64 = u64::MAX;


/// What distinguishes one search strategy from another:
/// how the frontier is ordered and how a step onto a cell is charged.
pub(crate) trait SearchPolicy {
    const STRATEGY: Strategy;

    type Key: Ord + Copy;
    type Frontier: Frontier<Self::Key>;

    /// Cost of stepping onto a walkable cell
    fn step_cost(grid: &Grid, cell: Cell) -> u64;

    /// Frontier key for a cell reached with accumulated cost `g`
    fn key(g: u64, cell: Cell, goal: Cell) -> Self::Key;

    /// Whether a candidate distance replaces the neighbor's best known one
    fn improves(candidate: u64, best: u64) -> bool {
        candidate < best
    }
}


/// Shared search loop
/// Cells move from unseen to frontier to finalized. A cell is finalized the first time it
/// leaves the frontier; entries popped for an already finalized cell are stale and skipped.
pub(crate) fn run<P: SearchPolicy>(grid: &Grid, start: Cell, goal: Cell) -> SearchOutcome {

    let (Some(start_index), Some(goal_index)) = (walkable_index(grid, start), walkable_index(grid, goal)) else {
        trace!("{}: endpoint {} -> {} is out of range or a wall", P::STRATEGY, start, goal);
        return SearchOutcome::not_found(0);
    };

    // per-call tables, indexed by row-major cell index
    let mut best = vec![UNREACHED; grid.len()];
    let mut parents = vec![NO_PARENT; grid.len()];
    let mut finalized = vec![false; grid.len()];
    let mut frontier = P::Frontier::default();
    let mut explored = 0;

    best[start_index] = 0;
    frontier.push(P::key(0, start, goal), start_index);

    while let Some(index) = frontier.pop() {

        if finalized[index] {
            continue;
        }
        finalized[index] = true;
        explored += 1;

        if index == goal_index {
            let path = shortest_path(grid, &parents, start_index, goal_index);
            let outcome = SearchOutcome {
                cost: path.as_ref().map(|_| best[goal_index]),
                path,
                explored,
            };
            debug!(
                "{}: {} -> {} found path of {} cells (cost {:?}), explored {}",
                P::STRATEGY, start, goal,
                outcome.path.as_ref().map_or(0, Vec::len),
                outcome.cost, explored
            );
            return outcome;
        }

        let g = best[index];
        let cell = grid.cell_at(index);

        for neighbor in grid.neighbor_cells(cell) {
            let Some(neighbor_index) = grid.index_of(neighbor) else {
                continue;
            };
            if finalized[neighbor_index] {
                continue;
            }

            let candidate = g.saturating_add(P::step_cost(grid, neighbor));
            if P::improves(candidate, best[neighbor_index]) {
                best[neighbor_index] = candidate;
                parents[neighbor_index] = index;
                // A* can improve a cell already in the frontier, its old entry goes stale
                frontier.push(P::key(candidate, neighbor, goal), neighbor_index);
            }
        }
    }

    debug!("{}: {} -> {} unreachable, explored {}", P::STRATEGY, start, goal, explored);
    SearchOutcome::not_found(explored)
}

fn walkable_index(grid: &Grid, cell: Cell) -> Option<usize> {
    grid.index_of(cell)
        .filter(|_| grid.is_walkable(cell.row, cell.col))
}
