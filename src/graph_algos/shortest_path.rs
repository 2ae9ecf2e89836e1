use crate::geometry::Cell;
use crate::grid::Grid;

/// Marks a cell with no predecessor in the parents table
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Construct the shortest path from the goal cell back to the start cell
/// Returns the ordered path as a vector of cells from start to goal
/// parents: predecessor index of every cell, NO_PARENT where none was recorded
/// Returns None if the chain from the goal stops before reaching the start
pub(crate) fn shortest_path(grid: &Grid, parents: &[usize], start_index: usize, goal_index: usize) -> Option<Vec<Cell>> {

    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start
    loop {
        path.push(grid.cell_at(current_index));
        if current_index == start_index {
            break;
        }

        // Every cell except the start must have been reached from somewhere,
        // and a chain can never be longer than the grid
        current_index = *parents.get(current_index)?;
        if current_index == NO_PARENT || path.len() > parents.len() {
            return None;
        }
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    Some(path)
}
