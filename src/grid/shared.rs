use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use super::{CellState, Grid};
use crate::geometry::Cell;
use crate::graph_algos::{SearchOutcome, Strategy, search};


/// Grid shared between threads
/// Searches hold the read lock from start to finish, so a writer waits for
/// in-flight searches and no search ever sees a half-applied edit.
#[derive(Clone, Debug)]
pub struct SharedGrid {
    inner: Arc<RwLock<Grid>>,
}

impl SharedGrid {

    pub fn new(grid: Grid) -> Self {
        Self {
            inner: Arc::new(RwLock::new(grid)),
        }
    }

    /// Set a cell's state, waiting for running searches to finish
    pub fn set(&self, row: usize, col: usize, state: CellState) {
        self.inner.write().set(row, col, state);
    }

    pub fn get(&self, row: usize, col: usize) -> Option<CellState> {
        self.inner.read().get(row, col)
    }

    pub fn find_path(&self, strategy: Strategy, start: Cell, goal: Cell) -> SearchOutcome {
        let grid = self.inner.read();
        search(&grid, strategy, start, goal)
    }

    /// Owned copy of the current grid
    pub fn snapshot(&self) -> Grid {
        self.inner.read().clone()
    }

    /// Read access for several queries against the same state
    pub fn read(&self) -> RwLockReadGuard<'_, Grid> {
        self.inner.read()
    }
}

impl From<Grid> for SharedGrid {
    fn from(grid: Grid) -> Self {
        Self::new(grid)
    }
}
