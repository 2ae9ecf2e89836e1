mod obstacles;
mod shared;

pub use obstacles::{ObstacleConfig, generate};
pub use shared::SharedGrid;

use std::{fmt, str::FromStr};

use crate::errors::GridError;
use crate::geometry::Cell;


/// State of a single grid cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    Wall, // impassable
    #[default]
    Open, // traversal cost 1
    Weighted(u32), // traversal cost > 1
}

impl CellState {

    /// Checked constructor for weighted cells
    pub fn weighted(cost: u32) -> Result<Self, GridError> {
        if cost > 1 {
            Ok(CellState::Weighted(cost))
        } else {
            Err(GridError::InvalidWeight(cost))
        }
    }

    pub fn is_walkable(&self) -> bool {
        !matches!(self, CellState::Wall)
    }

    /// Cost of stepping onto a cell in this state, 0 for walls
    pub fn cost(&self) -> u32 {
        match self {
            CellState::Wall => 0,
            CellState::Open => 1,
            CellState::Weighted(cost) => *cost,
        }
    }

    /// Weights of 0 or 1 are just open cells
    fn normalized(self) -> Self {
        match self {
            CellState::Weighted(cost) if cost <= 1 => CellState::Open,
            state => state,
        }
    }

    fn symbol(&self) -> char {
        match self {
            CellState::Wall => '#',
            CellState::Open => '.',
            CellState::Weighted(cost) => char::from_digit((*cost).min(9), 10).unwrap_or('9'),
        }
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '#' => Some(CellState::Wall),
            '.' => Some(CellState::Open),
            '1'..='9' => symbol.to_digit(10).map(|d| CellState::Weighted(d).normalized()),
            _ => None,
        }
    }
}


/// Dense 2D grid of cell states, stored row-major
/// Width is the number of columns, height the number of rows.
/// Dimensions are fixed for the lifetime of the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl Grid {

    /// Create a grid where every cell is open
    ///
    /// # Panics
    /// If `width * height` overflows `usize`. Use [`Grid::try_new`] for sizes that
    /// come from outside the program.
    pub fn new(width: usize, height: usize) -> Self {
        match Self::try_new(width, height) {
            Ok(grid) => grid,
            Err(err) => panic!("{err}"),
        }
    }

    /// Create an open grid, failing when the cell count does not fit in `usize`
    pub fn try_new(width: usize, height: usize) -> Result<Self, GridError> {
        let len = width
            .checked_mul(height)
            .ok_or(GridError::TooLarge { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![CellState::Open; len],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    /// Row-major index of a cell, None if out of range
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        self.contains(cell).then(|| cell.row * self.width + cell.col)
    }

    /// Inverse of `index_of`
    /// index must be below `len()`
    pub fn cell_at(&self, index: usize) -> Cell {
        Cell::new(index / self.width, index % self.width)
    }

    /// Set a cell's state
    /// Out of range coordinates are ignored
    pub fn set(&mut self, row: usize, col: usize, state: CellState) {
        if let Some(index) = self.index_of(Cell::new(row, col)) {
            self.cells[index] = state.normalized();
        }
    }

    /// Returns None for out of range coordinates
    pub fn get(&self, row: usize, col: usize) -> Option<CellState> {
        self.index_of(Cell::new(row, col)).map(|index| self.cells[index])
    }

    /// False for walls and out of range coordinates
    pub fn is_walkable(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(|state| state.is_walkable())
    }

    /// Walkable 4-connected neighbors in the order up, down, left, right
    pub fn neighbors(&self, row: usize, col: usize) -> Vec<Cell> {
        self.neighbor_cells(Cell::new(row, col)).collect()
    }

    /// Iterator form of `neighbors`, used by the searches to avoid allocating
    pub fn neighbor_cells(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        let Cell { row, col } = cell;
        [
            row.checked_sub(1).map(|r| Cell::new(r, col)), // up
            row.checked_add(1).map(|r| Cell::new(r, col)), // down
            col.checked_sub(1).map(|c| Cell::new(row, c)), // left
            col.checked_add(1).map(|c| Cell::new(row, c)), // right
        ]
        .into_iter()
        .flatten()
        .filter(|n| self.is_walkable(n.row, n.col))
    }

    /// Cost of stepping onto a cell
    /// 1 for open cells, the weight for weighted cells, 0 for walls and out of range
    pub fn cost(&self, row: usize, col: usize) -> u32 {
        self.get(row, col).map_or(0, |state| state.cost())
    }

    /// Set every cell to the same state
    pub fn fill(&mut self, state: CellState) {
        let state = state.normalized();
        self.cells.iter_mut().for_each(|c| *c = state);
    }

    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_walkable()).count()
    }

    /// Iterate over every cell with its state, row by row
    pub fn iter(&self) -> impl Iterator<Item = (Cell, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, state)| (self.cell_at(index), *state))
    }

    /// Total cost of walking a path: the sum of the costs of every cell after the first.
    /// Returns None if the path is empty, leaves the walkable area,
    /// or contains a move that is not between 4-adjacent cells.
    pub fn path_cost(&self, path: &[Cell]) -> Option<u64> {
        let first = path.first()?;
        if !self.is_walkable(first.row, first.col) {
            return None;
        }

        let mut total: u64 = 0;
        for step in path.windows(2) {
            let (from, to) = (step[0], step[1]);
            if !from.is_adjacent(&to) || !self.is_walkable(to.row, to.col) {
                return None;
            }
            total += u64::from(self.cost(to.row, to.col));
        }
        Some(total)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // rows without cells print nothing, like the 0x0 grid they parse back to
        if self.width == 0 {
            return Ok(());
        }
        for row in 0..self.height {
            if row > 0 {
                writeln!(f)?;
            }
            let line = &self.cells[row * self.width..(row + 1) * self.width];
            for (col, state) in line.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", state.symbol())?;
            }
        }
        Ok(())
    }
}

/// Parses the `Display` form: `#` wall, `.` open, `2`-`9` weights.
/// Whitespace between symbols is optional and blank lines are skipped.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<Vec<CellState>> = Vec::new();

        for (line_idx, line) in s.lines().enumerate() {
            let mut row = Vec::new();
            for (col_idx, symbol) in line.chars().enumerate() {
                if symbol.is_whitespace() {
                    continue;
                }
                let state = CellState::from_symbol(symbol).ok_or(GridError::UnknownSymbol {
                    line: line_idx + 1,
                    column: col_idx + 1,
                    symbol,
                })?;
                row.push(state);
            }

            if row.is_empty() {
                continue;
            }
            if let Some(first) = rows.first() {
                if first.len() != row.len() {
                    return Err(GridError::RaggedRow {
                        line: line_idx + 1,
                        expected: first.len(),
                        found: row.len(),
                    });
                }
            }
            rows.push(row);
        }

        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        Ok(Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }
}
