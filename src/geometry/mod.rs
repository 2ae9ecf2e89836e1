use std::fmt;
use num_traits::Num;


/// Manhattan distance
/// Works for unsigned coordinates as well, the difference is never negative
pub fn manhattan_distance<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Num + Copy + PartialOrd,
    {
    abs_diff(x1, x2) + abs_diff(y1, y2)
}

fn abs_diff<T>(a: T, b: T) -> T
where
    T: Num + Copy + PartialOrd,
    {
    if a > b { a - b } else { b - a }
}


/// Grid cell coordinate
/// Rows grow downwards, columns grow to the right
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {

    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Number of 4-connected steps between two cells, ignoring obstacles
    pub fn manhattan(&self, other: &Cell) -> usize {
        manhattan_distance(self.row, self.col, other.row, other.col)
    }

    /// True if the cells share an edge
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<Cell> for (usize, usize) {
    fn from(cell: Cell) -> Self {
        (cell.row, cell.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance_signed_and_unsigned() {
        assert_eq!(manhattan_distance(0i32, 0, -3, 4), 7);
        assert_eq!(manhattan_distance(5usize, 1, 2, 3), 5);
        assert_eq!(manhattan_distance(2u64, 2, 2, 2), 0);
    }

    #[test]
    fn test_cell_manhattan_is_symmetric() {
        let a = Cell::new(0, 4);
        let b = Cell::new(3, 1);
        assert_eq!(a.manhattan(&b), 6);
        assert_eq!(b.manhattan(&a), 6);
    }

    #[test]
    fn test_cell_adjacency() {
        let c = Cell::new(1, 1);
        assert!(c.is_adjacent(&Cell::new(0, 1)));
        assert!(c.is_adjacent(&Cell::new(1, 2)));
        assert!(!c.is_adjacent(&Cell::new(2, 2))); // diagonal
        assert!(!c.is_adjacent(&c));
    }

    #[test]
    fn test_cell_tuple_conversions() {
        let cell: Cell = (2, 7).into();
        assert_eq!(cell, Cell::new(2, 7));
        let tuple: (usize, usize) = cell.into();
        assert_eq!(tuple, (2, 7));
        assert_eq!(cell.to_string(), "(2, 7)");
    }
}
