use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Weighted cells must cost more than an open cell
    #[error("invalid cell weight {0}, weights must be greater than 1")]
    InvalidWeight(u32),

    /// Densities are percentages
    #[error("invalid density {0}%, expected a value between 0 and 100")]
    InvalidDensity(u8),

    #[error("grid of {width}x{height} cells does not fit in memory")]
    TooLarge { width: usize, height: usize },

    #[error("unknown grid symbol {symbol:?} at line {line}, column {column}")]
    UnknownSymbol {
        line: usize,
        column: usize,
        symbol: char,
    },

    #[error("row at line {line} has {found} cells, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
}
