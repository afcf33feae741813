//! Grid coordinate representation.

use std::fmt::{self, Display};

/// A single grid position as a 0-based `(row, col)` pair.
///
/// Cells are plain coordinates; they carry no knowledge of the grid they
/// belong to. Use [`GridSize::index_of`](crate::GridSize::index_of) to
/// flatten a cell into a row-major slot index.
///
/// # Examples
///
/// ```
/// use tessella_core::Cell;
///
/// let cell = Cell::new(2, 1);
/// assert_eq!(cell.row(), 2);
/// assert_eq!(cell.col(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    row: usize,
    col: usize,
}

impl Cell {
    /// Creates a cell from 0-based row and column indices.
    #[must_use]
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the 0-based row index.
    #[must_use]
    #[inline]
    pub fn row(self) -> usize {
        self.row
    }

    /// Returns the 0-based column index.
    #[must_use]
    #[inline]
    pub fn col(self) -> usize {
        self.col
    }

    /// Returns `true` if `other` shares this cell's row or column.
    ///
    /// Used by the shuffle raffle to avoid handing a piece a destination in
    /// its own row or column.
    #[must_use]
    #[inline]
    pub fn shares_line(self, other: Self) -> bool {
        self.row == other.row || self.col == other.col
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
