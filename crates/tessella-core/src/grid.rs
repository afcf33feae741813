//! Grid shape and row-major indexing.

use std::iter::FusedIterator;

use crate::Cell;

/// Error returned when a grid shape is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// Rows and columns must both be at least 1.
    #[display("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
}

/// A validated puzzle grid shape.
///
/// Slots are numbered in row-major order: the slot index of `(row, col)` is
/// `cols * row + col`. Both dimensions are guaranteed to be at least 1, so
/// [`len`](Self::len) is always positive.
///
/// # Examples
///
/// ```
/// use tessella_core::{Cell, GridSize};
///
/// let grid = GridSize::try_new(2, 4)?;
/// assert_eq!(grid.len(), 8);
/// assert_eq!(grid.index_of(Cell::new(1, 3)), 7);
///
/// // Out-of-range indices are an explicit miss, not a panic.
/// assert_eq!(grid.cell_at(8), None);
/// # Ok::<(), tessella_core::GridError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    rows: usize,
    cols: usize,
}

impl GridSize {
    /// Creates a grid shape, rejecting zero dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] if `rows` or `cols` is zero.
    pub fn try_new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Returns the number of rows.
    #[must_use]
    #[inline]
    pub fn rows(self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    #[inline]
    pub fn cols(self) -> usize {
        self.cols
    }

    /// Returns the total number of slots (`rows * cols`).
    #[must_use]
    #[inline]
    pub fn len(self) -> usize {
        self.rows * self.cols
    }

    /// Always `false`; a valid grid has at least one slot.
    #[must_use]
    #[inline]
    pub fn is_empty(self) -> bool {
        false
    }

    /// Returns `true` if `cell` lies inside this grid.
    #[must_use]
    #[inline]
    pub fn contains(self, cell: Cell) -> bool {
        cell.row() < self.rows && cell.col() < self.cols
    }

    /// Flattens a cell into its row-major slot index.
    ///
    /// # Panics
    ///
    /// Panics if `cell` lies outside the grid.
    #[must_use]
    #[inline]
    pub fn index_of(self, cell: Cell) -> usize {
        assert!(self.contains(cell), "cell {cell} outside {self:?}");
        self.cols * cell.row() + cell.col()
    }

    /// Returns the cell occupying the given row-major slot index, or `None`
    /// if the index is out of range.
    #[must_use]
    #[inline]
    pub fn cell_at(self, index: usize) -> Option<Cell> {
        (index < self.len()).then(|| Cell::new(index / self.cols, index % self.cols))
    }

    /// Returns an iterator over all cells in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use tessella_core::{Cell, GridSize};
    ///
    /// let grid = GridSize::try_new(2, 2)?;
    /// let cells: Vec<_> = grid.cells().collect();
    /// assert_eq!(
    ///     cells,
    ///     [
    ///         Cell::new(0, 0),
    ///         Cell::new(0, 1),
    ///         Cell::new(1, 0),
    ///         Cell::new(1, 1),
    ///     ]
    /// );
    /// # Ok::<(), tessella_core::GridError>(())
    /// ```
    #[must_use]
    pub fn cells(self) -> Cells {
        Cells {
            grid: self,
            front: 0,
            back: self.len(),
        }
    }
}

/// Iterator over all cells of a grid in row-major order.
#[derive(Debug, Clone)]
pub struct Cells {
    grid: GridSize,
    front: usize,
    back: usize,
}

impl Iterator for Cells {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let cell = self.grid.cell_at(self.front);
        self.front += 1;
        cell
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Cells {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.grid.cell_at(self.back)
    }
}

impl FusedIterator for Cells {}
impl ExactSizeIterator for Cells {}
