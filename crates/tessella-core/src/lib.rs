//! Grid geometry and layout math for the tessella puzzle.
//!
//! This crate holds the value types shared by the puzzle engine and the
//! session layer:
//!
//! - [`GridSize`] - validated grid shape with row-major indexing
//! - [`Cell`] - a single `(row, col)` grid coordinate
//! - [`Point`], [`Size`] - screen-space geometry
//! - [`TileLayout`] - mapping between image space, canvas space, and grid
//!   coordinates
//!
//! Nothing here performs any rendering; the layout types only compute the
//! numeric offsets a drawing surface needs.
//!
//! # Examples
//!
//! ```
//! use tessella_core::{Cell, GridSize};
//!
//! let grid = GridSize::try_new(3, 3)?;
//! assert_eq!(grid.len(), 9);
//! assert_eq!(grid.index_of(Cell::new(1, 2)), 5);
//! assert_eq!(grid.cell_at(5), Some(Cell::new(1, 2)));
//! # Ok::<(), tessella_core::GridError>(())
//! ```

pub use self::{cell::*, grid::*, layout::*};

mod cell;
mod grid;
mod layout;
