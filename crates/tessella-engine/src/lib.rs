//! The tessella puzzle engine.
//!
//! A splash-art image is divided into a grid of tiles; this crate owns the
//! piece model and everything that mutates it:
//!
//! - [`Piece`] - one tile's home slot, current slot, and geometry
//! - [`CellRaffle`] - the randomized cell allocator used during shuffling
//! - [`Puzzle`] - shuffle / swap / solved-check over the piece collection
//! - [`Scoreboard`] and [`placement_streak`] - streak scoring
//! - [`ShuffleSeed`] - reproducible RNG seeding
//!
//! The engine performs no rendering and owns no clock; it hands plain
//! geometry back to the presentation layer and is driven synchronously by
//! it.
//!
//! # Examples
//!
//! ```
//! use tessella_core::{GridSize, Size, TileLayout};
//! use tessella_engine::{Puzzle, ShuffleSeed};
//!
//! let grid = GridSize::try_new(3, 3)?;
//! let layout = TileLayout::new(Size::new(1200.0, 600.0), 600.0, grid)?;
//! let mut puzzle = Puzzle::new(layout);
//!
//! let seed: ShuffleSeed = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
//!     .parse()?;
//! puzzle.shuffle(&mut seed.rng())?;
//!
//! assert_eq!(puzzle.pieces().len(), 9);
//! assert!(!puzzle.is_solved());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{piece::*, puzzle::*, raffle::*, score::*, seed::*};

mod piece;
mod puzzle;
mod raffle;
mod score;
mod seed;
