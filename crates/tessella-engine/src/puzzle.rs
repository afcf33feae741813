//! Shuffle, swap, and solved-check over the piece collection.

use rand::Rng;
use tessella_core::{GridSize, TileLayout};

use crate::{CellRaffle, Piece};

/// Upper bound on consecutive shuffle passes that may come out already
/// solved before [`Puzzle::shuffle`] gives up.
///
/// Re-rolling an already-solved arrangement is astronomically rare on real
/// grids, but a 1×1 grid can never produce anything else, so the retry is
/// capped rather than unconditional.
pub const MAX_SHUFFLE_ATTEMPTS: usize = 32;

/// Error returned by puzzle operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PuzzleError {
    /// No piece currently occupies the given slot.
    #[display("no piece occupies slot {index}")]
    PieceNotFound {
        /// The slot index that was looked up.
        index: usize,
    },
    /// Every shuffle attempt came out solved; the grid shape cannot yield a
    /// non-trivial permutation.
    #[display("grid {rows}x{cols} cannot produce an unsolved arrangement")]
    DegenerateGrid {
        /// Grid row count.
        rows: usize,
        /// Grid column count.
        cols: usize,
    },
}

/// The puzzle engine: owns the piece collection for one image.
///
/// After a [`shuffle`](Self::shuffle) the collection holds exactly
/// `rows * cols` pieces in original-index order, and their current indices
/// form a permutation of `0..rows * cols`. [`swap`](Self::swap) is the only
/// operation that mutates pieces afterwards.
///
/// # Examples
///
/// ```
/// use tessella_core::{GridSize, Size, TileLayout};
/// use tessella_engine::{Puzzle, ShuffleSeed};
///
/// let grid = GridSize::try_new(3, 3)?;
/// let layout = TileLayout::new(Size::new(1200.0, 600.0), 600.0, grid)?;
/// let mut puzzle = Puzzle::new(layout);
/// puzzle.shuffle(&mut ShuffleSeed::from_phrase("docs").rng())?;
///
/// // Swapping the occupants of two slots twice restores the arrangement.
/// let before: Vec<_> = puzzle.pieces().to_vec();
/// puzzle.swap(0, 8)?;
/// puzzle.swap(0, 8)?;
/// assert_eq!(puzzle.pieces(), &before[..]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Puzzle {
    grid: GridSize,
    layout: TileLayout,
    pieces: Vec<Piece>,
}

impl Puzzle {
    /// Creates an engine for the given layout with no pieces yet.
    ///
    /// The piece collection stays empty until the first
    /// [`shuffle`](Self::shuffle); an empty collection reports itself as
    /// solved, mirroring the preview phase in which the intact image is
    /// shown.
    #[must_use]
    pub fn new(layout: TileLayout) -> Self {
        Self {
            grid: layout.grid(),
            layout,
            pieces: Vec::new(),
        }
    }

    /// Returns the grid shape.
    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// Returns the tile layout geometry.
    #[must_use]
    pub fn layout(&self) -> TileLayout {
        self.layout
    }

    /// Returns all pieces in original-index order.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Discards the current pieces and deals a fresh scrambled set.
    ///
    /// Pieces are created in row-major order of their home cells; each gets
    /// its destination from a fresh [`CellRaffle`]. If the resulting
    /// arrangement happens to be already solved the pass is retried, up to
    /// [`MAX_SHUFFLE_ATTEMPTS`] times.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::DegenerateGrid`] if every attempt came out
    /// solved. A 1×1 grid fails deterministically; any larger grid only
    /// fails under astronomically bad luck.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), PuzzleError> {
        for attempt in 1..=MAX_SHUFFLE_ATTEMPTS {
            self.deal(rng);
            if !self.is_solved() {
                if attempt > 1 {
                    log::debug!("shuffle needed {attempt} attempts");
                }
                return Ok(());
            }
            log::trace!("shuffle attempt {attempt} came out solved, retrying");
        }
        self.pieces.clear();
        Err(PuzzleError::DegenerateGrid {
            rows: self.grid.rows(),
            cols: self.grid.cols(),
        })
    }

    /// One shuffle pass: rebuild every piece from a fresh raffle.
    fn deal<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.pieces.clear();
        let mut raffle = CellRaffle::new(self.grid, rng);
        for cell in self.grid.cells() {
            let dest_cell = raffle.draw(cell);
            self.pieces.push(Piece::new(
                self.grid.index_of(cell),
                self.grid.index_of(dest_cell),
                self.layout.source_origin(cell),
                self.layout.dest_origin(dest_cell),
            ));
        }
        debug_assert!(raffle.is_empty());
    }

    /// Returns the piece occupying the given slot, or `None` if the slot is
    /// out of range or the collection is empty.
    ///
    /// Linear scan; callers must not assume a match.
    #[must_use]
    pub fn piece(&self, current_index: usize) -> Option<&Piece> {
        self.pieces
            .iter()
            .find(|piece| piece.current_index() == current_index)
    }

    /// Exchanges the occupants of two slots.
    ///
    /// The two pieces trade current indices and destination offsets; source
    /// offsets never move. Swapping a slot with itself is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::PieceNotFound`] if either slot has no
    /// occupant; the collection is left untouched in that case.
    pub fn swap(&mut self, first: usize, second: usize) -> Result<(), PuzzleError> {
        let a = self.position_of(first)?;
        let b = self.position_of(second)?;
        if a == b {
            return Ok(());
        }
        let (lo, hi) = (a.min(b), a.max(b));
        let (left, right) = self.pieces.split_at_mut(hi);
        left[lo].swap_placement(&mut right[0]);
        Ok(())
    }

    /// [`swap`](Self::swap), additionally reporting whether the whole
    /// puzzle is solved afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::PieceNotFound`] as [`swap`](Self::swap) does.
    pub fn swap_and_check(&mut self, first: usize, second: usize) -> Result<bool, PuzzleError> {
        self.swap(first, second)?;
        Ok(self.is_solved())
    }

    /// Returns `true` if every piece sits in its home slot.
    ///
    /// Live O(n) scan on every call, no caching. Vacuously `true` while the
    /// collection is empty (before the first shuffle).
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.pieces.iter().all(Piece::is_home)
    }

    /// Index into `pieces` of the piece occupying `current_index`.
    fn position_of(&self, index: usize) -> Result<usize, PuzzleError> {
        self.pieces
            .iter()
            .position(|piece| piece.current_index() == index)
            .ok_or(PuzzleError::PieceNotFound { index })
    }

    #[cfg(test)]
    pub(crate) fn with_pieces(layout: TileLayout, pieces: Vec<Piece>) -> Self {
        Self {
            grid: layout.grid(),
            layout,
            pieces,
        }
    }
}
