//! The piece model.

use std::mem;

use tessella_core::Point;

/// One tile of the divided source image.
///
/// A piece belongs in the slot `original_index` and currently occupies
/// `current_index`; both are row-major slot indices (`cols * row + col`).
/// The source offset points into the splash-art image and never changes
/// after creation; the destination offset is the piece's on-canvas position
/// and moves with every swap.
///
/// Pieces are created in bulk by [`Puzzle::shuffle`](crate::Puzzle::shuffle)
/// and mutated in place by [`Puzzle::swap`](crate::Puzzle::swap); they
/// cannot be constructed directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    original_index: usize,
    current_index: usize,
    source: Point,
    dest: Point,
}

impl Piece {
    pub(crate) fn new(original_index: usize, current_index: usize, source: Point, dest: Point) -> Self {
        Self {
            original_index,
            current_index,
            source,
            dest,
        }
    }

    /// Returns the slot this piece belongs in when the puzzle is solved.
    #[must_use]
    #[inline]
    pub fn original_index(&self) -> usize {
        self.original_index
    }

    /// Returns the slot this piece currently occupies.
    #[must_use]
    #[inline]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Returns the image-space offset of this piece's tile.
    #[must_use]
    #[inline]
    pub fn source(&self) -> Point {
        self.source
    }

    /// Returns the canvas-space offset this piece is displayed at.
    #[must_use]
    #[inline]
    pub fn dest(&self) -> Point {
        self.dest
    }

    /// Returns `true` if the piece sits in its home slot.
    #[must_use]
    #[inline]
    pub fn is_home(&self) -> bool {
        self.original_index == self.current_index
    }

    /// Exchanges current slot and destination offset with `other`.
    ///
    /// Source offsets stay put; they are fixed to each piece's origin on
    /// the source image.
    pub(crate) fn swap_placement(&mut self, other: &mut Self) {
        mem::swap(&mut self.current_index, &mut other.current_index);
        mem::swap(&mut self.dest, &mut other.dest);
    }

    #[cfg(test)]
    pub(crate) fn for_test(original_index: usize, current_index: usize) -> Self {
        Self::new(original_index, current_index, Point::default(), Point::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_home() {
        assert!(Piece::for_test(3, 3).is_home());
        assert!(!Piece::for_test(3, 4).is_home());
    }

    #[test]
    fn test_swap_placement_keeps_sources() {
        let mut a = Piece::new(0, 1, Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        let mut b = Piece::new(1, 0, Point::new(200.0, 0.0), Point::new(0.0, 0.0));
        a.swap_placement(&mut b);

        assert_eq!(a.current_index(), 0);
        assert_eq!(b.current_index(), 1);
        assert_eq!(a.dest(), Point::new(0.0, 0.0));
        assert_eq!(b.dest(), Point::new(100.0, 0.0));
        // Sources never move.
        assert_eq!(a.source(), Point::new(0.0, 0.0));
        assert_eq!(b.source(), Point::new(200.0, 0.0));
    }
}
