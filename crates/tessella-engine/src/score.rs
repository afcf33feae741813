//! Streak scoring.

use crate::Piece;

/// Counts how many of the two pieces touched by a swap sit in their home
/// slots: 2 if both, 0 if neither, 1 otherwise.
///
/// Pure function of the two home predicates; it reads no other engine
/// state.
///
/// # Examples
///
/// ```
/// use tessella_core::{GridSize, Size, TileLayout};
/// use tessella_engine::{Puzzle, ShuffleSeed, placement_streak};
///
/// let grid = GridSize::try_new(3, 3)?;
/// let layout = TileLayout::new(Size::new(1200.0, 600.0), 600.0, grid)?;
/// let mut puzzle = Puzzle::new(layout);
/// puzzle.shuffle(&mut ShuffleSeed::from_phrase("docs").rng())?;
///
/// let streak = placement_streak(puzzle.piece(0).unwrap(), puzzle.piece(1).unwrap());
/// assert!(streak <= 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn placement_streak(first: &Piece, second: &Piece) -> u32 {
    match (first.is_home(), second.is_home()) {
        (true, true) => 2,
        (false, false) => 0,
        _ => 1,
    }
}

/// Running streak counter for consecutive correct placements.
///
/// Scores live only for the session; nothing is persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    streak: u32,
}

impl Scoreboard {
    /// Creates a scoreboard with a zero streak.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current streak.
    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// Feeds one swap's streak delta into the counter.
    ///
    /// A non-zero `delta` extends the streak; a zero `delta` resets it.
    /// "No progress" and "streak broken" are deliberately the same thing
    /// here, matching the established scoring behavior.
    pub fn update(&mut self, delta: u32) {
        if delta == 0 {
            self.streak = 0;
        } else {
            self.streak += delta;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_streak_table_is_exhaustive() {
        let home_a = Piece::for_test(0, 0);
        let home_b = Piece::for_test(1, 1);
        let away_a = Piece::for_test(2, 3);
        let away_b = Piece::for_test(3, 2);

        assert_eq!(placement_streak(&home_a, &home_b), 2);
        assert_eq!(placement_streak(&home_a, &away_b), 1);
        assert_eq!(placement_streak(&away_a, &home_b), 1);
        assert_eq!(placement_streak(&away_a, &away_b), 0);
    }

    #[test]
    fn test_zero_delta_resets_streak() {
        let mut board = Scoreboard::new();
        board.update(2);
        board.update(1);
        assert_eq!(board.streak(), 3);

        board.update(0);
        assert_eq!(board.streak(), 0);

        board.update(1);
        assert_eq!(board.streak(), 1);
    }
}
