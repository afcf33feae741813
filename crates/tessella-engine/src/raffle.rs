//! Randomized cell allocation for shuffling.

use std::collections::VecDeque;

use rand::{Rng, seq::SliceRandom as _};
use tessella_core::{Cell, GridSize};

/// A one-shot allocator handing out every cell of a grid in random order.
///
/// The raffle is built once per shuffle pass: all `rows * cols` cells are
/// collected, uniformly shuffled, and then drawn one at a time. Each draw
/// prefers a cell that collides with the requester on neither row nor
/// column, but only the cell at the back of the deck is ever inspected: if
/// it collides, the front cell is handed out instead, whatever its
/// coordinates. This keeps every draw O(1) at the cost of occasionally
/// returning a same-row or same-column cell, which is unavoidable anyway on
/// narrow grids (1×N has only one row to offer). Callers tolerate such
/// collisions.
///
/// # Examples
///
/// ```
/// use tessella_core::{Cell, GridSize};
/// use tessella_engine::CellRaffle;
///
/// let grid = GridSize::try_new(3, 3)?;
/// let mut raffle = CellRaffle::new(grid, &mut rand::rng());
///
/// let mut drawn: Vec<_> = grid.cells().map(|cell| raffle.draw(cell)).collect();
/// assert!(raffle.is_empty());
///
/// // Every cell is handed out exactly once.
/// drawn.sort();
/// assert_eq!(drawn, grid.cells().collect::<Vec<_>>());
/// # Ok::<(), tessella_core::GridError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CellRaffle {
    cells: VecDeque<Cell>,
}

impl CellRaffle {
    /// Builds a raffle over every cell of `grid`, shuffled with `rng`.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(grid: GridSize, rng: &mut R) -> Self {
        let mut cells: Vec<Cell> = grid.cells().collect();
        cells.shuffle(rng);
        Self {
            cells: cells.into(),
        }
    }

    /// Returns how many cells are still in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if every cell has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Draws one unused cell for the piece currently filling `requester`.
    ///
    /// Only the back of the deck is tested against the requester's row and
    /// column; see the type-level docs for the collision behavior. The last
    /// remaining cell is returned regardless of collisions.
    ///
    /// # Panics
    ///
    /// Panics if the raffle is empty. A shuffle pass draws exactly
    /// `rows * cols` times from a fresh raffle, so this cannot happen there.
    pub fn draw(&mut self, requester: Cell) -> Cell {
        let back = *self.cells.back().expect("raffle exhausted");
        let drawn = if back.shares_line(requester) {
            self.cells.pop_front()
        } else {
            self.cells.pop_back()
        };
        drawn.expect("raffle exhausted")
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    fn rng() -> Pcg64 {
        Pcg64::seed_from_u64(42)
    }

    #[test]
    fn test_hands_out_every_cell_once() {
        let grid = GridSize::try_new(4, 5).unwrap();
        let mut raffle = CellRaffle::new(grid, &mut rng());
        assert_eq!(raffle.len(), 20);

        let mut drawn: Vec<_> = grid.cells().map(|cell| raffle.draw(cell)).collect();
        assert!(raffle.is_empty());
        drawn.sort();
        drawn.dedup();
        assert_eq!(drawn.len(), 20);
    }

    #[test]
    fn test_back_collision_falls_back_to_front() {
        let grid = GridSize::try_new(2, 2).unwrap();
        let mut raffle = CellRaffle::new(grid, &mut rng());

        // Whatever the shuffle order, the drawn cell is either the deck's
        // back (collision-free) or its front (fallback).
        let front = *raffle.cells.front().unwrap();
        let back = *raffle.cells.back().unwrap();
        let requester = Cell::new(0, 0);
        let drawn = raffle.draw(requester);
        if back.shares_line(requester) {
            assert_eq!(drawn, front);
        } else {
            assert_eq!(drawn, back);
        }
    }

    #[test]
    fn test_last_cell_returned_despite_collision() {
        let grid = GridSize::try_new(1, 1).unwrap();
        let mut raffle = CellRaffle::new(grid, &mut rng());
        // The only cell always collides with itself on both axes.
        assert_eq!(raffle.draw(Cell::new(0, 0)), Cell::new(0, 0));
        assert!(raffle.is_empty());
    }

    #[test]
    fn test_narrow_grid_may_collide() {
        // On a 1xN grid every cell shares the single row, so the heuristic
        // can never avoid a row collision; draws must still succeed.
        let grid = GridSize::try_new(1, 6).unwrap();
        let mut raffle = CellRaffle::new(grid, &mut rng());
        for cell in grid.cells() {
            let drawn = raffle.draw(cell);
            assert_eq!(drawn.row(), 0);
        }
        assert!(raffle.is_empty());
    }

    #[test]
    #[should_panic(expected = "raffle exhausted")]
    fn test_draw_from_empty_panics() {
        let grid = GridSize::try_new(1, 1).unwrap();
        let mut raffle = CellRaffle::new(grid, &mut rng());
        let _ = raffle.draw(Cell::new(0, 0));
        let _ = raffle.draw(Cell::new(0, 0));
    }
}
