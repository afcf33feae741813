//! One level's control flow.

use std::time::Duration;

use rand_pcg::Pcg64;
use tessella_clock::{ClockError, PhaseClock, Tick};
use tessella_core::{Point, TileLayout, clock_radii};
use tessella_engine::{Puzzle, PuzzleError, Scoreboard, ShuffleSeed, placement_streak};

use crate::{EventBus, GameEvent, Subscription};

/// Error returned by round operations.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum RoundError {
    /// The puzzle engine rejected an operation.
    #[display("puzzle error: {_0}")]
    Puzzle(PuzzleError),
    /// A phase clock could not be constructed.
    #[display("clock error: {_0}")]
    Clock(ClockError),
}

/// Segment of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum RoundPhase {
    /// The intact image is shown; input is ignored.
    Preview,
    /// The countdown is running and clicks swap pieces.
    Level,
    /// The puzzle was solved before the countdown ran out.
    Solved,
    /// The countdown ran out first.
    TimedOut,
}

/// Durations of the two phases of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundConfig {
    /// How long the unscrambled image is shown.
    pub preview: Duration,
    /// How long the player has to restore the image.
    pub level: Duration,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            preview: Duration::from_secs(5),
            level: Duration::from_secs(60),
        }
    }
}

/// Composition root for one level.
///
/// A round owns the puzzle, the scoreboard, the two phase clocks, and the
/// [`EventBus`]. The caller drives it from its game loop: feed elapsed time
/// into [`tick`](Self::tick) every frame and canvas-space click points into
/// [`click`](Self::click); observe progress through the bus or the
/// accessors.
///
/// Control flow: the preview clock runs first; its completion scrambles the
/// pieces and starts the level clock. Even clicks select a slot, odd clicks
/// swap it with the selection and update the streak. Solving the puzzle
/// pauses the level clock and ends the round; the level clock running out
/// ends it the other way.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use tessella_core::{GridSize, Size, TileLayout};
/// use tessella_engine::ShuffleSeed;
/// use tessella_session::{Round, RoundConfig};
///
/// let grid = GridSize::try_new(3, 3)?;
/// let layout = TileLayout::new(Size::new(1200.0, 600.0), 600.0, grid)?;
/// let mut round = Round::new(layout, RoundConfig::default(), ShuffleSeed::from_phrase("docs"))?;
///
/// round.start();
/// assert!(round.phase().is_preview());
///
/// // The preview clock completing scrambles the pieces.
/// round.tick(Duration::from_secs(6))?;
/// assert!(round.phase().is_level());
/// assert_eq!(round.puzzle().pieces().len(), 9);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Round {
    layout: TileLayout,
    puzzle: Puzzle,
    scoreboard: Scoreboard,
    bus: EventBus,
    preview_clock: PhaseClock,
    level_clock: PhaseClock,
    rng: Pcg64,
    phase: RoundPhase,
    clicks: u64,
    selected: Option<usize>,
}

impl Round {
    /// Creates a round for the given layout and phase durations.
    ///
    /// The preview clock is centered on the canvas, the smaller level clock
    /// on the first tile, with radii from
    /// [`clock_radii`](tessella_core::clock_radii) of the shorter canvas
    /// side.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::Clock`] if either phase duration is zero.
    pub fn new(layout: TileLayout, config: RoundConfig, seed: ShuffleSeed) -> Result<Self, RoundError> {
        let canvas = layout.canvas();
        let radii = clock_radii(canvas.width.min(canvas.height));
        let preview_clock = PhaseClock::new(
            config.preview,
            Point::new(canvas.width / 2.0, canvas.height / 2.0),
            radii.preview,
        )?;
        let tile = layout.tile();
        let level_clock = PhaseClock::new(
            config.level,
            Point::new(tile.width / 2.0, tile.height / 2.0),
            radii.level,
        )?;
        Ok(Self {
            layout,
            puzzle: Puzzle::new(layout),
            scoreboard: Scoreboard::new(),
            bus: EventBus::new(),
            preview_clock,
            level_clock,
            rng: seed.rng(),
            phase: RoundPhase::Preview,
            clicks: 0,
            selected: None,
        })
    }

    /// Announces the round to subscribers.
    ///
    /// Call once, after wiring up subscriptions.
    pub fn start(&mut self) {
        log::debug!("round starting, preview phase");
        self.bus.emit(GameEvent::GameStart);
    }

    /// Registers a callback on the round's event bus.
    pub fn subscribe<F>(&mut self, callback: F) -> Subscription
    where
        F: FnMut(&GameEvent) + 'static,
    {
        self.bus.subscribe(callback)
    }

    /// Removes a subscriber; returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.bus.unsubscribe(subscription)
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns the puzzle engine, for rendering pieces.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Returns the current streak score.
    #[must_use]
    pub fn streak(&self) -> u32 {
        self.scoreboard.streak()
    }

    /// Returns the layout the round was built for.
    #[must_use]
    pub fn layout(&self) -> TileLayout {
        self.layout
    }

    /// Returns the clock driving the current phase, for rendering the dial.
    #[must_use]
    pub fn active_clock(&self) -> &PhaseClock {
        match self.phase {
            RoundPhase::Preview => &self.preview_clock,
            RoundPhase::Level | RoundPhase::Solved | RoundPhase::TimedOut => &self.level_clock,
        }
    }

    /// Returns the slot selected by the last even click, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Advances the round by `dt` of wall-clock time.
    ///
    /// Completing the preview clock scrambles the pieces, emits
    /// [`GameEvent::Shuffle`], and enters the level phase. Completing the
    /// level clock emits [`GameEvent::GameEnd`] and ends the round. Ticks
    /// after the round has ended are no-ops.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::Puzzle`] if the shuffle exhausts its retries
    /// (degenerate grid shapes).
    pub fn tick(&mut self, dt: Duration) -> Result<(), RoundError> {
        match self.phase {
            RoundPhase::Preview => {
                if let Tick::Completed = self.preview_clock.tick(dt) {
                    self.puzzle.shuffle(&mut self.rng)?;
                    log::debug!("preview over, {} pieces dealt", self.puzzle.pieces().len());
                    self.phase = RoundPhase::Level;
                    self.bus.emit(GameEvent::Shuffle);
                }
            }
            RoundPhase::Level => {
                if let Tick::Completed = self.level_clock.tick(dt) {
                    log::debug!("level clock ran out");
                    self.phase = RoundPhase::TimedOut;
                    self.bus.emit(GameEvent::GameEnd);
                }
            }
            RoundPhase::Solved | RoundPhase::TimedOut => {}
        }
        Ok(())
    }

    /// Feeds one canvas-space click into the round.
    ///
    /// Clicks outside the level phase or outside the canvas are ignored.
    /// Even clicks select the slot under the cursor and emit
    /// [`GameEvent::Select`]; odd clicks emit [`GameEvent::Swap`], exchange
    /// the two slots' pieces, and score the swap. Solving the puzzle pauses
    /// the level clock and emits [`GameEvent::Resolved`].
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::Puzzle`] if a slot under a click has no piece;
    /// this indicates a layout/engine mismatch and is not expected in
    /// normal play.
    pub fn click(&mut self, point: Point) -> Result<(), RoundError> {
        if !self.phase.is_level() {
            return Ok(());
        }
        let Some(index) = self.layout.index_at_point(point) else {
            return Ok(());
        };

        let even = self.clicks % 2 == 0;
        self.clicks += 1;

        if even {
            self.selected = Some(index);
            self.bus.emit(GameEvent::Select(index));
            return Ok(());
        }

        let Some(first) = self.selected.take() else {
            return Ok(());
        };
        self.bus.emit(GameEvent::Swap(index));
        let solved = self.puzzle.swap_and_check(first, index)?;

        let first_piece = self
            .puzzle
            .piece(first)
            .ok_or(PuzzleError::PieceNotFound { index: first })?;
        let second_piece = self
            .puzzle
            .piece(index)
            .ok_or(PuzzleError::PieceNotFound { index })?;
        self.scoreboard
            .update(placement_streak(first_piece, second_piece));

        if solved {
            log::debug!("puzzle resolved with streak {}", self.scoreboard.streak());
            self.level_clock.pause(true);
            self.phase = RoundPhase::Solved;
            self.bus.emit(GameEvent::Resolved);
        }
        Ok(())
    }
}
