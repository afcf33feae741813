//! Countdown clock state machine.

use std::time::Duration;

use tessella_core::Point;

/// Degrees in the full clock circle.
pub const FULL_CIRCLE: f64 = 360.0;

/// Error returned when a clock is rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ClockError {
    /// The countdown duration must be positive.
    #[display("clock duration must be positive")]
    InvalidDuration,
    /// The dial radius must be a positive finite number.
    #[display("clock radius must be positive and finite")]
    InvalidRadius,
}

/// Lifecycle of a [`PhaseClock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum ClockState {
    /// Constructed, not yet ticked.
    Idle,
    /// Counting down.
    Running,
    /// Halted by [`PhaseClock::pause`] before natural completion.
    Paused,
    /// Ran down to zero; completion has been reported.
    Completed,
}

/// The arc a renderer should draw for the current frame.
///
/// The sweep starts at the vertical-up position and extends clockwise by
/// `sweep_degrees`. A renderer fills that sweep; the uncovered wedge is the
/// remaining time and shrinks as the countdown proceeds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSweep {
    /// Dial center in canvas space.
    pub center: Point,
    /// Dial radius in pixels.
    pub radius: f64,
    /// Clockwise extent from vertical-up, in degrees.
    pub sweep_degrees: f64,
}

/// Result of one [`PhaseClock::tick`].
#[derive(Debug, Clone, Copy, PartialEq, derive_more::IsVariant)]
pub enum Tick {
    /// Still counting down; draw this arc.
    Running(ArcSweep),
    /// The countdown just ran out. Reported exactly once.
    Completed,
    /// The clock is paused or already completed; nothing to do.
    Halted,
}

/// A countdown over a fixed duration, rendered as a circular dial.
///
/// The full dial is 360 degrees; `degrees_per_second` is derived from the
/// total duration, and every tick consumes degrees proportional to the real
/// elapsed time it is handed. One clock instance drives one phase (preview
/// or level) and is replaced for the next phase.
///
/// Ticking and pausing are plain synchronous calls; a clock must only be
/// driven from one call site at a time.
#[derive(Debug, Clone)]
pub struct PhaseClock {
    center: Point,
    radius: f64,
    degrees_per_second: f64,
    remaining_degrees: f64,
    state: ClockState,
}

impl PhaseClock {
    /// Creates a clock that runs down over `duration`.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidDuration`] for a zero duration and
    /// [`ClockError::InvalidRadius`] for a non-positive or non-finite
    /// radius.
    pub fn new(duration: Duration, center: Point, radius: f64) -> Result<Self, ClockError> {
        if duration.is_zero() {
            return Err(ClockError::InvalidDuration);
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ClockError::InvalidRadius);
        }
        Ok(Self {
            center,
            radius,
            degrees_per_second: FULL_CIRCLE / duration.as_secs_f64(),
            remaining_degrees: FULL_CIRCLE,
            state: ClockState::Idle,
        })
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> ClockState {
        self.state
    }

    /// Returns the degrees left on the dial (0-360).
    #[must_use]
    pub fn remaining_degrees(&self) -> f64 {
        self.remaining_degrees
    }

    /// Returns the dial consumption rate.
    #[must_use]
    pub fn degrees_per_second(&self) -> f64 {
        self.degrees_per_second
    }

    /// Returns the arc to draw for the current state of the dial.
    #[must_use]
    pub fn arc(&self) -> ArcSweep {
        ArcSweep {
            center: self.center,
            radius: self.radius,
            sweep_degrees: FULL_CIRCLE - self.remaining_degrees,
        }
    }

    /// Advances the countdown by `dt` of wall-clock time.
    ///
    /// Consumes `degrees_per_second * dt` from the dial. When the dial runs
    /// out this reports [`Tick::Completed`] exactly once and resets the
    /// dial to a full circle; afterwards (and while paused) ticks report
    /// [`Tick::Halted`].
    pub fn tick(&mut self, dt: Duration) -> Tick {
        match self.state {
            ClockState::Paused | ClockState::Completed => return Tick::Halted,
            ClockState::Idle | ClockState::Running => {}
        }
        self.state = ClockState::Running;
        self.remaining_degrees -= self.degrees_per_second * dt.as_secs_f64();
        if self.remaining_degrees <= 0.0 {
            self.remaining_degrees = FULL_CIRCLE;
            self.state = ClockState::Completed;
            return Tick::Completed;
        }
        Tick::Running(self.arc())
    }

    /// Halts the countdown before natural completion.
    ///
    /// With `reset` the dial is also restored to a full circle; without it
    /// the dial keeps its current value. Pausing an already completed clock
    /// has no further effect on completion reporting.
    pub fn pause(&mut self, reset: bool) {
        if reset {
            self.reset();
        }
        if !self.state.is_completed() {
            self.state = ClockState::Paused;
        }
    }

    /// Restores the dial to a full circle without changing the state.
    pub fn reset(&mut self) {
        self.remaining_degrees = FULL_CIRCLE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock(secs: u64) -> PhaseClock {
        PhaseClock::new(Duration::from_secs(secs), Point::new(100.0, 100.0), 50.0).unwrap()
    }

    #[test]
    fn test_rejects_bad_construction() {
        assert!(matches!(
            PhaseClock::new(Duration::ZERO, Point::default(), 50.0),
            Err(ClockError::InvalidDuration)
        ));
        assert!(matches!(
            PhaseClock::new(Duration::from_secs(5), Point::default(), 0.0),
            Err(ClockError::InvalidRadius)
        ));
        assert!(matches!(
            PhaseClock::new(Duration::from_secs(5), Point::default(), f64::INFINITY),
            Err(ClockError::InvalidRadius)
        ));
    }

    #[test]
    fn test_remaining_is_monotone_while_running() {
        let mut clock = clock(10);
        let mut last = clock.remaining_degrees();
        for _ in 0..8 {
            let tick = clock.tick(Duration::from_secs(1));
            assert!(tick.is_running());
            assert!(clock.remaining_degrees() < last);
            last = clock.remaining_degrees();
        }
    }

    #[test]
    fn test_completion_fires_exactly_once() {
        let mut clock = clock(2);
        assert!(clock.tick(Duration::from_secs(1)).is_running());
        assert_eq!(clock.tick(Duration::from_secs(5)), Tick::Completed);
        // Dial resets on completion, further ticks stay halted.
        assert_eq!(clock.remaining_degrees(), FULL_CIRCLE);
        assert_eq!(clock.tick(Duration::from_secs(1)), Tick::Halted);
        assert_eq!(clock.state(), ClockState::Completed);
    }

    #[test]
    fn test_sweep_is_frame_rate_independent() {
        let mut coarse = clock(10);
        let mut fine = clock(10);
        let _ = coarse.tick(Duration::from_secs(2));
        for _ in 0..20 {
            let _ = fine.tick(Duration::from_millis(100));
        }
        let diff = (coarse.remaining_degrees() - fine.remaining_degrees()).abs();
        assert!(diff < 1e-9);
    }

    #[test]
    fn test_arc_grows_as_time_elapses() {
        let mut clock = clock(10);
        let Tick::Running(first) = clock.tick(Duration::from_secs(1)) else {
            panic!("clock should be running");
        };
        let Tick::Running(second) = clock.tick(Duration::from_secs(1)) else {
            panic!("clock should be running");
        };
        assert_eq!(first.sweep_degrees, 36.0);
        assert_eq!(second.sweep_degrees, 72.0);
        assert_eq!(first.center, Point::new(100.0, 100.0));
        assert_eq!(first.radius, 50.0);
    }

    #[test]
    fn test_pause_with_reset_restores_dial() {
        let mut clock = clock(10);
        let _ = clock.tick(Duration::from_secs(4));
        clock.pause(true);
        assert_eq!(clock.remaining_degrees(), FULL_CIRCLE);
        assert!(clock.state().is_paused());
        assert_eq!(clock.tick(Duration::from_secs(1)), Tick::Halted);
    }

    #[test]
    fn test_pause_without_reset_keeps_dial() {
        let mut clock = clock(10);
        let _ = clock.tick(Duration::from_secs(4));
        let remaining = clock.remaining_degrees();
        clock.pause(false);
        assert_eq!(clock.remaining_degrees(), remaining);
        assert_eq!(clock.tick(Duration::from_secs(1)), Tick::Halted);
    }
}
