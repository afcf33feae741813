//! The phase clock: a frame-driven countdown drawn as a shrinking circular
//! arc.
//!
//! Each round runs two independent clocks, one for the preview phase and
//! one for the level countdown. A clock never schedules itself; the caller
//! owns the loop and feeds elapsed time into [`PhaseClock::tick`], which
//! makes the sweep speed frame-rate independent and the whole thing
//! testable with synthetic time steps.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//!
//! use tessella_clock::{PhaseClock, Tick};
//! use tessella_core::Point;
//!
//! let mut clock = PhaseClock::new(Duration::from_secs(10), Point::new(300.0, 150.0), 75.0)?;
//!
//! match clock.tick(Duration::from_secs(4)) {
//!     Tick::Running(arc) => assert_eq!(arc.sweep_degrees, 144.0),
//!     _ => unreachable!(),
//! }
//! assert_eq!(clock.tick(Duration::from_secs(7)), Tick::Completed);
//! # Ok::<(), tessella_clock::ClockError>(())
//! ```

pub use self::clock::*;

mod clock;
