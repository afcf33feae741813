//! Round orchestration for the tessella puzzle.
//!
//! This crate is the composition root between the engine, the phase clocks,
//! and whatever presentation layer drives them:
//!
//! - [`EventBus`] - a typed dispatcher for game lifecycle signals
//! - [`Round`] - one level's control flow: preview, shuffle, countdown,
//!   click-to-swap input, streak scoring, win/lose transitions
//! - [`SplashCatalog`] - splash-art metadata with draw-without-replacement
//!   image selection
//! - [`Renderable`] - the capability seam a drawing layer implements
//!
//! The session still performs no rendering and no networking; it consumes
//! click points and time deltas and publishes [`GameEvent`]s.

pub use self::{event::*, render::*, round::*, splash::*};

mod event;
mod render;
mod round;
mod splash;
