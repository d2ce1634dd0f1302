//! Ken Burns Engine
//!
//! Generates and plays back pan/zoom transitions over a still image:
//! - **Transition:** One timed movement between two same-ratio crop rects
//! - **Generator:** Picks constrained random crop rects and chains transitions
//! - **Driver:** Frame loop with pause/resume and start/end notifications
//!
//! This crate is pure computation: no I/O, no clocks, no drawing.
//! Time comes in as monotonic milliseconds; rects go out.

pub mod driver;
pub mod generator;
pub mod transition;

pub use driver::{KenBurnsDriver, PlaybackState, TransitionListener};
pub use generator::{GeneratorConfig, RandomTransitionGenerator, TransitionGenerator};
pub use transition::Transition;
