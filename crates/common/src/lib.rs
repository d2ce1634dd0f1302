//! Ken Burns Common Utilities
//!
//! Shared infrastructure for all Ken Burns crates:
//! - Error types and result aliases
//! - Frame clock and pacing utilities for the animation driver
//! - Tracing/logging initialization
//! - Configuration loading

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;

pub use clock::*;
pub use config::*;
pub use error::*;
