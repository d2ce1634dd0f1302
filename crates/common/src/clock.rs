//! Clock and frame pacing utilities.
//!
//! The animation engine never reads a clock; it is fed monotonic
//! millisecond timestamps by whoever drives it. This module provides the
//! pieces a driver needs for that:
//! - A monotonic clock anchored at animation start
//! - A frame rate controller for pacing frame callbacks

use std::time::{Duration, Instant};

/// A monotonic clock that reports milliseconds relative to a fixed epoch
/// (the moment the animation started).
#[derive(Debug, Clone)]
pub struct AnimationClock {
    epoch: Instant,
}

impl AnimationClock {
    /// Create a new clock anchored to now.
    pub fn start() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }

    /// Milliseconds elapsed since the epoch.
    pub fn elapsed_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }

    /// Convert milliseconds to seconds.
    pub fn ms_to_secs(ms: u64) -> f64 {
        ms as f64 / 1_000.0
    }

    /// Convert seconds to milliseconds.
    pub fn secs_to_ms(secs: f64) -> u64 {
        (secs * 1_000.0) as u64
    }
}

/// Frame rate controller for paced frame callbacks.
#[derive(Debug)]
pub struct RateController {
    target_interval_ms: u64,
    last_tick_ms: Option<u64>,
}

impl RateController {
    /// Create a controller targeting the given Hz rate.
    ///
    /// A zero rate is treated as 1 Hz.
    pub fn new(target_hz: u32) -> Self {
        Self {
            target_interval_ms: (1_000 / target_hz.max(1) as u64).max(1),
            last_tick_ms: None,
        }
    }

    /// Check if enough time has passed for the next tick.
    /// Returns true and updates internal state if ready.
    /// The first call always returns true.
    pub fn should_tick(&mut self, current_ms: u64) -> bool {
        match self.last_tick_ms {
            None => {
                self.last_tick_ms = Some(current_ms);
                true
            }
            Some(last) if current_ms >= last + self.target_interval_ms => {
                self.last_tick_ms = Some(current_ms);
                true
            }
            _ => false,
        }
    }

    /// Time left until the next tick is due, zero if already due.
    pub fn time_until_next(&self, current_ms: u64) -> Duration {
        match self.last_tick_ms {
            None => Duration::ZERO,
            Some(last) => Duration::from_millis(
                (last + self.target_interval_ms).saturating_sub(current_ms),
            ),
        }
    }

    /// Target interval in milliseconds.
    pub fn interval_ms(&self) -> u64 {
        self.target_interval_ms
    }
}
