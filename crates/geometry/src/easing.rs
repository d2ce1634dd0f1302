//! Interpolation curves.
//!
//! A curve maps normalized progress in `[0, 1]` to eased progress in
//! `[0, 1]`. Every curve must be monotonic with `curve(0) = 0` and
//! `curve(1) = 1`, otherwise transitions would not start and end on
//! their endpoint rects.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Maps normalized progress to eased progress.
pub trait Interpolator: fmt::Debug + Send + Sync {
    fn interpolation(&self, progress: f64) -> f64;
}

/// Built-in easing curves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingFunction {
    /// Constant speed.
    Linear,
    /// Starts and ends slowly, fastest in the middle (cosine shaped).
    #[default]
    AccelerateDecelerate,
    /// Starts slowly and speeds up (quadratic).
    Accelerate,
    /// Starts fast and slows down (quadratic).
    Decelerate,
}

impl EasingFunction {
    pub const ALL: [EasingFunction; 4] = [
        EasingFunction::Linear,
        EasingFunction::AccelerateDecelerate,
        EasingFunction::Accelerate,
        EasingFunction::Decelerate,
    ];

    /// Apply the curve to `t`.
    pub fn apply(self, t: f64) -> f64 {
        match self {
            EasingFunction::Linear => t,
            EasingFunction::AccelerateDecelerate => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
            EasingFunction::Accelerate => t * t,
            EasingFunction::Decelerate => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EasingFunction::Linear => "linear",
            EasingFunction::AccelerateDecelerate => "accelerate-decelerate",
            EasingFunction::Accelerate => "accelerate",
            EasingFunction::Decelerate => "decelerate",
        }
    }
}

impl Interpolator for EasingFunction {
    fn interpolation(&self, progress: f64) -> f64 {
        self.apply(progress)
    }
}

impl fmt::Display for EasingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown easing name.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unknown easing '{0}' (expected linear, accelerate-decelerate, accelerate, decelerate)")]
pub struct ParseEasingError(String);

impl FromStr for EasingFunction {
    type Err = ParseEasingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "linear" => Ok(EasingFunction::Linear),
            "accelerate-decelerate" | "ease-in-out" => Ok(EasingFunction::AccelerateDecelerate),
            "accelerate" | "ease-in" => Ok(EasingFunction::Accelerate),
            "decelerate" | "ease-out" => Ok(EasingFunction::Decelerate),
            _ => Err(ParseEasingError(s.to_string())),
        }
    }
}
