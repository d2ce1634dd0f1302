//! A single pan/zoom movement between two crop rects.
//!
//! Width, height, and center are interpolated independently instead of
//! the four edges, so the crop scales around its center and keeps its
//! aspect ratio along the whole path.

use std::sync::Arc;

use kenburns_common::error::{KenBurnsError, KenBurnsResult};
use kenburns_geometry::easing::Interpolator;
use kenburns_geometry::ratio::same_aspect_ratio;
use kenburns_geometry::rect::Rect;

/// An immutable movement from `source_rect` to `destiny_rect` over
/// `duration_ms` milliseconds.
#[derive(Debug, Clone)]
pub struct Transition {
    source: Rect,
    destiny: Rect,
    duration_ms: u64,
    interpolator: Arc<dyn Interpolator>,

    // Deltas from source to destiny, cached for per-frame interpolation.
    width_delta: f64,
    height_delta: f64,
    center_x_delta: f64,
    center_y_delta: f64,
}

impl Transition {
    /// Build a transition.
    ///
    /// Fails with [`KenBurnsError::IncompatibleAspectRatio`] if the two
    /// rects do not share an aspect ratio.
    pub fn new(
        source: Rect,
        destiny: Rect,
        duration_ms: u64,
        interpolator: Arc<dyn Interpolator>,
    ) -> KenBurnsResult<Self> {
        if !same_aspect_ratio(&source, &destiny) {
            return Err(KenBurnsError::incompatible_ratio(
                source.ratio(),
                destiny.ratio(),
            ));
        }

        Ok(Self {
            source,
            destiny,
            duration_ms,
            interpolator,
            width_delta: destiny.width() - source.width(),
            height_delta: destiny.height() - source.height(),
            center_x_delta: destiny.center_x() - source.center_x(),
            center_y_delta: destiny.center_y() - source.center_y(),
        })
    }

    /// The rect the transition starts from.
    pub fn source_rect(&self) -> Rect {
        self.source
    }

    /// The rect the transition ends at.
    pub fn destiny_rect(&self) -> Rect {
        self.destiny
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn interpolator(&self) -> &Arc<dyn Interpolator> {
        &self.interpolator
    }

    /// Whether `elapsed_ms` has reached the end of the transition.
    pub fn is_finished(&self, elapsed_ms: u64) -> bool {
        elapsed_ms >= self.duration_ms
    }

    /// Normalized progress in `[0, 1]`; time past the end holds at 1.
    pub fn progress(&self, elapsed_ms: u64) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        (elapsed_ms as f64 / self.duration_ms as f64).min(1.0)
    }

    /// The crop rect to show `elapsed_ms` after the transition started.
    pub fn interpolated_rect(&self, elapsed_ms: u64) -> Rect {
        let eased = self.interpolator.interpolation(self.progress(elapsed_ms));

        let width = self.source.width() + eased * self.width_delta;
        let height = self.source.height() + eased * self.height_delta;
        let center_x = self.source.center_x() + eased * self.center_x_delta;
        let center_y = self.source.center_y() + eased * self.center_y_delta;

        Rect::from_center(center_x, center_y, width, height)
    }
}
