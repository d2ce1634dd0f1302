//! Transition generation: constrained random crop rects.
//!
//! # Algorithm
//!
//! 1. **Max crop:** find the largest rect with the viewport's aspect ratio
//!    that fits inside the drawable.
//! 2. **Scale:** pick a size between [`MIN_RECT_FACTOR`] and 100% of the
//!    max crop, quantized to 100 steps.
//! 3. **Place:** pick a random integer offset that keeps the rect inside
//!    the drawable.
//! 4. **Chain:** start each transition from the previous destiny rect when
//!    the drawable and viewport have not changed, so motion continues
//!    without a jump.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use kenburns_common::config::AnimationDefaults;
use kenburns_common::error::{KenBurnsError, KenBurnsResult};
use kenburns_geometry::easing::{EasingFunction, Interpolator};
use kenburns_geometry::ratio::{same_aspect_ratio, truncate};
use kenburns_geometry::rect::Rect;

use crate::transition::Transition;

/// Default duration of a generated transition in milliseconds.
pub const DEFAULT_TRANSITION_DURATION_MS: u64 = 10_000;

/// Smallest generated rect relative to the max crop.
pub const MIN_RECT_FACTOR: f64 = 0.75;

/// Produces the transitions played by a Ken Burns driver.
pub trait TransitionGenerator {
    /// Generate the next transition for a drawable shown in `viewport`.
    ///
    /// Only the aspect ratio of `viewport` is used.
    fn generate_next_transition(
        &mut self,
        drawable_bounds: &Rect,
        viewport: &Rect,
    ) -> KenBurnsResult<Transition>;
}

/// Configuration for the random transition generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Duration of each transition in milliseconds.
    pub transition_duration_ms: u64,

    /// Easing curve applied to every transition.
    pub easing: EasingFunction,

    /// Reuse the previous destiny rect as the next source rect when the
    /// drawable bounds and viewport ratio are unchanged. When false, both
    /// rects are drawn independently on every call.
    pub chain_transitions: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            transition_duration_ms: DEFAULT_TRANSITION_DURATION_MS,
            easing: EasingFunction::default(),
            chain_transitions: true,
        }
    }
}

impl GeneratorConfig {
    /// Build from the application-level animation defaults.
    pub fn from_defaults(defaults: &AnimationDefaults) -> KenBurnsResult<Self> {
        let easing = defaults
            .easing
            .parse::<EasingFunction>()
            .map_err(|e| KenBurnsError::config(e.to_string()))?;
        if defaults.transition_duration_ms == 0 {
            return Err(KenBurnsError::config(
                "transition_duration_ms must be positive",
            ));
        }
        Ok(Self {
            transition_duration_ms: defaults.transition_duration_ms,
            easing,
            chain_transitions: defaults.chain_transitions,
        })
    }
}

/// Generates transitions between random crop rects of the viewport's
/// aspect ratio.
#[derive(Debug)]
pub struct RandomTransitionGenerator {
    rng: StdRng,
    transition_duration_ms: u64,
    interpolator: Arc<dyn Interpolator>,
    chain_transitions: bool,
    last_transition: Option<Transition>,
    last_drawable_bounds: Option<Rect>,
}

impl RandomTransitionGenerator {
    /// Create a generator seeded from the system time.
    pub fn new(config: GeneratorConfig) -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::with_seed(config, seed)
    }

    /// Create a generator with a fixed seed, for reproducible output.
    pub fn with_seed(config: GeneratorConfig, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            transition_duration_ms: config.transition_duration_ms,
            interpolator: Arc::new(config.easing),
            chain_transitions: config.chain_transitions,
            last_transition: None,
            last_drawable_bounds: None,
        }
    }

    /// Create a generator with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(GeneratorConfig::default())
    }

    /// Set the duration of transitions generated from now on.
    pub fn set_transition_duration(&mut self, duration_ms: u64) {
        self.transition_duration_ms = duration_ms;
    }

    /// Set the curve for transitions generated from now on.
    pub fn set_interpolator(&mut self, interpolator: impl Interpolator + 'static) {
        self.interpolator = Arc::new(interpolator);
    }

    pub fn set_chain_transitions(&mut self, chain: bool) {
        self.chain_transitions = chain;
    }

    pub fn transition_duration_ms(&self) -> u64 {
        self.transition_duration_ms
    }

    pub fn chain_transitions(&self) -> bool {
        self.chain_transitions
    }

    /// The most recently generated transition.
    pub fn last_transition(&self) -> Option<&Transition> {
        self.last_transition.as_ref()
    }

    /// Generate a random rect that fits inside `drawable_bounds` and has
    /// the aspect ratio of `viewport`.
    ///
    /// Its size lies between [`MIN_RECT_FACTOR`] and 100% of
    /// [`max_crop`] for the same inputs.
    pub fn generate_random_rect(&mut self, drawable_bounds: &Rect, viewport: &Rect) -> Rect {
        let max = max_crop(drawable_bounds, viewport);

        // Two decimals: 100 discrete sizes.
        let r = truncate(self.rng.gen::<f64>(), 2);
        let factor = MIN_RECT_FACTOR + (1.0 - MIN_RECT_FACTOR) * r;
        let width = factor * max.width();
        let height = factor * max.height();

        let width_slack = (drawable_bounds.width() - width).floor() as i64;
        let height_slack = (drawable_bounds.height() - height).floor() as i64;
        let left = if width_slack > 0 {
            self.rng.gen_range(0..width_slack)
        } else {
            0
        };
        let top = if height_slack > 0 {
            self.rng.gen_range(0..height_slack)
        } else {
            0
        };

        let left = drawable_bounds.left + left as f64;
        let top = drawable_bounds.top + top as f64;
        Rect::new(left, top, left + width, top + height)
    }

    fn source_rect(&mut self, drawable_bounds: &Rect, viewport: &Rect) -> Rect {
        if !self.chain_transitions {
            return self.generate_random_rect(drawable_bounds, viewport);
        }

        let previous = self.last_transition.as_ref().map(Transition::destiny_rect);
        match previous {
            Some(prev) => {
                let bounds_changed = self.last_drawable_bounds.as_ref() != Some(drawable_bounds);
                let ratio_changed = !same_aspect_ratio(&prev, viewport);
                if bounds_changed || ratio_changed {
                    tracing::debug!(
                        bounds_changed,
                        ratio_changed,
                        "Drawable or viewport changed, not chaining transition"
                    );
                    self.generate_random_rect(drawable_bounds, viewport)
                } else {
                    prev
                }
            }
            None => self.generate_random_rect(drawable_bounds, viewport),
        }
    }
}

impl TransitionGenerator for RandomTransitionGenerator {
    fn generate_next_transition(
        &mut self,
        drawable_bounds: &Rect,
        viewport: &Rect,
    ) -> KenBurnsResult<Transition> {
        let source = self.source_rect(drawable_bounds, viewport);
        let destiny = self.generate_random_rect(drawable_bounds, viewport);

        let transition = Transition::new(
            source,
            destiny,
            self.transition_duration_ms,
            Arc::clone(&self.interpolator),
        )?;

        tracing::debug!(
            source = %transition.source_rect(),
            destiny = %transition.destiny_rect(),
            duration_ms = transition.duration_ms(),
            "Generated transition"
        );

        self.last_transition = Some(transition.clone());
        self.last_drawable_bounds = Some(*drawable_bounds);
        Ok(transition)
    }
}

/// The largest rect with `viewport`'s aspect ratio that fits inside
/// `drawable_bounds`, anchored at the origin.
pub fn max_crop(drawable_bounds: &Rect, viewport: &Rect) -> Rect {
    if drawable_bounds.ratio() > viewport.ratio() {
        Rect::from_size(
            drawable_bounds.height() / viewport.height() * viewport.width(),
            drawable_bounds.height(),
        )
    } else {
        Rect::from_size(
            drawable_bounds.width(),
            drawable_bounds.width() / viewport.width() * viewport.height(),
        )
    }
}
