//! Frame driver for a Ken Burns animated view.
//!
//! Holds the per-view playback state a host UI would otherwise keep:
//! the current transition, accumulated elapsed time, the drawable and
//! viewport bounds, and whether playback is paused. The host calls
//! [`KenBurnsDriver::on_frame`] with a monotonic timestamp each frame and
//! maps the returned crop rect to its own display transform.

use std::fmt;

use kenburns_common::error::KenBurnsResult;
use kenburns_geometry::rect::Rect;

use crate::generator::TransitionGenerator;
use crate::transition::Transition;

/// Delay between a pair of frames at 60 FPS.
pub const FRAME_DELAY_MS: u64 = 1000 / 60;

/// Whether the driver advances on frame callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Running,
    Paused,
}

/// Receives notifications when a transition starts or ends.
pub trait TransitionListener {
    fn on_transition_start(&mut self, transition: &Transition);
    fn on_transition_end(&mut self, transition: &Transition);
}

/// Drives transitions from a [`TransitionGenerator`] frame by frame.
pub struct KenBurnsDriver<G: TransitionGenerator> {
    generator: G,
    listener: Option<Box<dyn TransitionListener>>,
    current: Option<Transition>,
    drawable: Option<Rect>,
    viewport: Option<Rect>,
    /// Animation progress of the current transition.
    elapsed_ms: u64,
    /// Timestamp of the last frame; `None` after a pause so that paused
    /// time is not counted.
    last_frame_ms: Option<u64>,
    state: PlaybackState,
}

impl<G: TransitionGenerator> KenBurnsDriver<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            listener: None,
            current: None,
            drawable: None,
            viewport: None,
            elapsed_ms: 0,
            last_frame_ms: None,
            state: PlaybackState::Running,
        }
    }

    pub fn set_listener(&mut self, listener: impl TransitionListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Set the bounds of the image being animated and restart.
    pub fn set_drawable_bounds(&mut self, bounds: Rect) -> KenBurnsResult<()> {
        self.drawable = Some(bounds);
        self.restart()
    }

    /// Set the bounds of the display area and restart.
    pub fn set_viewport(&mut self, viewport: Rect) -> KenBurnsResult<()> {
        self.viewport = Some(viewport);
        self.restart()
    }

    /// Stop advancing on frame callbacks.
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Running {
            tracing::debug!(elapsed_ms = self.elapsed_ms, "Ken Burns playback paused");
        }
        self.state = PlaybackState::Paused;
    }

    /// Continue advancing; the time spent paused is skipped.
    pub fn resume(&mut self) {
        if self.state == PlaybackState::Paused {
            tracing::debug!(elapsed_ms = self.elapsed_ms, "Ken Burns playback resumed");
        }
        self.state = PlaybackState::Running;
        self.last_frame_ms = None;
    }

    /// Visible views run, hidden ones pause.
    pub fn set_visible(&mut self, visible: bool) {
        if visible {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Drop the current transition and start a new one if both bounds are
    /// known.
    pub fn restart(&mut self) -> KenBurnsResult<()> {
        self.current = None;
        self.elapsed_ms = 0;
        if self.bounds().is_some() {
            tracing::debug!("Restarting Ken Burns transitions");
            self.start_new_transition()?;
        }
        Ok(())
    }

    /// Advance to `now_ms` and return the crop rect for this frame.
    ///
    /// Returns `None` while paused or before non-empty drawable and
    /// viewport bounds are known.
    pub fn on_frame(&mut self, now_ms: u64) -> KenBurnsResult<Option<Rect>> {
        if self.state == PlaybackState::Paused {
            return Ok(None);
        }
        if self.bounds().is_none() {
            self.last_frame_ms = Some(now_ms);
            return Ok(None);
        }
        if self.current.is_none() {
            self.start_new_transition()?;
        }

        let delta = self
            .last_frame_ms
            .map(|last| now_ms.saturating_sub(last))
            .unwrap_or(0);
        self.elapsed_ms += delta;
        self.last_frame_ms = Some(now_ms);

        let Some(current) = self.current.as_ref() else {
            return Ok(None);
        };
        let rect = current.interpolated_rect(self.elapsed_ms);

        if current.is_finished(self.elapsed_ms) {
            self.fire_transition_end();
            self.start_new_transition()?;
        }

        Ok(Some(rect))
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn current_transition(&self) -> Option<&Transition> {
        self.current.as_ref()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn generator_mut(&mut self) -> &mut G {
        &mut self.generator
    }

    fn bounds(&self) -> Option<(Rect, Rect)> {
        match (self.drawable, self.viewport) {
            (Some(d), Some(v)) if !d.is_empty() && !v.is_empty() => Some((d, v)),
            _ => None,
        }
    }

    fn start_new_transition(&mut self) -> KenBurnsResult<()> {
        let Some((drawable, viewport)) = self.bounds() else {
            return Ok(());
        };
        let transition = self
            .generator
            .generate_next_transition(&drawable, &viewport)?;
        self.elapsed_ms = 0;
        if let Some(listener) = self.listener.as_mut() {
            listener.on_transition_start(&transition);
        }
        self.current = Some(transition);
        Ok(())
    }

    fn fire_transition_end(&mut self) {
        if let (Some(listener), Some(current)) = (self.listener.as_mut(), self.current.as_ref()) {
            listener.on_transition_end(current);
        }
    }
}

impl<G: TransitionGenerator + fmt::Debug> fmt::Debug for KenBurnsDriver<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KenBurnsDriver")
            .field("generator", &self.generator)
            .field("has_listener", &self.listener.is_some())
            .field("current", &self.current)
            .field("drawable", &self.drawable)
            .field("viewport", &self.viewport)
            .field("elapsed_ms", &self.elapsed_ms)
            .field("state", &self.state)
            .finish()
    }
}
