//! The bounded axis value type.

use glam::Vec2;

use crate::axis::recentering::{RecenterPhase, RecenterState, Recentering};
use crate::util::damping::{smooth_damp, EPSILON};

/// Bounded scalar value driven by per-frame input, semantically an angle or
/// offset.
///
/// The value always lies within `range` after any operation: in
/// `[min, max]` for clamped axes, in `[min, max)` for wrapping axes, where
/// crossing `max` re-enters at `min` and vice versa.
///
/// Hosts construct an axis with a designer-chosen range and center and call
/// [`validate`](Self::validate) after editing any field; the invariants are
/// repaired silently, never rejected.
#[derive(Debug, Clone)]
pub struct Axis {
    /// Current position within the range.
    pub value: f32,
    /// Range bounds (x = min, y = max).
    pub range: Vec2,
    /// When true, the range is a seam: exceeding max re-enters at min and
    /// distances crossing the seam take the shorter of the two paths.
    pub wrap: bool,
    /// Target value for recentering. Must lie within the range.
    pub center: f32,
    /// Automatic return-to-center policy.
    pub recentering: Recentering,
    /// Runtime recentering scratch (wait timer, damp velocity).
    pub(crate) state: RecenterState,
}

impl Axis {
    /// Create an axis spanning `[min, max]` with value and center at 0,
    /// wrap off, and recentering disabled.
    #[must_use]
    pub fn new(min: f32, max: f32) -> Self {
        let mut axis = Self {
            value: 0.0,
            range: Vec2::new(min, max),
            wrap: false,
            center: 0.0,
            recentering: Recentering::default(),
            state: RecenterState::default(),
        };
        axis.validate();
        axis
    }

    /// Repair the axis invariants in place: an inverted range is collapsed
    /// (`max` raised to `min`), then center and value are brought back into
    /// range. Safe to call repeatedly; never fails.
    pub fn validate(&mut self) {
        self.range.y = self.range.y.max(self.range.x);
        self.center = self.clamp_value(self.center);
        self.value = self.clamp_value(self.value);
        self.recentering.validate();
    }

    /// Map an arbitrary value into the range: modular arithmetic over the
    /// span for wrapping axes (result in `[min, max)`), plain clamping
    /// otherwise (result in `[min, max]`).
    #[must_use]
    pub fn clamp_value(&self, v: f32) -> f32 {
        let span = self.range.y - self.range.x;
        if !self.wrap || span < EPSILON {
            // Written out so a not-yet-validated inverted range degrades
            // instead of panicking.
            return v.max(self.range.x).min(self.range.y);
        }
        self.range.x + (v - self.range.x).rem_euclid(span)
    }

    /// Signed distance from the current value to `target`. For wrapping
    /// axes this is the shorter of the direct path and the path crossing
    /// the seam.
    #[must_use]
    pub fn shortest_distance_to(&self, target: f32) -> f32 {
        if self.wrap {
            let span = self.range.y - self.range.x;
            if span > EPSILON {
                let d = (target - self.value).rem_euclid(span);
                return if d > span * 0.5 { d - span } else { d };
            }
        }
        target - self.value
    }

    /// Current value mapped onto `[0, 1]` across the range. A degenerate
    /// (zero-span) range reports 0.
    #[must_use]
    pub fn normalized(&self) -> f32 {
        let span = self.range.y - self.range.x;
        if span < EPSILON {
            return 0.0;
        }
        (self.clamp_value(self.value) - self.range.x) / span
    }

    /// Advance the recentering state machine by `delta_time` seconds.
    ///
    /// `cancel` aborts any recentering in progress and resets the wait
    /// timer without touching the value; hosts pass `true` whenever input
    /// is active. Otherwise idle time accumulates, and once it reaches
    /// [`Recentering::wait`] the value is damped toward `center` along the
    /// shortest arc. The remaining distance shrinks on every call; exact
    /// arrival is not guaranteed within floating-point precision.
    ///
    /// No-op while [`Recentering::enabled`] is false.
    pub fn do_recentering(&mut self, delta_time: f32, cancel: bool) {
        if cancel {
            self.cancel_recentering();
            return;
        }
        if !self.recentering.enabled {
            return;
        }

        if self.state.phase == RecenterPhase::Idle {
            self.state.phase = RecenterPhase::Waiting;
            self.state.elapsed = 0.0;
            log::trace!("axis recentering: idle -> waiting");
        }
        if self.state.phase == RecenterPhase::Waiting {
            self.state.elapsed += delta_time;
            if !self.state.forced && self.state.elapsed < self.recentering.wait {
                return;
            }
            self.state.phase = RecenterPhase::Recentering;
            self.state.velocity = 0.0;
            log::trace!("axis recentering: waiting -> recentering");
        }

        let center = self.clamp_value(self.center);
        let delta = self.shortest_distance_to(center);
        if delta.abs() < EPSILON || self.recentering.time < EPSILON {
            self.value = center;
            self.state.velocity = 0.0;
            return;
        }

        // Damp toward the unwrapped target so wrapping axes take the
        // shorter arc; clamp_value folds the result back into range.
        let target = self.value + delta;
        let v = smooth_damp(
            self.value,
            target,
            &mut self.state.velocity,
            self.recentering.time * 0.5,
            delta_time,
        );
        self.value = self.clamp_value(v);
    }

    /// Skip the wait period: the next [`do_recentering`](Self::do_recentering)
    /// call engages immediately (recentering must still be enabled).
    pub fn trigger_recentering(&mut self) {
        self.state.forced = true;
    }

    /// Abort any recentering in progress and reset the wait timer. Calling
    /// this while idle is a no-op.
    pub fn cancel_recentering(&mut self) {
        if self.state.phase != RecenterPhase::Idle {
            log::trace!("axis recentering: {:?} -> idle", self.state.phase);
        }
        self.state = RecenterState::default();
    }

    /// Where this axis currently is in its recentering cycle.
    #[must_use]
    pub fn recenter_phase(&self) -> RecenterPhase {
        self.state.phase
    }
}

impl Default for Axis {
    fn default() -> Self {
        Self::new(-180.0, 180.0)
    }
}
