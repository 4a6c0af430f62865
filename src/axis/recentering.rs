//! Automatic return-to-center policy and its runtime state machine.

/// Policy for automatically returning an axis to its center value once
/// input has been idle long enough.
#[derive(Debug, Clone, PartialEq)]
pub struct Recentering {
    /// Whether recentering is active at all.
    pub enabled: bool,
    /// Seconds of idle time before recentering engages.
    pub wait: f32,
    /// Smoothing horizon for the move back to center, in seconds.
    /// Below the epsilon threshold the axis snaps straight to center.
    pub time: f32,
}

impl Recentering {
    /// Repair out-of-range parameters in place. Negative times are clamped
    /// to zero; never fails.
    pub fn validate(&mut self) {
        self.wait = self.wait.max(0.0);
        self.time = self.time.max(0.0);
    }
}

impl Default for Recentering {
    fn default() -> Self {
        Self {
            enabled: false,
            wait: 1.0,
            time: 2.0,
        }
    }
}

/// Where a recentering axis currently is in its engagement cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecenterPhase {
    /// No recentering in progress and no idle time accumulated.
    #[default]
    Idle,
    /// Accumulating idle time; the axis has not started moving yet.
    Waiting,
    /// Actively damping the value toward center.
    Recentering,
}

/// Per-axis recentering scratch state. Not part of the designer-facing
/// configuration; reset whenever recentering is cancelled.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecenterState {
    /// Current engagement phase.
    pub(crate) phase: RecenterPhase,
    /// Idle time accumulated while waiting, in seconds.
    pub(crate) elapsed: f32,
    /// Smooth-damp velocity carried between frames.
    pub(crate) velocity: f32,
    /// Set by an explicit trigger to skip the wait period.
    pub(crate) forced: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_clamps_negative_times() {
        let mut r = Recentering {
            enabled: true,
            wait: -1.0,
            time: -0.5,
        };
        r.validate();
        assert_eq!(r.wait, 0.0);
        assert_eq!(r.time, 0.0);
    }

    #[test]
    fn test_validate_is_idempotent() {
        let mut r = Recentering::default();
        let before = r.clone();
        r.validate();
        r.validate();
        assert_eq!(r, before);
    }

    #[test]
    fn test_default_phase_is_idle() {
        assert_eq!(RecenterPhase::default(), RecenterPhase::Idle);
    }
}
