//! Per-frame input parameters for a driven axis.

/// Raw input and smoothing time constants for one axis.
///
/// One control instance drives exactly one [`Axis`](crate::axis::Axis) and
/// persists across frames; the host writes `input_value` every frame and the
/// driver carries momentum in `current_speed`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisControl {
    /// Signed raw input for the current frame. This is the target speed in
    /// axis units per second; the host clamps upstream if needed.
    pub input_value: f32,
    /// Seconds to reach the target speed. 0 snaps immediately.
    pub accel_time: f32,
    /// Seconds to come back down from the current speed. 0 snaps to zero.
    pub decel_time: f32,
    /// Momentum carried between frames. Managed by the driver; hosts should
    /// treat it as read-only.
    pub current_speed: f32,
}

impl AxisControl {
    /// Create a control at rest with the given time constants.
    #[must_use]
    pub fn new(accel_time: f32, decel_time: f32) -> Self {
        let mut control = Self {
            input_value: 0.0,
            accel_time,
            decel_time,
            current_speed: 0.0,
        };
        control.validate();
        control
    }

    /// Repair out-of-range parameters in place. Negative time constants are
    /// clamped to zero; never fails.
    pub fn validate(&mut self) {
        self.accel_time = self.accel_time.max(0.0);
        self.decel_time = self.decel_time.max(0.0);
    }
}
