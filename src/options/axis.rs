//! Designer-facing axis configuration.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::axis::{Axis, AxisControl, Recentering};

/// Tunable parameters for one driven axis.
///
/// This is the serialized, designer-facing shape; [`to_axis`](Self::to_axis)
/// and [`to_control`](Self::to_control) build the validated runtime pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Axis", inline)]
#[serde(default)]
pub struct AxisOptions {
    /// Lower bound of the axis range.
    pub min: f32,
    /// Upper bound of the axis range.
    pub max: f32,
    /// Whether the range wraps around, identifying max with min.
    pub wrap: bool,
    /// Recentering target value. Clamped into the range on conversion.
    pub center: f32,
    /// Seconds to reach the target speed.
    #[schemars(title = "Acceleration Time", range(min = 0.0, max = 10.0), extend("step" = 0.05))]
    pub accel_time: f32,
    /// Seconds to come back down from the current speed.
    #[schemars(title = "Deceleration Time", range(min = 0.0, max = 10.0), extend("step" = 0.05))]
    pub decel_time: f32,
    /// Automatic return-to-center parameters.
    pub recentering: RecenteringOptions,
}

impl Default for AxisOptions {
    fn default() -> Self {
        Self {
            min: -180.0,
            max: 180.0,
            wrap: false,
            center: 0.0,
            accel_time: 0.2,
            decel_time: 0.2,
            recentering: RecenteringOptions::default(),
        }
    }
}

impl AxisOptions {
    /// Build a validated runtime [`Axis`] positioned at its center.
    #[must_use]
    pub fn to_axis(&self) -> Axis {
        let mut axis = Axis::new(self.min, self.max);
        axis.wrap = self.wrap;
        axis.center = self.center;
        axis.value = self.center;
        axis.recentering = self.recentering.to_recentering();
        axis.validate();
        axis
    }

    /// Build a validated runtime [`AxisControl`] at rest.
    #[must_use]
    pub fn to_control(&self) -> AxisControl {
        AxisControl::new(self.accel_time, self.decel_time)
    }
}

/// Tunable return-to-center parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Recentering", inline)]
#[serde(default)]
pub struct RecenteringOptions {
    /// Whether recentering is active at all.
    pub enabled: bool,
    /// Seconds of idle input before recentering engages.
    #[schemars(title = "Wait Time", range(min = 0.0, max = 30.0), extend("step" = 0.1))]
    pub wait: f32,
    /// Smoothing horizon for the move back to center, in seconds.
    #[schemars(title = "Recentering Time", range(min = 0.0, max = 30.0), extend("step" = 0.1))]
    pub time: f32,
}

impl Default for RecenteringOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            wait: 1.0,
            time: 2.0,
        }
    }
}

impl RecenteringOptions {
    /// Build a validated runtime [`Recentering`] policy.
    #[must_use]
    pub fn to_recentering(&self) -> Recentering {
        let mut recentering = Recentering {
            enabled: self.enabled,
            wait: self.wait,
            time: self.time,
        };
        recentering.validate();
        recentering
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_axis_repairs_inverted_range() {
        let opts = AxisOptions {
            min: 50.0,
            max: -50.0,
            center: 10.0,
            ..Default::default()
        };
        let axis = opts.to_axis();
        assert_eq!(axis.range.y, 50.0);
        assert_eq!(axis.center, 50.0);
    }

    #[test]
    fn test_to_axis_starts_at_center() {
        let opts = AxisOptions {
            min: 1.0,
            max: 10.0,
            center: 3.0,
            ..Default::default()
        };
        let axis = opts.to_axis();
        assert_eq!(axis.value, 3.0);
    }

    #[test]
    fn test_to_control_clamps_negative_times() {
        let opts = AxisOptions {
            accel_time: -1.0,
            decel_time: 0.5,
            ..Default::default()
        };
        let control = opts.to_control();
        assert_eq!(control.accel_time, 0.0);
        assert_eq!(control.decel_time, 0.5);
    }

    #[test]
    fn test_recentering_conversion() {
        let opts = RecenteringOptions {
            enabled: true,
            wait: -2.0,
            time: 3.0,
        };
        let r = opts.to_recentering();
        assert!(r.enabled);
        assert_eq!(r.wait, 0.0);
        assert_eq!(r.time, 3.0);
    }
}
