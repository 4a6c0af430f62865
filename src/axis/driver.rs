//! Stateless per-frame stepper that advances an axis from its control.

use crate::axis::control::AxisControl;
use crate::axis::core::Axis;
use crate::util::damping::{damp, EPSILON};

/// Advances an [`Axis`] from an [`AxisControl`] once per host frame.
///
/// The driver holds no state of its own: all momentum lives in the control
/// and all recentering scratch lives in the axis, so one driver can be
/// shared across any number of `(Axis, AxisControl)` pairs.
#[derive(Debug, Clone, Copy, Default)]
pub struct AxisDriver;

impl AxisDriver {
    /// Advance `axis.value` by `delta_time` seconds of input.
    ///
    /// The control's `input_value` is the target speed in axis units per
    /// second. The current speed approaches it exponentially with the
    /// acceleration time constant while speeding up and the deceleration
    /// constant while slowing down; a zero constant snaps. Non-wrapping
    /// axes additionally bleed off speed when the next step would land
    /// within a tenth of the span of a range end, easing into the bound
    /// instead of slamming against it.
    ///
    /// `delta_time` is trusted to be non-negative.
    pub fn process_input(
        &self,
        delta_time: f32,
        axis: &mut Axis,
        control: &mut AxisControl,
    ) {
        let target = control.input_value;
        let damp_time = if target.abs() < control.current_speed.abs() {
            control.decel_time
        } else {
            control.accel_time
        };
        control.current_speed +=
            damp(target - control.current_speed, damp_time, delta_time);

        let span = axis.range.y - axis.range.x;
        if !axis.wrap
            && control.decel_time > EPSILON
            && span > EPSILON
            && delta_time > EPSILON
            && control.current_speed.abs() > EPSILON
        {
            let v0 = axis.clamp_value(axis.value);
            let v1 = axis.clamp_value(v0 + control.current_speed * delta_time);
            let margin = if control.current_speed > 0.0 {
                axis.range.y - v1
            } else {
                v1 - axis.range.x
            };
            if margin < 0.1 * span {
                // Replace the speed with a damped approach to the clamped
                // landing spot so the value decelerates into the bound.
                control.current_speed =
                    damp(v1 - v0, control.decel_time, delta_time) / delta_time;
            }
        }

        axis.value =
            axis.clamp_value(axis.value + control.current_speed * delta_time);
    }

    /// Advance the axis recentering state machine. Equivalent to calling
    /// [`Axis::do_recentering`] directly; provided so a host can route all
    /// per-frame axis work through the driver.
    pub fn do_recentering(
        &self,
        delta_time: f32,
        cancel: bool,
        axis: &mut Axis,
    ) {
        axis.do_recentering(delta_time, cancel);
    }
}
