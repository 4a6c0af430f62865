//! Exponential damping primitives for per-frame smoothing.
//!
//! Both functions are frame-rate aware: the amount of smoothing applied in a
//! step depends only on the elapsed time, so variable frame times produce the
//! same trajectory.

/// Threshold below which times and distances are treated as zero.
pub const EPSILON: f32 = 0.0001;

/// Residual fraction considered negligible: after `damp_time` seconds the
/// remaining distance to the target is 1% of the initial distance.
const NEGLIGIBLE_RESIDUAL: f32 = 0.01;

/// ln(`NEGLIGIBLE_RESIDUAL`), precomputed.
const LOG_NEGLIGIBLE_RESIDUAL: f32 = -4.605_170_2;

/// Portion of `initial` to travel this step so that the remainder decays
/// exponentially, reaching [`NEGLIGIBLE_RESIDUAL`] after `damp_time` seconds.
///
/// A `damp_time` below [`EPSILON`] snaps: the full `initial` amount is
/// returned. A `delta_time` below [`EPSILON`] returns 0 (no time has passed,
/// nothing moves).
#[must_use]
pub fn damp(initial: f32, damp_time: f32, delta_time: f32) -> f32 {
    if damp_time < EPSILON || initial.abs() < EPSILON {
        return initial;
    }
    if delta_time < EPSILON {
        return 0.0;
    }
    initial * (1.0 - (LOG_NEGLIGIBLE_RESIDUAL * delta_time / damp_time).exp())
}

/// Move `current` toward `target` like a critically damped spring.
///
/// `velocity` carries momentum between calls and must be zeroed when the
/// motion is restarted. `smooth_time` is roughly the time to cover most of
/// the distance from rest. The result never overshoots `target`.
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    delta_time: f32,
) -> f32 {
    if delta_time < EPSILON {
        return current;
    }
    let smooth_time = smooth_time.max(EPSILON);
    let omega = 2.0 / smooth_time;

    // Stable Pade-style approximation of exp(-omega * dt)
    let x = omega * delta_time;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * delta_time;
    *velocity = (*velocity - omega * temp) * decay;
    let output = target + (change + temp) * decay;

    // Clamp at the target if the spring carried us past it
    if (target - current > 0.0) == (output > target) {
        *velocity = 0.0;
        return target;
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_damp_time_snaps() {
        assert_eq!(damp(5.0, 0.0, 0.1), 5.0);
        assert_eq!(damp(-5.0, 0.0, 0.1), -5.0);
    }

    #[test]
    fn test_zero_delta_time_holds() {
        assert_eq!(damp(5.0, 1.0, 0.0), 0.0);
    }

    #[test]
    fn test_residual_after_damp_time() {
        // After exactly damp_time seconds, 1% of the distance remains.
        let step = damp(1.0, 0.5, 0.5);
        assert!((step - 0.99).abs() < 1e-5);
    }

    #[test]
    fn test_damp_is_frame_rate_invariant() {
        // Two half-steps cover the same ground as one full step.
        let full = damp(1.0, 0.5, 0.2);
        let first = damp(1.0, 0.5, 0.1);
        let second = damp(1.0 - first, 0.5, 0.1);
        assert!((full - (first + second)).abs() < 1e-5);
    }

    #[test]
    fn test_smooth_damp_converges_monotonically() {
        let mut value = 50.0;
        let mut velocity = 0.0;
        let mut distance = value;
        for _ in 0..100 {
            value = smooth_damp(value, 0.0, &mut velocity, 1.0, 0.1);
            let d = value.abs();
            assert!(d < distance, "distance must shrink every step");
            distance = d;
            if d < 0.001 {
                break;
            }
        }
        assert!(distance < 0.001);
    }

    #[test]
    fn test_smooth_damp_never_overshoots() {
        let mut value = 10.0;
        let mut velocity = 0.0;
        for _ in 0..200 {
            value = smooth_damp(value, 0.0, &mut velocity, 0.05, 0.1);
            assert!(value >= 0.0);
        }
    }

    #[test]
    fn test_smooth_damp_zero_delta_time_holds() {
        let mut velocity = 3.0;
        assert_eq!(smooth_damp(10.0, 0.0, &mut velocity, 1.0, 0.0), 10.0);
        assert_eq!(velocity, 3.0);
    }

    #[test]
    fn test_smooth_damp_works_in_both_directions() {
        let mut velocity = 0.0;
        let up = smooth_damp(-10.0, 0.0, &mut velocity, 1.0, 0.1);
        assert!(up > -10.0 && up < 0.0);

        velocity = 0.0;
        let down = smooth_damp(10.0, 0.0, &mut velocity, 1.0, 0.1);
        assert!(down < 10.0 && down > 0.0);
    }
}
