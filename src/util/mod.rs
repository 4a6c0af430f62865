//! Numeric helpers shared by the axis core.

/// Exponential damping and critically-damped smoothing primitives.
pub mod damping;
