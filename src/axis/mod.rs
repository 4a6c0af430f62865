//! Input-driven axis state: bounded value, smoothing driver, recentering.

/// Per-frame input parameters and time constants.
pub mod control;
/// The bounded axis value type.
pub mod core;
/// Stateless per-frame stepper.
pub mod driver;
/// Return-to-center policy and state machine.
pub mod recentering;

pub use control::AxisControl;
pub use core::Axis;
pub use driver::AxisDriver;
pub use recentering::{RecenterPhase, Recentering};
