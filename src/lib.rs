// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Frame-based input axis smoothing, wrapping, and recentering.
//!
//! Inax converts raw per-frame input into a bounded, accelerated and
//! decelerated, optionally wrapping, optionally recentering scalar axis
//! value — the numeric core of an orbital camera rig or any other
//! input-driven scalar control.
//!
//! # Key entry points
//!
//! - [`axis::Axis`] - the bounded scalar state
//! - [`axis::AxisControl`] - per-frame input and time constants
//! - [`axis::AxisDriver`] - the stateless per-frame stepper
//! - [`options::Options`] - TOML-tunable axis configuration
//!
//! # Frame loop
//!
//! The host samples input once per frame, writes it into the control, and
//! steps the axis. When input is idle it hands the frame to recentering:
//!
//! ```
//! use inax::axis::{Axis, AxisControl, AxisDriver};
//!
//! let mut axis = Axis::new(-180.0, 180.0);
//! axis.wrap = true;
//! let mut control = AxisControl::new(0.2, 0.2);
//! let driver = AxisDriver;
//!
//! control.input_value = 90.0; // degrees per second
//! for _ in 0..60 {
//!     driver.process_input(1.0 / 60.0, &mut axis, &mut control);
//!     axis.do_recentering(1.0 / 60.0, control.input_value != 0.0);
//! }
//! assert!(axis.value > 0.0);
//! ```
//!
//! Each `(Axis, AxisControl)` pair is independent and the driver holds no
//! state of its own, so any number of axes can be stepped per frame.

pub mod axis;
pub mod error;
pub mod options;
pub mod util;
