//! histsim-test - Regression test framework for histsim
//!
//! Provides [`RegParams`], a check accumulator in the style of a
//! regression harness, and deterministic image generators shared by the
//! integration tests.
//!
//! # Usage
//!
//! ```
//! use histsim_test::{RegParams, generators};
//! use histsim_core::{Channel, DistanceHeuristic};
//!
//! let a = generators::uniform_gray("flat_a", 4, 4, 10).unwrap();
//! let b = generators::uniform_gray("flat_b", 4, 4, 10).unwrap();
//! let d = a.distance_to(b.pdf(), DistanceHeuristic::EuclideanDistance).unwrap();
//!
//! let mut rp = RegParams::new("usage");
//! rp.compare_values(0.0, *d.get(Channel::Gray).unwrap(), 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display"

pub mod generators;
mod params;

pub use params::{RegParams, RegTestMode};
