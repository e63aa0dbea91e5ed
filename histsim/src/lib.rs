//! histsim - Histogram-based image similarity for Rust
//!
//! # Overview
//!
//! histsim compares images by the per-channel probability density of
//! their 8-bit intensities:
//!
//! - Histogram and PDF construction for grayscale and RGB pixel buffers
//! - Euclidean and chi-square distances between PDFs
//! - Channel policies that reduce per-channel distances to one score
//!
//! Decoding image files and ranking a corpus are left to the caller.
//!
//! # Example
//!
//! ```
//! use histsim::{DistanceHeuristic, Image};
//!
//! let a = Image::rgb("sky_01", 1, 1, vec![10, 20, 200]).unwrap();
//! let mut b = Image::rgb("sky_02", 1, 1, vec![10, 20, 200]).unwrap();
//! let d = b.compute_distance(a.pdf(), DistanceHeuristic::SquareChi).unwrap();
//! assert_eq!(d.len(), 3);
//! ```

// Re-export core types
pub use histsim_core::*;
