//! histsim Core - Histogram-based image similarity primitives
//!
//! This crate provides the building blocks for ranking images by the
//! similarity of their intensity distributions:
//!
//! - [`PixelBuffer`] - Raw 8-bit grayscale or interleaved RGB samples
//! - [`Channel`] / [`ChannelLayout`] / [`ChannelMap`] - Named channels and
//!   ordered per-channel mappings
//! - [`Histogram`] / [`Pdf`] - 256-bin counts and their normalized form
//! - [`DistanceHeuristic`] - Euclidean and chi-square PDF distances
//! - [`ChannelHeuristic`] - Reduction of per-channel distances to a score
//! - [`Image`] - Pixel data with cached histogram, PDF and last distances
//!
//! # Example
//!
//! ```
//! use histsim_core::{ChannelHeuristic, DistanceHeuristic, Image};
//!
//! let query = Image::gray("query_0", 2, 2, vec![0; 4]).unwrap();
//! let mut reference = Image::gray("ref_1", 2, 2, vec![255; 4]).unwrap();
//!
//! reference
//!     .compute_distance(query.pdf(), DistanceHeuristic::EuclideanDistance)
//!     .unwrap();
//! let score = reference.score(ChannelHeuristic::Gray).unwrap();
//! assert_eq!(score, 2.0);
//! ```

pub mod buffer;
pub mod channel;
pub mod error;
pub mod heuristic;
pub mod histogram;
pub mod image;
pub mod selector;

pub use buffer::PixelBuffer;
pub use channel::{Channel, ChannelLayout, ChannelMap};
pub use error::{Error, Result};
pub use heuristic::{
    CHI_SQUARE_EPSILON, DistanceHeuristic, DistanceSet, euclidean_distance, square_chi,
};
pub use histogram::{
    Histogram, NUM_BINS, Pdf, compute_histogram, compute_pdf, histogram_totals,
    normalize_histogram, pdf_totals,
};
pub use image::Image;
pub use selector::{ChannelHeuristic, select_distance};
