//! Error types for histsim-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Every variant names the precondition that the caller violated, so a
//! failed comparison never degrades into a silently wrong-shaped result.

use crate::channel::Channel;
use thiserror::Error;

/// histsim error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Pixel buffer has no elements
    #[error("pixel buffer is empty")]
    EmptyBuffer,

    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Raw data length does not match width x height x depth
    #[error("buffer size mismatch: expected {expected} elements, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// A channel required by the operation is absent
    #[error("missing channel: {0}")]
    MissingChannel(Channel),

    /// Two per-channel mappings carry different channel sets
    #[error("channel mismatch: expected {expected:?}, got {actual:?}")]
    ChannelMismatch {
        expected: Vec<Channel>,
        actual: Vec<Channel>,
    },

    /// Per-channel arrays of different lengths
    #[error("shape mismatch on channel {channel}: {expected} bins vs {actual} bins")]
    ShapeMismatch {
        channel: Channel,
        expected: usize,
        actual: usize,
    },

    /// Unrecognized distance heuristic name
    #[error("unknown distance heuristic: {0}")]
    UnknownHeuristic(String),

    /// Unrecognized channel heuristic value
    #[error("unknown channel heuristic: {0}")]
    UnknownChannelHeuristic(i32),

    /// A score was requested before any distance was computed
    #[error("no distances computed yet for image {0}")]
    NoDistances(String),

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for histsim operations
pub type Result<T> = std::result::Result<T, Error>;
