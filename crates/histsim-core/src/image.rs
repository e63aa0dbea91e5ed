//! Image - pixel data with its cached distributions
//!
//! An [`Image`] owns a [`PixelBuffer`] together with the histogram and
//! PDF derived from it. Both are computed once at construction and never
//! change. Comparisons against another image's PDF produce a
//! [`DistanceSet`]; [`Image::compute_distance`] also keeps the latest one.
//!
//! # Identifiers
//!
//! Identifiers follow `<class_name>_<image_name>[_...]`, typically a file
//! stem such as `cat_0042`. The labels are for callers grouping images;
//! the distance math ignores them.
//!
//! # Argument order
//!
//! Comparisons always evaluate `heuristic(other_pdf, self.pdf)`, for
//! grayscale and color layouts alike.

use crate::buffer::PixelBuffer;
use crate::channel::ChannelLayout;
use crate::error::{Error, Result};
use crate::heuristic::{DistanceHeuristic, DistanceSet};
use crate::histogram::{Histogram, Pdf, compute_histogram, compute_pdf};
use crate::selector::ChannelHeuristic;
use tracing::debug;

/// Image entity used for similarity ranking
#[derive(Debug, Clone)]
pub struct Image {
    identifier: String,
    buffer: PixelBuffer,
    histogram: Histogram,
    pdf: Pdf,
    distances: DistanceSet,
}

impl Image {
    /// Create an image and compute its histogram and PDF.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyBuffer`] if the
    /// buffer has no samples.
    ///
    /// # Example
    ///
    /// ```
    /// use histsim_core::{Image, PixelBuffer};
    ///
    /// let buf = PixelBuffer::gray(2, 2, vec![0, 0, 255, 255]).unwrap();
    /// let img = Image::new("dark_001", buf).unwrap();
    /// assert_eq!(img.class_name(), "dark");
    /// assert_eq!(img.image_name(), Some("001"));
    /// ```
    pub fn new(identifier: impl Into<String>, buffer: PixelBuffer) -> Result<Self> {
        let identifier = identifier.into();
        let histogram = compute_histogram(&buffer);
        let pdf = compute_pdf(&histogram, &buffer)?;

        debug!(
            identifier = %identifier,
            layout = ?buffer.layout(),
            width = buffer.width(),
            height = buffer.height(),
            "image created"
        );

        Ok(Self {
            identifier,
            buffer,
            histogram,
            pdf,
            distances: DistanceSet::new(),
        })
    }

    /// Create a grayscale image from flat samples of shape (height, width).
    pub fn gray(
        identifier: impl Into<String>,
        width: u32,
        height: u32,
        data: Vec<u8>,
    ) -> Result<Self> {
        Self::new(identifier, PixelBuffer::gray(width, height, data)?)
    }

    /// Create a color image from interleaved samples of shape (height, width, 3).
    pub fn rgb(
        identifier: impl Into<String>,
        width: u32,
        height: u32,
        data: Vec<u8>,
    ) -> Result<Self> {
        Self::new(identifier, PixelBuffer::rgb(width, height, data)?)
    }

    /// Get the full identifier
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Label before the first `_`, or the whole identifier if there is none.
    pub fn class_name(&self) -> &str {
        self.identifier
            .split_once('_')
            .map_or(self.identifier.as_str(), |(class, _)| class)
    }

    /// Label after the first `_`, up to the next `_`.
    ///
    /// Returns `None` if the identifier has no `_`.
    pub fn image_name(&self) -> Option<&str> {
        self.identifier.split('_').nth(1)
    }

    /// Get the pixel buffer
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Get the channel layout
    pub fn layout(&self) -> ChannelLayout {
        self.buffer.layout()
    }

    /// Get the per-channel histogram
    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    /// Get the per-channel PDF
    pub fn pdf(&self) -> &Pdf {
        &self.pdf
    }

    /// Distance set from the latest [`compute_distance`](Self::compute_distance)
    /// call; empty before the first one.
    pub fn distances(&self) -> &DistanceSet {
        &self.distances
    }

    /// Compare `other_pdf` against this image without touching the cache.
    ///
    /// # Errors
    ///
    /// Returns a channel or shape mismatch error if `other_pdf` does not
    /// match this image's layout.
    pub fn distance_to(
        &self,
        other_pdf: &Pdf,
        heuristic: DistanceHeuristic,
    ) -> Result<DistanceSet> {
        heuristic.compute(other_pdf, &self.pdf)
    }

    /// Compare `other_pdf` against this image and cache the result.
    ///
    /// The previous distance set is replaced. On error the cache is left
    /// unchanged.
    pub fn compute_distance(
        &mut self,
        other_pdf: &Pdf,
        heuristic: DistanceHeuristic,
    ) -> Result<&DistanceSet> {
        let distances = self.distance_to(other_pdf, heuristic)?;
        debug!(
            identifier = %self.identifier,
            %heuristic,
            channels = distances.len(),
            "distance computed"
        );
        self.distances = distances;
        Ok(&self.distances)
    }

    /// Reduce the cached distance set with `channel_heuristic`.
    ///
    /// # Errors
    ///
    /// - [`Error::NoDistances`] if no comparison has been made yet
    /// - [`Error::MissingChannel`] if the policy does not fit the layout
    pub fn score(&self, channel_heuristic: ChannelHeuristic) -> Result<f64> {
        if self.distances.is_empty() {
            return Err(Error::NoDistances(self.identifier.clone()));
        }
        channel_heuristic.select(&self.distances)
    }
}
