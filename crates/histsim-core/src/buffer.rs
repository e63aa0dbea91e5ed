//! PixelBuffer - raw 8-bit image content
//!
//! # Pixel layout
//!
//! - Samples are `u8` intensities in `[0, 255]`
//! - Rows are stored top to bottom, pixels left to right
//! - Color samples are interleaved per pixel (`r, g, b, r, g, b, ...`),
//!   i.e. shape (H, W, 3); depth-slice `k` holds channel `k` of the layout
//!
//! A buffer is immutable once built and never empty.

use crate::channel::{Channel, ChannelLayout};
use crate::error::{Error, Result};

/// Dense array of 8-bit intensity samples
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    layout: ChannelLayout,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer from flat, row-major samples.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyBuffer`] if `data` is empty
    /// - [`Error::InvalidDimension`] if either dimension is 0
    /// - [`Error::BufferSizeMismatch`] if `data.len() != width * height * depth`
    pub fn new(width: u32, height: u32, layout: ChannelLayout, data: Vec<u8>) -> Result<Self> {
        if data.is_empty() {
            return Err(Error::EmptyBuffer);
        }
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let expected = width as usize * height as usize * layout.depth();
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            layout,
            data,
        })
    }

    /// Create a grayscale buffer of shape (height, width).
    pub fn gray(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        Self::new(width, height, ChannelLayout::Gray, data)
    }

    /// Create a color buffer of shape (height, width, 3).
    pub fn rgb(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        Self::new(width, height, ChannelLayout::Rgb, data)
    }

    /// Create a grayscale buffer from nested rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyBuffer`] for no rows or empty rows, and
    /// [`Error::BufferSizeMismatch`] if rows have unequal lengths.
    pub fn from_gray_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let data = flatten_rows(rows, width)?;
        Self::gray(width as u32, rows.len() as u32, data)
    }

    /// Create a color buffer from nested rows of `[r, g, b]` pixels.
    pub fn from_rgb_rows<R: AsRef<[[u8; 3]]>>(rows: &[R]) -> Result<Self> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let pixels = flatten_rows(rows, width)?;
        let data = pixels.into_iter().flatten().collect();
        Self::rgb(width as u32, rows.len() as u32, data)
    }

    /// Get the width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the channel layout
    #[inline]
    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    /// Number of pixels in one channel (width x height)
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Total number of samples across all channels (width x height x depth)
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`: construction rejects empty buffers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the raw samples
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Get the sample of `channel` at `(x, y)`.
    pub fn sample(&self, x: u32, y: u32, channel: Channel) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = self.layout.offset_of(channel)?;
        let depth = self.layout.depth();
        let index = (y as usize * self.width as usize + x as usize) * depth + offset;
        self.data.get(index).copied()
    }

    /// Iterate over every sample of one depth-slice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingChannel`] if the layout lacks `channel`.
    pub fn channel_samples(&self, channel: Channel) -> Result<impl Iterator<Item = u8> + '_> {
        let offset = self
            .layout
            .offset_of(channel)
            .ok_or(Error::MissingChannel(channel))?;
        Ok(self
            .data
            .iter()
            .skip(offset)
            .step_by(self.layout.depth())
            .copied())
    }
}

/// Concatenate equal-length rows into one vector.
fn flatten_rows<T: Copy, R: AsRef<[T]>>(rows: &[R], width: usize) -> Result<Vec<T>> {
    if width == 0 {
        return Err(Error::EmptyBuffer);
    }
    let mut data = Vec::with_capacity(width * rows.len());
    for row in rows {
        let row = row.as_ref();
        if row.len() != width {
            return Err(Error::BufferSizeMismatch {
                expected: width,
                actual: row.len(),
            });
        }
        data.extend_from_slice(row);
    }
    Ok(data)
}
