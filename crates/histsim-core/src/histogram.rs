//! Histogram and PDF generation
//!
//! Functions to compute per-channel intensity distributions from a
//! [`PixelBuffer`].
//!
//! # Normalization
//!
//! The PDF divides every bin by the total sample count of the buffer
//! ([`PixelBuffer::len`]), not by the per-channel pixel count. For a
//! grayscale buffer the two agree and the PDF sums to 1. For a color
//! buffer the divisor is `3 * width * height`, so each of the red, green
//! and blue PDFs sums to 1/3. Distance magnitudes for color images
//! depend on this scale; do not switch to per-channel normalization
//! without updating every stored reference distance.

use crate::buffer::PixelBuffer;
use crate::channel::ChannelMap;
use crate::error::{Error, Result};

/// Number of intensity levels in an 8-bit channel
pub const NUM_BINS: usize = 256;

/// Per-channel pixel counts, `NUM_BINS` bins per channel
pub type Histogram = ChannelMap<Vec<u64>>;

/// Per-channel normalized histogram
pub type Pdf = ChannelMap<Vec<f64>>;

/// Count the occurrence of each intensity level in every channel.
///
/// Channels appear in layout order; bin `i` counts samples equal to `i`.
///
/// # Example
///
/// ```
/// use histsim_core::{Channel, PixelBuffer, compute_histogram};
///
/// let buf = PixelBuffer::gray(2, 2, vec![10; 4]).unwrap();
/// let hist = compute_histogram(&buf);
/// assert_eq!(hist.get(Channel::Gray).unwrap()[10], 4);
/// ```
pub fn compute_histogram(buffer: &PixelBuffer) -> Histogram {
    let layout = buffer.layout();
    let depth = layout.depth();
    let mut bins = vec![vec![0u64; NUM_BINS]; depth];

    // One pass over the interleaved samples
    for pixel in buffer.as_slice().chunks_exact(depth) {
        for (k, &val) in pixel.iter().enumerate() {
            bins[k][val as usize] += 1;
        }
    }

    layout.channels().iter().copied().zip(bins).collect()
}

/// Normalize a histogram by `divisor`.
///
/// # Errors
///
/// Returns [`Error::EmptyBuffer`] if `divisor` is 0.
pub fn normalize_histogram(histogram: &Histogram, divisor: usize) -> Result<Pdf> {
    if divisor == 0 {
        return Err(Error::EmptyBuffer);
    }
    let total = divisor as f64;
    Ok(histogram.map(|_, bins| bins.iter().map(|&n| n as f64 / total).collect()))
}

/// Compute the PDF of a buffer from its histogram.
///
/// The divisor is the total sample count of `buffer`; see the module
/// documentation for the effect on color images.
///
/// # Errors
///
/// Returns [`Error::ChannelMismatch`] if `histogram` does not carry the
/// channels of `buffer`'s layout, in layout order.
pub fn compute_pdf(histogram: &Histogram, buffer: &PixelBuffer) -> Result<Pdf> {
    let expected = buffer.layout().channels();
    let actual = histogram.channels();
    if actual != expected {
        return Err(Error::ChannelMismatch {
            expected: expected.to_vec(),
            actual,
        });
    }
    normalize_histogram(histogram, buffer.len())
}

/// Sum of all bins of each channel.
pub fn histogram_totals(histogram: &Histogram) -> ChannelMap<u64> {
    histogram.map(|_, bins| bins.iter().sum())
}

/// Sum of all entries of each channel.
pub fn pdf_totals(pdf: &Pdf) -> ChannelMap<f64> {
    pdf.map(|_, values| values.iter().sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::Channel;

    fn gradient_gray(w: u32, h: u32) -> PixelBuffer {
        let data = (0..w * h).map(|i| (i % 256) as u8).collect();
        PixelBuffer::gray(w, h, data).unwrap()
    }

    #[test]
    fn test_gray_histogram_counts() {
        let buf = PixelBuffer::gray(2, 2, vec![10, 10, 10, 10]).unwrap();
        let hist = compute_histogram(&buf);
        assert_eq!(hist.channels(), vec![Channel::Gray]);

        let gray = hist.get(Channel::Gray).unwrap();
        assert_eq!(gray.len(), NUM_BINS);
        assert_eq!(gray[10], 4);
        assert_eq!(gray.iter().sum::<u64>(), 4);
    }

    #[test]
    fn test_gray_histogram_total_matches_pixel_count() {
        let buf = gradient_gray(40, 17);
        let totals = histogram_totals(&compute_histogram(&buf));
        assert_eq!(totals.get(Channel::Gray), Some(&(40 * 17)));
    }

    #[test]
    fn test_rgb_histogram_per_channel() {
        let buf = PixelBuffer::rgb(2, 1, vec![0, 128, 255, 0, 64, 255]).unwrap();
        let hist = compute_histogram(&buf);
        assert_eq!(
            hist.channels(),
            vec![Channel::Red, Channel::Green, Channel::Blue]
        );
        assert_eq!(hist.get(Channel::Red).unwrap()[0], 2);
        assert_eq!(hist.get(Channel::Green).unwrap()[128], 1);
        assert_eq!(hist.get(Channel::Green).unwrap()[64], 1);
        assert_eq!(hist.get(Channel::Blue).unwrap()[255], 2);
        for (_, total) in histogram_totals(&hist) {
            assert_eq!(total, 2);
        }
    }

    #[test]
    fn test_gray_pdf_sums_to_one() {
        let buf = gradient_gray(31, 9);
        let pdf = compute_pdf(&compute_histogram(&buf), &buf).unwrap();
        let sum = *pdf_totals(&pdf).get(Channel::Gray).unwrap();
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_rgb_pdf_sums_to_one_third() {
        let data = (0..5 * 4 * 3).map(|i| (i * 7 % 256) as u8).collect();
        let buf = PixelBuffer::rgb(5, 4, data).unwrap();
        let pdf = compute_pdf(&compute_histogram(&buf), &buf).unwrap();
        for (_, sum) in pdf_totals(&pdf) {
            assert!((sum - 1.0 / 3.0).abs() < 1e-6, "sum = {sum}");
        }
    }

    #[test]
    fn test_pdf_rejects_foreign_histogram() {
        let gray = PixelBuffer::gray(2, 2, vec![7; 4]).unwrap();
        let rgb = PixelBuffer::rgb(2, 2, vec![7; 12]).unwrap();

        assert_eq!(
            compute_pdf(&compute_histogram(&gray), &rgb),
            Err(Error::ChannelMismatch {
                expected: vec![Channel::Red, Channel::Green, Channel::Blue],
                actual: vec![Channel::Gray],
            })
        );
        assert!(matches!(
            compute_pdf(&compute_histogram(&rgb), &gray),
            Err(Error::ChannelMismatch { .. })
        ));
    }

    #[test]
    fn test_normalize_zero_divisor() {
        let hist: Histogram = [(Channel::Gray, vec![0; NUM_BINS])].into_iter().collect();
        assert_eq!(normalize_histogram(&hist, 0), Err(Error::EmptyBuffer));
    }
}
