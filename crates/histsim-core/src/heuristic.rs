//! Distance heuristics between per-channel PDFs
//!
//! Each heuristic compares two [`Pdf`]s channel by channel and returns a
//! [`DistanceSet`]. Combining the channels into one score is left to
//! [`ChannelHeuristic`](crate::ChannelHeuristic).
//!
//! Both heuristics are symmetric: swapping the two PDFs yields the same
//! distances.

use crate::channel::ChannelMap;
use crate::error::{Error, Result};
use crate::histogram::Pdf;
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// Additive guard in the chi-square denominator
pub const CHI_SQUARE_EPSILON: f64 = 1e-8;

/// Per-channel distances from one comparison
pub type DistanceSet = ChannelMap<f64>;

/// Distance heuristic selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistanceHeuristic {
    /// Sum of squared bin differences
    EuclideanDistance,
    /// Squared bin differences weighted by the summed bin mass
    SquareChi,
}

impl DistanceHeuristic {
    /// All heuristics, in declaration order.
    pub const ALL: [DistanceHeuristic; 2] =
        [DistanceHeuristic::EuclideanDistance, DistanceHeuristic::SquareChi];

    /// Short code (`"ED"` or `"SC"`).
    pub fn code(self) -> &'static str {
        match self {
            Self::EuclideanDistance => "ED",
            Self::SquareChi => "SC",
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::EuclideanDistance => "Euclidian Distance",
            Self::SquareChi => "Square Chi",
        }
    }

    /// Compare `pe` against `pi` with this heuristic.
    ///
    /// # Errors
    ///
    /// See [`euclidean_distance`] and [`square_chi`].
    pub fn compute(self, pe: &Pdf, pi: &Pdf) -> Result<DistanceSet> {
        match self {
            Self::EuclideanDistance => euclidean_distance(pe, pi),
            Self::SquareChi => square_chi(pe, pi),
        }
    }
}

impl fmt::Display for DistanceHeuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DistanceHeuristic {
    type Err = Error;

    /// Accepts the short code or the full name, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|h| key.eq_ignore_ascii_case(h.code()) || key.eq_ignore_ascii_case(h.name()))
            .ok_or_else(|| Error::UnknownHeuristic(s.to_string()))
    }
}

/// Euclidean distance for every channel.
///
/// `d[c] = sum_b (pe[c][b] - pi[c][b])^2`
///
/// # Errors
///
/// - [`Error::ChannelMismatch`] if the PDFs carry different channels
/// - [`Error::ShapeMismatch`] if a channel has different bin counts
pub fn euclidean_distance(pe: &Pdf, pi: &Pdf) -> Result<DistanceSet> {
    per_channel(pe, pi, |e, i| {
        let d = e - i;
        d * d
    })
}

/// Chi-square style distance for every channel.
///
/// `d[c] = sum_b (pe[c][b] - pi[c][b])^2 / (pe[c][b] + pi[c][b] + eps)`
///
/// with `eps` = [`CHI_SQUARE_EPSILON`]. A bin empty in both PDFs
/// contributes 0. No degrees-of-freedom normalization is applied.
///
/// # Errors
///
/// Same as [`euclidean_distance`].
pub fn square_chi(pe: &Pdf, pi: &Pdf) -> Result<DistanceSet> {
    per_channel(pe, pi, |e, i| {
        let d = e - i;
        d * d / (e + i + CHI_SQUARE_EPSILON)
    })
}

/// Sum `term` over aligned bins of each channel of `pe` and `pi`.
fn per_channel(pe: &Pdf, pi: &Pdf, term: impl Fn(f64, f64) -> f64) -> Result<DistanceSet> {
    pe.check_same_channels(pi)?;

    let mut distances = DistanceSet::with_capacity(pe.len());
    for (channel, e) in pe.iter() {
        let i = pi.require(channel)?;
        if e.len() != i.len() {
            return Err(Error::ShapeMismatch {
                channel,
                expected: e.len(),
                actual: i.len(),
            });
        }

        let d: f64 = e.iter().zip(i).map(|(&a, &b)| term(a, b)).sum();
        trace!(%channel, distance = d, "channel distance");
        distances.insert(channel, d);
    }
    Ok(distances)
}
