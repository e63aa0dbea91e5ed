//! Channel selection
//!
//! A [`ChannelHeuristic`] reduces a per-channel [`DistanceSet`] to one
//! score. The heuristics in [`crate::heuristic`] know nothing about these
//! policies; new policies only extend this enum.

use crate::channel::{Channel, ChannelLayout};
use crate::error::{Error, Result};
use crate::heuristic::DistanceSet;

/// Channel combination policy
///
/// The discriminants are stable integer identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ChannelHeuristic {
    /// Use the `gray` distance as is
    Gray = 0,
    /// Arithmetic mean of the `red`, `green` and `blue` distances
    RgbAvg = 6,
}

impl ChannelHeuristic {
    /// Get the integer identifier
    pub fn value(self) -> i32 {
        self as i32
    }

    /// Natural policy for images of `layout`.
    pub fn for_layout(layout: ChannelLayout) -> Self {
        match layout {
            ChannelLayout::Gray => Self::Gray,
            ChannelLayout::Rgb => Self::RgbAvg,
        }
    }

    /// Reduce `distances` to one score.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingChannel`] if a channel the policy reads is
    /// absent from `distances`.
    pub fn select(self, distances: &DistanceSet) -> Result<f64> {
        match self {
            Self::Gray => distances.require(Channel::Gray).copied(),
            Self::RgbAvg => {
                let red = distances.require(Channel::Red)?;
                let green = distances.require(Channel::Green)?;
                let blue = distances.require(Channel::Blue)?;
                Ok((red + green + blue) / 3.0)
            }
        }
    }
}

impl TryFrom<i32> for ChannelHeuristic {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            0 => Ok(Self::Gray),
            6 => Ok(Self::RgbAvg),
            _ => Err(Error::UnknownChannelHeuristic(value)),
        }
    }
}

/// Reduce `distances` with the policy identified by `channel_heuristic`.
///
/// # Errors
///
/// Returns [`Error::UnknownChannelHeuristic`] for an unrecognized value,
/// otherwise the errors of [`ChannelHeuristic::select`].
pub fn select_distance(channel_heuristic: i32, distances: &DistanceSet) -> Result<f64> {
    ChannelHeuristic::try_from(channel_heuristic)?.select(distances)
}
