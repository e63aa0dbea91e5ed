//! Channels, channel layouts and per-channel mappings
//!
//! A [`ChannelLayout`] describes how a pixel buffer is sliced into named
//! channels. Every per-channel result in the crate (histograms, PDFs,
//! distance sets) is a [`ChannelMap`], which keeps its entries in the
//! order they were inserted, i.e. the layout order.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A named slice of pixel intensity data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Single intensity channel of a grayscale image
    Gray,
    /// Red component (depth-slice 0)
    Red,
    /// Green component (depth-slice 1)
    Green,
    /// Blue component (depth-slice 2)
    Blue,
}

impl Channel {
    /// Get the mapping key for this channel.
    pub fn name(self) -> &'static str {
        match self {
            Channel::Gray => "gray",
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Channel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "gray" => Ok(Channel::Gray),
            "red" => Ok(Channel::Red),
            "green" => Ok(Channel::Green),
            "blue" => Ok(Channel::Blue),
            _ => Err(Error::InvalidParameter(format!("unknown channel: {s}"))),
        }
    }
}

/// Channel layout of a pixel buffer
///
/// Determines the number of interleaved samples per pixel and the name
/// of each depth-slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelLayout {
    /// One `gray` sample per pixel, shape (H, W)
    Gray,
    /// Interleaved `red`, `green`, `blue` samples, shape (H, W, 3)
    Rgb,
}

impl ChannelLayout {
    const GRAY_CHANNELS: [Channel; 1] = [Channel::Gray];
    const RGB_CHANNELS: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Channels of this layout, in depth-slice order.
    pub fn channels(self) -> &'static [Channel] {
        match self {
            ChannelLayout::Gray => &Self::GRAY_CHANNELS,
            ChannelLayout::Rgb => &Self::RGB_CHANNELS,
        }
    }

    /// Number of samples stored per pixel.
    pub fn depth(self) -> usize {
        self.channels().len()
    }

    /// Depth-slice offset of `channel`, if the layout carries it.
    pub fn offset_of(self, channel: Channel) -> Option<usize> {
        self.channels().iter().position(|&c| c == channel)
    }
}

/// Insertion-ordered mapping from [`Channel`] to a value
///
/// Holds at most one entry per channel. Lookup is linear, which is the
/// fastest option for the one- and three-entry maps used here.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelMap<T> {
    entries: Vec<(Channel, T)>,
}

impl<T> Default for ChannelMap<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> ChannelMap<T> {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty map with room for `capacity` channels
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Number of channels in the map
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or replace the value for `channel`.
    ///
    /// A new channel is appended; an existing channel keeps its position.
    /// Returns the previous value, if any.
    pub fn insert(&mut self, channel: Channel, value: T) -> Option<T> {
        match self.entries.iter_mut().find(|(c, _)| *c == channel) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((channel, value));
                None
            }
        }
    }

    /// Get the value for `channel`
    pub fn get(&self, channel: Channel) -> Option<&T> {
        self.entries
            .iter()
            .find(|(c, _)| *c == channel)
            .map(|(_, v)| v)
    }

    /// Get the value for `channel`, failing with [`Error::MissingChannel`].
    pub fn require(&self, channel: Channel) -> Result<&T> {
        self.get(channel).ok_or(Error::MissingChannel(channel))
    }

    /// Check if `channel` is present
    pub fn contains(&self, channel: Channel) -> bool {
        self.get(channel).is_some()
    }

    /// Channels in insertion order
    pub fn channels(&self) -> Vec<Channel> {
        self.entries.iter().map(|(c, _)| *c).collect()
    }

    /// Iterate over `(channel, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (Channel, &T)> {
        self.entries.iter().map(|(c, v)| (*c, v))
    }

    /// Build a new map by applying `f` to every value, preserving order.
    pub fn map<U>(&self, mut f: impl FnMut(Channel, &T) -> U) -> ChannelMap<U> {
        ChannelMap {
            entries: self.entries.iter().map(|(c, v)| (*c, f(*c, v))).collect(),
        }
    }

    /// Check that `other` carries exactly the same channel set.
    ///
    /// Order is not significant; only membership is.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChannelMismatch`] listing both channel sets.
    pub fn check_same_channels<U>(&self, other: &ChannelMap<U>) -> Result<()> {
        let same =
            self.len() == other.len() && self.entries.iter().all(|(c, _)| other.contains(*c));
        if same {
            Ok(())
        } else {
            Err(Error::ChannelMismatch {
                expected: self.channels(),
                actual: other.channels(),
            })
        }
    }
}

impl<T> FromIterator<(Channel, T)> for ChannelMap<T> {
    fn from_iter<I: IntoIterator<Item = (Channel, T)>>(iter: I) -> Self {
        let mut map = ChannelMap::new();
        for (channel, value) in iter {
            map.insert(channel, value);
        }
        map
    }
}

impl<T> IntoIterator for ChannelMap<T> {
    type Item = (Channel, T);
    type IntoIter = std::vec::IntoIter<(Channel, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_names_roundtrip() {
        for c in [Channel::Gray, Channel::Red, Channel::Green, Channel::Blue] {
            assert_eq!(c.name().parse::<Channel>().unwrap(), c);
        }
        assert!("alpha".parse::<Channel>().is_err());
    }

    #[test]
    fn test_layout_channels() {
        assert_eq!(ChannelLayout::Gray.channels(), &[Channel::Gray]);
        assert_eq!(
            ChannelLayout::Rgb.channels(),
            &[Channel::Red, Channel::Green, Channel::Blue]
        );
        assert_eq!(ChannelLayout::Gray.depth(), 1);
        assert_eq!(ChannelLayout::Rgb.depth(), 3);
        assert_eq!(ChannelLayout::Rgb.offset_of(Channel::Blue), Some(2));
        assert_eq!(ChannelLayout::Gray.offset_of(Channel::Red), None);
    }

    #[test]
    fn test_map_preserves_insertion_order() {
        let mut map = ChannelMap::new();
        map.insert(Channel::Blue, 1);
        map.insert(Channel::Red, 2);
        map.insert(Channel::Green, 3);
        assert_eq!(
            map.channels(),
            vec![Channel::Blue, Channel::Red, Channel::Green]
        );

        // Replacing keeps the position
        assert_eq!(map.insert(Channel::Blue, 10), Some(1));
        assert_eq!(map.channels()[0], Channel::Blue);
        assert_eq!(map.get(Channel::Blue), Some(&10));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_require_missing_channel() {
        let map: ChannelMap<f64> = [(Channel::Gray, 1.0)].into_iter().collect();
        assert_eq!(map.require(Channel::Gray), Ok(&1.0));
        assert_eq!(
            map.require(Channel::Red),
            Err(Error::MissingChannel(Channel::Red))
        );
    }

    #[test]
    fn test_check_same_channels() {
        let a: ChannelMap<u8> = [(Channel::Red, 0), (Channel::Green, 0)].into_iter().collect();
        let b: ChannelMap<u8> = [(Channel::Green, 1), (Channel::Red, 1)].into_iter().collect();
        let c: ChannelMap<u8> = [(Channel::Gray, 1)].into_iter().collect();
        assert!(a.check_same_channels(&b).is_ok());
        assert!(matches!(
            a.check_same_channels(&c),
            Err(Error::ChannelMismatch { .. })
        ));
    }
}
