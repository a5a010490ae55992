//! Channel names and channel set masks.
//!
//! A [`Channel`] is one named per-pixel scalar plane (red, green, blue,
//! alpha, depth). A [`ChannelSet`] is an unordered set of channels backed by
//! a bitmask, used everywhere an operator negotiates which planes it reads
//! or writes.
//!
//! # Overview
//!
//! Channel sets drive three negotiations in a scanline pipeline:
//! - which output planes an operator produces,
//! - which input planes it needs fetched upstream,
//! - which planes a row buffer actually carries.
//!
//! # Usage
//!
//! ```rust
//! use rowfx_core::{Channel, ChannelSet};
//!
//! let rgb = ChannelSet::rgb();
//! assert!(rgb.contains(Channel::Green));
//! assert_eq!(rgb.len(), 3);
//!
//! // Set algebra via bit operators
//! let rgba = rgb | ChannelSet::from(Channel::Alpha);
//! assert_eq!(rgba, ChannelSet::rgba());
//! let just_alpha = rgba & !rgb;
//! assert!(just_alpha.contains(Channel::Alpha));
//! ```
//!
//! # Dependencies
//!
//! None (pure Rust types; optional `serde` derives)
//!
//! # Used By
//!
//! - [`crate::row::Row`] - Buffer allocation per channel
//! - `rowfx-ops` - Operator channel negotiation
//! - `rowfx-host` - Request propagation

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// A named per-pixel scalar plane.
///
/// The discriminant doubles as the bit index inside [`ChannelSet`] and the
/// plane index inside [`crate::PlanarImage`], so it must stay dense and
/// start at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Channel {
    /// Red component.
    Red = 0,
    /// Green component.
    Green = 1,
    /// Blue component.
    Blue = 2,
    /// Alpha (coverage) component.
    Alpha = 3,
    /// Depth component.
    Depth = 4,
}

/// Number of distinct channels.
pub const CHANNEL_COUNT: usize = 5;

/// All channels in bit-index order.
pub const ALL_CHANNELS: [Channel; CHANNEL_COUNT] = [
    Channel::Red,
    Channel::Green,
    Channel::Blue,
    Channel::Alpha,
    Channel::Depth,
];

impl Channel {
    /// Bit index of this channel inside a [`ChannelSet`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short lowercase name (`"red"`, `"alpha"`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
            Channel::Alpha => "alpha",
            Channel::Depth => "depth",
        }
    }

    /// Parses a channel from its short name or single-letter alias.
    ///
    /// Accepts `"red"`/`"r"`, `"green"`/`"g"`, `"blue"`/`"b"`,
    /// `"alpha"`/`"a"`, `"depth"`/`"z"`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "red" | "r" => Some(Channel::Red),
            "green" | "g" => Some(Channel::Green),
            "blue" | "b" => Some(Channel::Blue),
            "alpha" | "a" => Some(Channel::Alpha),
            "depth" | "z" => Some(Channel::Depth),
            _ => None,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An unordered set of [`Channel`]s backed by a bitmask.
///
/// The set has no fixed cardinality; an empty set is valid and means an
/// operator request degenerates to a no-op.
///
/// # Example
///
/// ```rust
/// use rowfx_core::{Channel, ChannelSet};
///
/// let mut set = ChannelSet::empty();
/// assert!(set.is_empty());
/// set.insert(Channel::Red);
/// set.insert(Channel::Alpha);
/// assert_eq!(set.len(), 2);
///
/// let names: Vec<_> = set.iter().map(|c| c.name()).collect();
/// assert_eq!(names, ["red", "alpha"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelSet {
    bits: u8,
}

/// Mask covering every channel bit.
const ALL_BITS: u8 = (1 << CHANNEL_COUNT) - 1;

impl ChannelSet {
    /// Creates an empty set.
    #[inline]
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// The red/green/blue triple.
    #[inline]
    pub const fn rgb() -> Self {
        Self {
            bits: 1 << Channel::Red as u8
                | 1 << Channel::Green as u8
                | 1 << Channel::Blue as u8,
        }
    }

    /// Red/green/blue/alpha.
    #[inline]
    pub const fn rgba() -> Self {
        Self {
            bits: Self::rgb().bits | 1 << Channel::Alpha as u8,
        }
    }

    /// Every known channel.
    #[inline]
    pub const fn all() -> Self {
        Self { bits: ALL_BITS }
    }

    /// Returns `true` if `channel` is a member.
    #[inline]
    pub const fn contains(self, channel: Channel) -> bool {
        self.bits & (1 << channel as u8) != 0
    }

    /// Returns `true` if every member of `other` is a member of `self`.
    #[inline]
    pub const fn contains_all(self, other: ChannelSet) -> bool {
        self.bits & other.bits == other.bits
    }

    /// Inserts a channel. Returns `true` if it was newly added.
    #[inline]
    pub fn insert(&mut self, channel: Channel) -> bool {
        let added = !self.contains(channel);
        self.bits |= 1 << channel as u8;
        added
    }

    /// Removes a channel. Returns `true` if it was a member.
    #[inline]
    pub fn remove(&mut self, channel: Channel) -> bool {
        let had = self.contains(channel);
        self.bits &= !(1 << channel as u8);
        had
    }

    /// Number of member channels.
    #[inline]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if no channels are present.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Iterates members in stable bit-index order.
    #[inline]
    pub fn iter(self) -> impl Iterator<Item = Channel> {
        ALL_CHANNELS.into_iter().filter(move |c| self.contains(*c))
    }
}

impl From<Channel> for ChannelSet {
    #[inline]
    fn from(channel: Channel) -> Self {
        Self {
            bits: 1 << channel as u8,
        }
    }
}

impl FromIterator<Channel> for ChannelSet {
    fn from_iter<I: IntoIterator<Item = Channel>>(iter: I) -> Self {
        let mut set = Self::empty();
        for c in iter {
            set.insert(c);
        }
        set
    }
}

impl BitOr for ChannelSet {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitOrAssign for ChannelSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl BitAnd for ChannelSet {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self {
            bits: self.bits & rhs.bits,
        }
    }
}

impl BitAndAssign for ChannelSet {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits &= rhs.bits;
    }
}

impl Not for ChannelSet {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self {
            bits: !self.bits & ALL_BITS,
        }
    }
}

impl fmt::Display for ChannelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for c in self.iter() {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{c}")?;
            first = false;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set() {
        let set = ChannelSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.iter().count(), 0);
    }

    #[test]
    fn rgb_members() {
        let set = ChannelSet::rgb();
        assert_eq!(set.len(), 3);
        assert!(set.contains(Channel::Red));
        assert!(set.contains(Channel::Green));
        assert!(set.contains(Channel::Blue));
        assert!(!set.contains(Channel::Alpha));
    }

    #[test]
    fn insert_remove() {
        let mut set = ChannelSet::empty();
        assert!(set.insert(Channel::Alpha));
        assert!(!set.insert(Channel::Alpha));
        assert!(set.contains(Channel::Alpha));
        assert!(set.remove(Channel::Alpha));
        assert!(!set.remove(Channel::Alpha));
        assert!(set.is_empty());
    }

    #[test]
    fn set_algebra() {
        let rgb = ChannelSet::rgb();
        let rgba = ChannelSet::rgba();
        assert_eq!(rgb | ChannelSet::from(Channel::Alpha), rgba);
        assert_eq!(rgba & rgb, rgb);
        assert!(rgba.contains_all(rgb));
        assert!(!rgb.contains_all(rgba));
        assert!((!rgb).contains(Channel::Alpha));
        assert!(!(!rgb).contains(Channel::Red));
    }

    #[test]
    fn iteration_order_is_stable() {
        let set: ChannelSet = [Channel::Blue, Channel::Red].into_iter().collect();
        let order: Vec<_> = set.iter().collect();
        assert_eq!(order, [Channel::Red, Channel::Blue]);
    }

    #[test]
    fn parse_aliases() {
        assert_eq!(Channel::parse("r"), Some(Channel::Red));
        assert_eq!(Channel::parse("alpha"), Some(Channel::Alpha));
        assert_eq!(Channel::parse("z"), Some(Channel::Depth));
        assert_eq!(Channel::parse("luma"), None);
    }

    #[test]
    fn display() {
        assert_eq!(ChannelSet::rgb().to_string(), "{red,green,blue}");
        assert_eq!(ChannelSet::empty().to_string(), "{}");
    }
}
