//! Row buffers: per-channel sample arrays for one scanline segment.
//!
//! This module provides the two buffer types a row operator touches:
//!
//! - [`Row`] - Owned, writable per-channel `f32` arrays covering one [`Span`]
//! - [`RowView`] - Borrowed read-only per-channel slices over one [`Span`]
//!
//! # Invariants
//!
//! Every sample array in a row covers exactly the row's span: its length
//! equals `r - x`. Constructors enforce this, so operator kernels can index
//! `[0, span.len())` without further bounds checks.
//!
//! Buffers are owned by the caller for the lifetime of one operator
//! invocation only; operators must not retain references across calls.
//!
//! # Usage
//!
//! ```rust
//! use rowfx_core::{Channel, ChannelSet, Row, Span};
//!
//! let span = Span::new(0, 4);
//! let mut row = Row::new(span, ChannelSet::rgb());
//!
//! // Write the red plane
//! if let Some(red) = row.writable(Channel::Red) {
//!     red.copy_from_slice(&[0.1, 0.2, 0.3, 0.4]);
//! }
//!
//! assert_eq!(row.channel(Channel::Red).unwrap()[2], 0.3);
//! assert!(row.channel(Channel::Alpha).is_none());
//! ```
//!
//! # Dependencies
//!
//! - [`crate::channel`] - Channel identities and sets
//! - [`crate::span`] - Segment geometry
//! - [`crate::error`] - Contract violations
//!
//! # Used By
//!
//! - `rowfx-ops` - Engine input/output buffers
//! - `rowfx-host` - Source fetches and output assembly

use crate::channel::{Channel, ChannelSet, CHANNEL_COUNT};
use crate::error::{Error, Result};
use crate::span::Span;

/// Owned per-channel sample arrays covering one scanline segment.
///
/// A row carries one contiguous `f32` array per member of its channel set,
/// each of length `span.len()`, zero-initialized on allocation.
#[derive(Debug, Clone)]
pub struct Row {
    span: Span,
    channels: ChannelSet,
    planes: [Option<Vec<f32>>; CHANNEL_COUNT],
}

impl Row {
    /// Allocates a zeroed row covering `span` for every channel in `channels`.
    ///
    /// An empty span or an empty channel set is valid and allocates nothing.
    pub fn new(span: Span, channels: ChannelSet) -> Self {
        let width = span.len();
        let mut planes: [Option<Vec<f32>>; CHANNEL_COUNT] = std::array::from_fn(|_| None);
        for channel in channels.iter() {
            planes[channel.index()] = Some(vec![0.0; width]);
        }
        Self {
            span,
            channels,
            planes,
        }
    }

    /// The segment this row covers.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// The channels this row carries arrays for.
    #[inline]
    pub fn channels(&self) -> ChannelSet {
        self.channels
    }

    /// Read-only samples for `channel`, or `None` if the row does not carry it.
    #[inline]
    pub fn channel(&self, channel: Channel) -> Option<&[f32]> {
        self.planes[channel.index()].as_deref()
    }

    /// Writable samples for `channel`, or `None` if the row does not carry it.
    #[inline]
    pub fn writable(&mut self, channel: Channel) -> Option<&mut [f32]> {
        self.planes[channel.index()].as_deref_mut()
    }

    /// Writable samples for `channel`, failing with a contract violation if
    /// the row does not carry it.
    #[inline]
    pub fn try_writable(&mut self, channel: Channel) -> Result<&mut [f32]> {
        self.writable(channel)
            .ok_or(Error::ChannelMissing { channel })
    }

    /// Moves the sample array for `channel` out of the row.
    ///
    /// Used by render drivers to assemble output planes without copying.
    #[inline]
    pub fn take(&mut self, channel: Channel) -> Option<Vec<f32>> {
        let plane = self.planes[channel.index()].take();
        if plane.is_some() {
            self.channels.remove(channel);
        }
        plane
    }

    /// Borrows this row as a read-only [`RowView`].
    pub fn as_view(&self) -> RowView<'_> {
        let mut planes: [Option<&[f32]>; CHANNEL_COUNT] = [None; CHANNEL_COUNT];
        for channel in self.channels.iter() {
            planes[channel.index()] = self.channel(channel);
        }
        RowView {
            span: self.span,
            channels: self.channels,
            planes,
        }
    }
}

/// Borrowed read-only per-channel slices covering one scanline segment.
///
/// Built either from a [`Row`] via [`Row::as_view`] or assembled slice by
/// slice over host-owned storage with [`RowView::insert`].
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    span: Span,
    channels: ChannelSet,
    planes: [Option<&'a [f32]>; CHANNEL_COUNT],
}

impl<'a> RowView<'a> {
    /// Creates a view covering `span` with no channels attached yet.
    #[inline]
    pub fn new(span: Span) -> Self {
        Self {
            span,
            channels: ChannelSet::empty(),
            planes: [None; CHANNEL_COUNT],
        }
    }

    /// Attaches read-only samples for `channel`.
    ///
    /// Fails with [`Error::SpanMismatch`] if the slice does not cover the
    /// view's span exactly.
    pub fn insert(&mut self, channel: Channel, samples: &'a [f32]) -> Result<()> {
        if samples.len() != self.span.len() {
            return Err(Error::span_mismatch(self.span.len(), samples.len()));
        }
        self.planes[channel.index()] = Some(samples);
        self.channels.insert(channel);
        Ok(())
    }

    /// The segment this view covers.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// The channels this view carries slices for.
    #[inline]
    pub fn channels(&self) -> ChannelSet {
        self.channels
    }

    /// Samples for `channel`, or `None` if the view does not carry it.
    #[inline]
    pub fn channel(&self, channel: Channel) -> Option<&'a [f32]> {
        self.planes[channel.index()]
    }

    /// Samples for `channel`, failing with a contract violation if absent.
    #[inline]
    pub fn try_channel(&self, channel: Channel) -> Result<&'a [f32]> {
        self.channel(channel)
            .ok_or(Error::ChannelMissing { channel })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocation_matches_span() {
        let row = Row::new(Span::new(-3, 5), ChannelSet::rgb());
        for channel in ChannelSet::rgb().iter() {
            assert_eq!(row.channel(channel).unwrap().len(), 8);
        }
        assert!(row.channel(Channel::Alpha).is_none());
    }

    #[test]
    fn empty_span_allocates_empty_arrays() {
        let row = Row::new(Span::new(5, 5), ChannelSet::rgba());
        assert_eq!(row.channel(Channel::Red).unwrap().len(), 0);
    }

    #[test]
    fn empty_channel_set_carries_nothing() {
        let row = Row::new(Span::new(0, 16), ChannelSet::empty());
        assert!(row.channels().is_empty());
        assert!(row.channel(Channel::Red).is_none());
    }

    #[test]
    fn writable_round_trip() {
        let mut row = Row::new(Span::new(0, 2), ChannelSet::from(Channel::Green));
        row.writable(Channel::Green)
            .unwrap()
            .copy_from_slice(&[0.25, 0.75]);
        assert_eq!(row.channel(Channel::Green).unwrap(), &[0.25, 0.75]);
    }

    #[test]
    fn try_writable_missing_channel() {
        let mut row = Row::new(Span::new(0, 2), ChannelSet::rgb());
        let err = row.try_writable(Channel::Depth).unwrap_err();
        assert!(matches!(err, Error::ChannelMissing { .. }));
    }

    #[test]
    fn take_removes_plane() {
        let mut row = Row::new(Span::new(0, 4), ChannelSet::rgb());
        let plane = row.take(Channel::Red).unwrap();
        assert_eq!(plane.len(), 4);
        assert!(row.channel(Channel::Red).is_none());
        assert!(!row.channels().contains(Channel::Red));
        assert!(row.take(Channel::Red).is_none());
    }

    #[test]
    fn view_rejects_wrong_length() {
        let mut view = RowView::new(Span::new(0, 4));
        let err = view.insert(Channel::Red, &[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, Error::SpanMismatch { expected: 4, got: 2 }));
    }

    #[test]
    fn view_from_row() {
        let mut row = Row::new(Span::new(0, 3), ChannelSet::rgb());
        row.writable(Channel::Blue)
            .unwrap()
            .copy_from_slice(&[1.0, 2.0, 3.0]);
        let view = row.as_view();
        assert_eq!(view.channels(), ChannelSet::rgb());
        assert_eq!(view.try_channel(Channel::Blue).unwrap(), &[1.0, 2.0, 3.0]);
        assert!(view.try_channel(Channel::Alpha).is_err());
    }
}
