//! Error types for rowfx-core operations.
//!
//! # Overview
//!
//! The [`Error`] enum covers the failure modes of buffer and negotiation
//! code:
//! - Row buffer access (missing channels, length mismatches)
//! - Plane and region bounds checking
//! - Image allocation
//!
//! Row operators themselves are total over well-formed inputs; these errors
//! exist so malformed inputs fail fast with a typed contract violation
//! instead of silently producing wrong pixels.
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::row::Row`] - Channel access
//! - [`crate::image::PlanarImage`] - Construction and row access
//! - `rowfx-host` - Source fetches and render scheduling

use crate::channel::Channel;
use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in core buffer and region handling.
#[derive(Debug, Error)]
pub enum Error {
    /// A channel was requested from a buffer that does not carry it.
    #[error("channel '{channel}' not present in buffer")]
    ChannelMissing {
        /// The absent channel.
        channel: Channel,
    },

    /// A sample array length does not match the span it claims to cover.
    #[error("sample array length {got} does not match span width {expected}")]
    SpanMismatch {
        /// Span width in columns.
        expected: usize,
        /// Actual array length.
        got: usize,
    },

    /// Invalid image dimensions.
    ///
    /// Returned when dimensions would overflow buffer size calculations.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width.
        width: i32,
        /// Requested height.
        height: i32,
        /// Reason why dimensions are invalid.
        reason: String,
    },

    /// A span or region falls outside the area a buffer covers.
    #[error("region [{x},{r}) x [{y},{t}) outside image bounds {width}x{height}")]
    OutOfBounds {
        /// First column, inclusive.
        x: i32,
        /// First row, inclusive.
        y: i32,
        /// One past the last column.
        r: i32,
        /// One past the last row.
        t: i32,
        /// Image width.
        width: usize,
        /// Image height.
        height: usize,
    },

    /// Generic error with custom message.
    ///
    /// Catch-all for errors that don't fit other categories.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Creates an [`Error::ChannelMissing`] error.
    #[inline]
    pub fn channel_missing(channel: Channel) -> Self {
        Self::ChannelMissing { channel }
    }

    /// Creates an [`Error::SpanMismatch`] error.
    #[inline]
    pub fn span_mismatch(expected: usize, got: usize) -> Self {
        Self::SpanMismatch { expected, got }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: i32, height: i32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::Other`] error.
    #[inline]
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. } | Self::SpanMismatch { .. })
    }
}
