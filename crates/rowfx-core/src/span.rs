//! Scanline spans and request regions.
//!
//! This module provides the geometric primitives of the scanline model:
//!
//! - [`Span`] - A half-open horizontal pixel range `[x, r)` at some row
//! - [`Region`] - A half-open rectangle `[x, r) x [y, t)` used for
//!   region-of-interest requests
//!
//! # Coordinate System
//!
//! Coordinates are signed: an upstream image may extend outside the frame
//! rectangle, so both `x` and `y` can be negative. Rows run bottom-to-top or
//! top-to-bottom at the discretion of the embedding application; nothing in
//! this crate depends on the vertical orientation.
//!
//! # Usage
//!
//! ```rust
//! use rowfx_core::{Region, Span};
//!
//! let span = Span::new(-2, 6);
//! assert_eq!(span.len(), 8);
//! assert!(!span.is_empty());
//!
//! // Reversed bounds denote an empty segment, not an error
//! assert!(Span::new(5, 5).is_empty());
//! assert!(Span::new(7, 3).is_empty());
//!
//! let region = Region::new(0, 0, 1920, 1080);
//! assert_eq!(region.height(), 1080);
//! assert_eq!(region.span(), Span::new(0, 1920));
//! ```
//!
//! # Dependencies
//!
//! None (pure Rust types; optional `serde` derives)
//!
//! # Used By
//!
//! - [`crate::row::Row`] - Buffer sizing
//! - `rowfx-ops` - Engine invocation parameters
//! - `rowfx-host` - Request propagation and render scheduling

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A half-open horizontal pixel range `[x, r)`.
///
/// `x` is the first column (inclusive) and `r` the last column (exclusive).
/// A span with `r <= x` is empty; iteration over it performs no work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Span {
    /// First column, inclusive.
    pub x: i32,
    /// One past the last column.
    pub r: i32,
}

impl Span {
    /// Creates a span covering `[x, r)`.
    #[inline]
    pub const fn new(x: i32, r: i32) -> Self {
        Self { x, r }
    }

    /// Number of columns covered; zero when `r <= x`.
    #[inline]
    pub const fn len(self) -> usize {
        if self.r > self.x {
            (self.r - self.x) as usize
        } else {
            0
        }
    }

    /// Returns `true` when the span covers no columns.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.r <= self.x
    }

    /// Returns `true` if `col` falls inside `[x, r)`.
    #[inline]
    pub const fn contains(self, col: i32) -> bool {
        col >= self.x && col < self.r
    }

    /// Iterates columns from `x` up to (not including) `r`.
    ///
    /// Yields nothing for an empty span.
    #[inline]
    pub fn columns(self) -> impl Iterator<Item = i32> {
        self.x..self.r.max(self.x)
    }
}

/// A half-open rectangle `[x, r) x [y, t)` for region-of-interest requests.
///
/// Mirrors the `(x, y, r, t)` convention used by scanline compositing
/// engines: `r` and `t` are exclusive upper bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Region {
    /// First column, inclusive.
    pub x: i32,
    /// First row, inclusive.
    pub y: i32,
    /// One past the last column.
    pub r: i32,
    /// One past the last row.
    pub t: i32,
}

impl Region {
    /// Creates a region covering `[x, r) x [y, t)`.
    #[inline]
    pub const fn new(x: i32, y: i32, r: i32, t: i32) -> Self {
        Self { x, y, r, t }
    }

    /// Creates a region from origin `(0, 0)` with the given dimensions.
    #[inline]
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// The horizontal span shared by every row of the region.
    #[inline]
    pub const fn span(self) -> Span {
        Span::new(self.x, self.r)
    }

    /// Number of columns covered; zero when `r <= x`.
    #[inline]
    pub const fn width(self) -> usize {
        self.span().len()
    }

    /// Number of rows covered; zero when `t <= y`.
    #[inline]
    pub const fn height(self) -> usize {
        if self.t > self.y {
            (self.t - self.y) as usize
        } else {
            0
        }
    }

    /// Returns `true` when no pixels are covered.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.r <= self.x || self.t <= self.y
    }

    /// Iterates row coordinates from `y` up to (not including) `t`.
    #[inline]
    pub fn rows(self) -> impl Iterator<Item = i32> {
        self.y..self.t.max(self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_len() {
        assert_eq!(Span::new(0, 10).len(), 10);
        assert_eq!(Span::new(-5, 5).len(), 10);
        assert_eq!(Span::new(3, 3).len(), 0);
        assert_eq!(Span::new(10, 0).len(), 0);
    }

    #[test]
    fn span_contains() {
        let span = Span::new(-2, 2);
        assert!(span.contains(-2));
        assert!(span.contains(1));
        assert!(!span.contains(2));
        assert!(!span.contains(-3));
    }

    #[test]
    fn empty_span_iterates_nothing() {
        assert_eq!(Span::new(7, 3).columns().count(), 0);
        assert_eq!(Span::new(0, 3).columns().count(), 3);
    }

    #[test]
    fn region_dimensions() {
        let region = Region::new(-10, -20, 10, 20);
        assert_eq!(region.width(), 20);
        assert_eq!(region.height(), 40);
        assert!(!region.is_empty());
    }

    #[test]
    fn degenerate_region() {
        assert!(Region::new(0, 0, 0, 100).is_empty());
        assert!(Region::new(0, 5, 100, 5).is_empty());
        assert_eq!(Region::new(0, 5, 100, 5).rows().count(), 0);
        assert_eq!(Region::new(0, 8, 100, 2).height(), 0);
    }
}
