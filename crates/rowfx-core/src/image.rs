//! Planar image buffers.
//!
//! A [`PlanarImage`] stores one contiguous `f32` plane per channel, row-major
//! within each plane. It is the substrate render drivers read input rows from
//! and assemble output rows into; row operators themselves never see whole
//! images.
//!
//! # Memory Layout
//!
//! ```text
//! red plane:   [row 0][row 1][row 2]...
//! green plane: [row 0][row 1][row 2]...
//! blue plane:  [row 0][row 1][row 2]...
//! ```
//!
//! # Usage
//!
//! ```rust
//! use rowfx_core::{Channel, ChannelSet, PlanarImage};
//!
//! let mut img = PlanarImage::new(4, 2, ChannelSet::rgb()).unwrap();
//! img.row_mut(Channel::Red, 0).unwrap().fill(1.0);
//! assert_eq!(img.row(Channel::Red, 0).unwrap(), &[1.0; 4]);
//! assert_eq!(img.row(Channel::Red, 1).unwrap(), &[0.0; 4]);
//! ```
//!
//! # Dependencies
//!
//! - [`crate::channel`] - Plane identities
//! - [`crate::error`] - Bounds and allocation errors
//!
//! # Used By
//!
//! - `rowfx-host` - Input sourcing and render output
//! - `rowfx-cli` - Conversion to and from interleaved file formats

use crate::channel::{Channel, ChannelSet, CHANNEL_COUNT};
use crate::error::{Error, Result};
use crate::span::Region;

/// Owned per-channel image planes over a `width x height` pixel area.
///
/// Zero-sized images are valid; they carry empty planes and no rows.
#[derive(Debug, Clone)]
pub struct PlanarImage {
    width: usize,
    height: usize,
    channels: ChannelSet,
    planes: [Option<Vec<f32>>; CHANNEL_COUNT],
}

impl PlanarImage {
    /// Allocates a zeroed image with one plane per channel in `channels`.
    ///
    /// Fails with [`Error::InvalidDimensions`] if `width * height` overflows.
    pub fn new(width: usize, height: usize, channels: ChannelSet) -> Result<Self> {
        let size = width.checked_mul(height).ok_or_else(|| {
            Error::invalid_dimensions(
                width.min(i32::MAX as usize) as i32,
                height.min(i32::MAX as usize) as i32,
                "plane size overflows",
            )
        })?;
        let mut planes: [Option<Vec<f32>>; CHANNEL_COUNT] = std::array::from_fn(|_| None);
        for channel in channels.iter() {
            planes[channel.index()] = Some(vec![0.0; size]);
        }
        Ok(Self {
            width,
            height,
            channels,
            planes,
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Channels this image carries planes for.
    #[inline]
    pub fn channels(&self) -> ChannelSet {
        self.channels
    }

    /// The full image area as a request [`Region`] anchored at the origin.
    #[inline]
    pub fn region(&self) -> Region {
        Region::from_size(self.width as i32, self.height as i32)
    }

    /// Read-only samples for row `y` of `channel`.
    pub fn row(&self, channel: Channel, y: usize) -> Result<&[f32]> {
        let plane = self.planes[channel.index()]
            .as_deref()
            .ok_or(Error::ChannelMissing { channel })?;
        if y >= self.height {
            return Err(self.row_out_of_bounds(y));
        }
        Ok(&plane[y * self.width..(y + 1) * self.width])
    }

    /// Writable samples for row `y` of `channel`.
    pub fn row_mut(&mut self, channel: Channel, y: usize) -> Result<&mut [f32]> {
        let width = self.width;
        let height = self.height;
        if y >= height {
            return Err(self.row_out_of_bounds(y));
        }
        let plane = self.planes[channel.index()]
            .as_deref_mut()
            .ok_or(Error::ChannelMissing { channel })?;
        Ok(&mut plane[y * width..(y + 1) * width])
    }

    /// The whole plane for `channel`, or `None` if absent.
    #[inline]
    pub fn plane(&self, channel: Channel) -> Option<&[f32]> {
        self.planes[channel.index()].as_deref()
    }

    /// The whole writable plane for `channel`, or `None` if absent.
    #[inline]
    pub fn plane_mut(&mut self, channel: Channel) -> Option<&mut [f32]> {
        self.planes[channel.index()].as_deref_mut()
    }

    fn row_out_of_bounds(&self, y: usize) -> Error {
        Error::OutOfBounds {
            x: 0,
            y: y.min(i32::MAX as usize) as i32,
            r: self.width.min(i32::MAX as usize) as i32,
            t: y.saturating_add(1).min(i32::MAX as usize) as i32,
            width: self.width,
            height: self.height,
        }
    }
}
