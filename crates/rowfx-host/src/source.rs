//! Input row sourcing.
//!
//! A [`RowSource`] answers the one question an operator asks upstream:
//! "fetch the input row for segment `[x, r)` at row `y`, restricted to
//! channel set S". The returned [`Row`] is owned by the caller for the
//! lifetime of one engine invocation.

use crate::error::HostResult;
use rowfx_core::{ChannelSet, Error, PlanarImage, Row, Span};

/// Supplier of input rows for a scanline pipeline.
///
/// Implementations must be shareable across worker threads; the render
/// driver fetches rows concurrently.
pub trait RowSource: Send + Sync {
    /// Channels this source can supply.
    fn channels(&self) -> ChannelSet;

    /// Fetches the samples for segment `span` at row `y`, restricted to
    /// `channels`.
    ///
    /// Every requested channel must come back as an array of exactly
    /// `span.len()` samples. Requests outside the source's area or for
    /// channels it does not carry are contract violations.
    fn fetch(&self, y: i32, span: Span, channels: ChannelSet) -> HostResult<Row>;
}

/// A [`RowSource`] backed by an in-memory [`PlanarImage`] anchored at the
/// origin: columns `[0, width)`, rows `[0, height)`.
#[derive(Debug, Clone, Copy)]
pub struct ImageSource<'a> {
    image: &'a PlanarImage,
}

impl<'a> ImageSource<'a> {
    /// Wraps an image as a row source.
    pub fn new(image: &'a PlanarImage) -> Self {
        Self { image }
    }
}

impl RowSource for ImageSource<'_> {
    fn channels(&self) -> ChannelSet {
        self.image.channels()
    }

    fn fetch(&self, y: i32, span: Span, channels: ChannelSet) -> HostResult<Row> {
        let mut row = Row::new(span, channels);
        if span.is_empty() || channels.is_empty() {
            return Ok(row);
        }

        let width = self.image.width();
        let height = self.image.height();
        let in_bounds = y >= 0
            && (y as usize) < height
            && span.x >= 0
            && span.r as i64 <= width as i64;
        if !in_bounds {
            return Err(Error::OutOfBounds {
                x: span.x,
                y,
                r: span.r,
                t: y.saturating_add(1),
                width,
                height,
            }
            .into());
        }

        let (x0, x1) = (span.x as usize, span.r as usize);
        for channel in channels.iter() {
            let src = self.image.row(channel, y as usize)?;
            row.try_writable(channel)?.copy_from_slice(&src[x0..x1]);
        }
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HostError;
    use rowfx_core::Channel;

    fn ramp_image() -> PlanarImage {
        let mut img = PlanarImage::new(4, 2, ChannelSet::rgb()).unwrap();
        for channel in ChannelSet::rgb().iter() {
            let plane = img.plane_mut(channel).unwrap();
            for (i, v) in plane.iter_mut().enumerate() {
                *v = i as f32;
            }
        }
        img
    }

    #[test]
    fn fetch_copies_segment() {
        let img = ramp_image();
        let source = ImageSource::new(&img);
        let row = source
            .fetch(1, Span::new(1, 3), ChannelSet::rgb())
            .unwrap();
        assert_eq!(row.channel(Channel::Red).unwrap(), &[5.0, 6.0]);
    }

    #[test]
    fn fetch_respects_channel_restriction() {
        let img = ramp_image();
        let source = ImageSource::new(&img);
        let row = source
            .fetch(0, Span::new(0, 4), ChannelSet::from(Channel::Green))
            .unwrap();
        assert!(row.channel(Channel::Red).is_none());
        assert_eq!(row.channel(Channel::Green).unwrap().len(), 4);
    }

    #[test]
    fn fetch_empty_span() {
        let img = ramp_image();
        let source = ImageSource::new(&img);
        let row = source.fetch(0, Span::new(3, 3), ChannelSet::rgb()).unwrap();
        assert_eq!(row.channel(Channel::Blue).unwrap().len(), 0);
    }

    #[test]
    fn fetch_out_of_bounds_row() {
        let img = ramp_image();
        let source = ImageSource::new(&img);
        let err = source.fetch(2, Span::new(0, 4), ChannelSet::rgb()).unwrap_err();
        assert!(matches!(err, HostError::Buffer(e) if e.is_bounds_error()));
    }

    #[test]
    fn fetch_out_of_bounds_span() {
        let img = ramp_image();
        let source = ImageSource::new(&img);
        assert!(source.fetch(0, Span::new(-1, 2), ChannelSet::rgb()).is_err());
        assert!(source.fetch(0, Span::new(2, 5), ChannelSet::rgb()).is_err());
    }

    #[test]
    fn fetch_missing_channel() {
        let img = ramp_image();
        let source = ImageSource::new(&img);
        let err = source
            .fetch(0, Span::new(0, 2), ChannelSet::from(Channel::Alpha))
            .unwrap_err();
        assert!(matches!(
            err,
            HostError::Buffer(Error::ChannelMissing { .. })
        ));
    }
}
