//! The scanline render driver.
//!
//! [`render`] drives one operator over a request region, one engine
//! invocation per scanline. Scanlines are independent by contract (operators
//! are pure functions of their inputs), so with the default `parallel`
//! feature rows are computed on the rayon thread pool.
//!
//! The driver owns what a compositing host would own around an operator:
//! arity checking, output channel negotiation, region-of-interest
//! propagation, buffer allocation, and output assembly.

use crate::error::{HostError, HostResult};
use crate::source::RowSource;
use rowfx_core::{ChannelSet, PlanarImage, Region, Row};
use rowfx_ops::RowOp;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Renders `op` over `region`, reading input rows from `source`.
///
/// The output image covers the region (its row 0 is the region's `y`), with
/// one plane per negotiated output channel. Negotiation intersects
/// `requested` with what the operator declares it produces; requesting
/// channels the operator never writes narrows the output rather than
/// failing.
///
/// A degenerate region or an empty negotiated channel set produces a
/// zero-filled (possibly zero-sized) image with no engine invocations.
pub fn render(
    op: &dyn RowOp,
    source: &dyn RowSource,
    region: Region,
    requested: ChannelSet,
) -> HostResult<PlanarImage> {
    let info = op.info();
    let arity = op.input_arity();
    if !arity.accepts(1) {
        return Err(HostError::ArityMismatch {
            name: info.name.to_string(),
            min: arity.min,
            max: arity.max,
            got: 1,
        });
    }

    let negotiated = requested & op.out_channels(source.channels());
    if negotiated != requested {
        debug!(
            op = info.name,
            requested = %requested,
            produced = %negotiated,
            "request narrowed to operator output channels"
        );
    }

    let mut output = PlanarImage::new(region.width(), region.height(), negotiated)?;
    if region.is_empty() || negotiated.is_empty() {
        return Ok(output);
    }

    // Propagate the region of interest upstream before any row is computed.
    let request = op.request(region, negotiated);
    debug!(
        op = info.name,
        x = request.region.x,
        y = request.region.y,
        r = request.region.r,
        t = request.region.t,
        channels = %request.channels,
        "upstream request"
    );

    let span = region.span();
    let compute = |y: i32| -> HostResult<Row> {
        let input = source.fetch(y, span, request.channels)?;
        let mut out = Row::new(span, negotiated);
        op.engine(y, span, negotiated, &input.as_view(), &mut out)?;
        Ok(out)
    };

    #[cfg(feature = "parallel")]
    let rows: Vec<Row> = region
        .rows()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(compute)
        .collect::<HostResult<_>>()?;

    #[cfg(not(feature = "parallel"))]
    let rows: Vec<Row> = region.rows().map(compute).collect::<HostResult<_>>()?;

    for (i, mut row) in rows.into_iter().enumerate() {
        for channel in negotiated.iter() {
            let samples = row
                .take(channel)
                .ok_or(rowfx_core::Error::ChannelMissing { channel })?;
            output.row_mut(channel, i)?.copy_from_slice(&samples);
        }
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ImageSource;
    use approx::assert_relative_eq;
    use rowfx_core::{Channel, RowView, Span};
    use rowfx_ops::{GreyAverage, InputArity, OpInfo, OpsResult};

    fn gradient_image(width: usize, height: usize) -> PlanarImage {
        let mut img = PlanarImage::new(width, height, ChannelSet::rgb()).unwrap();
        for channel in ChannelSet::rgb().iter() {
            let scale = (channel.index() + 1) as f32;
            let plane = img.plane_mut(channel).unwrap();
            for (i, v) in plane.iter_mut().enumerate() {
                *v = scale * i as f32 / (width * height) as f32;
            }
        }
        img
    }

    #[test]
    fn grey_average_over_image() {
        let img = gradient_image(8, 6);
        let source = ImageSource::new(&img);
        let op = GreyAverage::new();

        let out = render(&op, &source, img.region(), ChannelSet::rgb()).unwrap();
        assert_eq!(out.width(), 8);
        assert_eq!(out.height(), 6);

        for y in 0..6 {
            for x in 0..8 {
                let expected = (img.row(Channel::Red, y).unwrap()[x]
                    + img.row(Channel::Green, y).unwrap()[x]
                    + img.row(Channel::Blue, y).unwrap()[x])
                    / 3.0;
                for channel in ChannelSet::rgb().iter() {
                    assert_relative_eq!(
                        out.row(channel, y).unwrap()[x],
                        expected,
                        max_relative = 1e-6
                    );
                }
            }
        }
    }

    #[test]
    fn sub_region_render() {
        let img = gradient_image(8, 8);
        let source = ImageSource::new(&img);
        let op = GreyAverage::new();

        let region = Region::new(2, 3, 6, 5);
        let out = render(&op, &source, region, ChannelSet::from(Channel::Red)).unwrap();
        assert_eq!(out.width(), 4);
        assert_eq!(out.height(), 2);

        let expected = (img.row(Channel::Red, 3).unwrap()[2]
            + img.row(Channel::Green, 3).unwrap()[2]
            + img.row(Channel::Blue, 3).unwrap()[2])
            / 3.0;
        assert_relative_eq!(out.row(Channel::Red, 0).unwrap()[0], expected, max_relative = 1e-6);
    }

    #[test]
    fn degenerate_region_makes_no_engine_calls() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        #[derive(Debug)]
        struct CountingOp(AtomicUsize);
        impl RowOp for CountingOp {
            fn info(&self) -> OpInfo {
                OpInfo {
                    name: "counting",
                    menu: "",
                    help: "",
                }
            }
            fn out_channels(&self, upstream: ChannelSet) -> ChannelSet {
                upstream
            }
            fn in_channels(&self, requested: ChannelSet) -> ChannelSet {
                requested
            }
            fn engine(
                &self,
                _y: i32,
                _span: Span,
                _channels: ChannelSet,
                _input: &RowView<'_>,
                _out: &mut Row,
            ) -> OpsResult<()> {
                self.0.fetch_add(1, Ordering::Relaxed);
                Ok(())
            }
        }

        let img = gradient_image(4, 4);
        let source = ImageSource::new(&img);
        let op = CountingOp(AtomicUsize::new(0));

        // Empty span
        render(&op, &source, Region::new(2, 0, 2, 4), ChannelSet::rgb()).unwrap();
        // Empty row range
        render(&op, &source, Region::new(0, 4, 4, 1), ChannelSet::rgb()).unwrap();
        // Empty channel request
        render(&op, &source, img.region(), ChannelSet::empty()).unwrap();

        assert_eq!(op.0.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn request_narrows_to_produced_channels() {
        let img = gradient_image(4, 4);
        let source = ImageSource::new(&img);
        let op = GreyAverage::new();

        let out = render(&op, &source, img.region(), ChannelSet::rgba()).unwrap();
        assert_eq!(out.channels(), ChannelSet::rgb());
        assert!(out.plane(Channel::Alpha).is_none());
    }

    #[test]
    fn arity_mismatch_is_rejected() {
        #[derive(Debug)]
        struct BinaryOp;
        impl RowOp for BinaryOp {
            fn info(&self) -> OpInfo {
                OpInfo {
                    name: "binary",
                    menu: "",
                    help: "",
                }
            }
            fn input_arity(&self) -> InputArity {
                InputArity::exactly(2)
            }
            fn out_channels(&self, upstream: ChannelSet) -> ChannelSet {
                upstream
            }
            fn in_channels(&self, requested: ChannelSet) -> ChannelSet {
                requested
            }
            fn engine(
                &self,
                _y: i32,
                _span: Span,
                _channels: ChannelSet,
                _input: &RowView<'_>,
                _out: &mut Row,
            ) -> OpsResult<()> {
                Ok(())
            }
        }

        let img = gradient_image(4, 4);
        let source = ImageSource::new(&img);
        let err = render(&BinaryOp, &source, img.region(), ChannelSet::rgb()).unwrap_err();
        assert!(matches!(err, HostError::ArityMismatch { got: 1, .. }));
    }

    #[test]
    fn render_is_idempotent() {
        let img = gradient_image(16, 16);
        let source = ImageSource::new(&img);
        let op = GreyAverage::new();

        let a = render(&op, &source, img.region(), ChannelSet::rgb()).unwrap();
        let b = render(&op, &source, img.region(), ChannelSet::rgb()).unwrap();
        for channel in ChannelSet::rgb().iter() {
            assert_eq!(a.plane(channel).unwrap(), b.plane(channel).unwrap());
        }
    }
}
