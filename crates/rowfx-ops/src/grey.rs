//! Greyscale conversion by RGB channel averaging.
//!
//! The kernel reduces the red/green/blue planes of a scanline segment to a
//! single mean intensity and broadcasts that value to every requested output
//! channel:
//!
//! ```text
//! mean(p) = (red[p] + green[p] + blue[p]) / 3
//! ```
//!
//! The divisor is the count of input channels summed, fixed at 3. It is
//! never the requested output channel count, so requesting a single output
//! channel yields the same values as requesting all three.

use crate::error::{OpsError, OpsResult};
use crate::op::{InputArity, OpInfo, RowOp};
use rowfx_core::{Channel, ChannelSet, Row, RowView, Span};
use tracing::trace;

/// Number of input channels summed per pixel; the fixed mean divisor.
const INPUT_CHANNELS: f32 = 3.0;

/// Row-wise RGB reduction: writes `(red[p] + green[p] + blue[p]) / 3` into
/// `out[p]` for every position.
///
/// All four slices must have equal length.
///
/// # Example
///
/// ```rust
/// use rowfx_ops::average_rgb;
///
/// let mut out = [0.0f32; 2];
/// average_rgb(&[0.0, 1.0], &[0.0, 0.5], &[0.0, 0.5], &mut out).unwrap();
/// assert_eq!(out[0], 0.0);
/// assert!((out[1] - 2.0 / 3.0).abs() < 1e-6);
/// ```
pub fn average_rgb(red: &[f32], green: &[f32], blue: &[f32], out: &mut [f32]) -> OpsResult<()> {
    let width = out.len();
    if red.len() != width || green.len() != width || blue.len() != width {
        return Err(OpsError::LengthMismatch(format!(
            "expected {} samples, got red={}, green={}, blue={}",
            width,
            red.len(),
            green.len(),
            blue.len()
        )));
    }
    for p in 0..width {
        out[p] = (red[p] + green[p] + blue[p]) / INPUT_CHANNELS;
    }
    Ok(())
}

/// Greyscale operator averaging the RGB channels of its single input.
///
/// - Output format carries the RGB triple regardless of the upstream set.
/// - Upstream requests are restricted to RGB.
/// - The engine broadcasts one mean value per column to every requested
///   output channel; an empty request performs no writes.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreyAverage;

impl GreyAverage {
    /// Registry name of this operator.
    pub const NAME: &'static str = "grey_average";

    /// Creates the operator.
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl RowOp for GreyAverage {
    fn info(&self) -> OpInfo {
        OpInfo {
            name: Self::NAME,
            menu: "Color/GreyAverage",
            help: "Average the RGB channels into a greyscale value.",
        }
    }

    fn input_arity(&self) -> InputArity {
        InputArity::exactly(1)
    }

    fn out_channels(&self, _upstream: ChannelSet) -> ChannelSet {
        ChannelSet::rgb()
    }

    fn in_channels(&self, _requested: ChannelSet) -> ChannelSet {
        ChannelSet::rgb()
    }

    fn engine(
        &self,
        y: i32,
        span: Span,
        channels: ChannelSet,
        input: &RowView<'_>,
        out: &mut Row,
    ) -> OpsResult<()> {
        trace!(y, x = span.x, r = span.r, %channels, "grey_average engine");

        // Degenerate requests perform no work at all.
        if channels.is_empty() || span.is_empty() {
            return Ok(());
        }

        let red = input.try_channel(Channel::Red)?;
        let green = input.try_channel(Channel::Green)?;
        let blue = input.try_channel(Channel::Blue)?;

        let mut mean = vec![0.0f32; span.len()];
        average_rgb(red, green, blue, &mut mean)?;

        for channel in channels.iter() {
            let dst = out.try_writable(channel)?;
            if dst.len() != mean.len() {
                return Err(rowfx_core::Error::span_mismatch(mean.len(), dst.len()).into());
            }
            dst.copy_from_slice(&mean);
        }
        Ok(())
    }
}
