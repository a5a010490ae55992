//! Apply command: run a registered operator over an image file.

use anyhow::{anyhow, Context, Result};
use clap::Args;
use rowfx_core::{Channel, ChannelSet, PlanarImage};
use rowfx_host::{render, ImageSource, OpRegistry};
use rowfx_ops::GreyAverage;
use std::path::PathBuf;
use tracing::{debug, info};

/// Arguments for `rowfx apply`.
#[derive(Args)]
pub struct ApplyArgs {
    /// Input image file
    pub input: PathBuf,

    /// Output image file
    #[arg(short, long)]
    pub output: PathBuf,

    /// Operator to apply
    #[arg(long, default_value = GreyAverage::NAME)]
    pub op: String,

    /// Output channels to request (compact spec: rgb, r, rga, ...)
    #[arg(long, default_value = "rgb")]
    pub channels: String,
}

/// Runs the apply command.
pub fn run(args: ApplyArgs, verbose: bool) -> Result<()> {
    let requested = super::parse_channel_set(&args.channels)?;

    let registry = OpRegistry::with_builtins();
    let op = registry
        .create(&args.op)
        .with_context(|| format!("operator '{}' (try `rowfx list`)", args.op))?;
    debug!(op = op.info().name, channels = %requested, "operator created");

    let decoded = image::open(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?
        .to_rgb32f();
    let planar = to_planar(&decoded)?;
    info!(
        width = planar.width(),
        height = planar.height(),
        "input decoded"
    );

    let source = ImageSource::new(&planar);
    let out = render(op.as_ref(), &source, planar.region(), requested)
        .context("render failed")?;

    let encoded = to_interleaved(&out);
    encoded
        .save(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    if verbose {
        println!(
            "{} -> {} ({}x{}, op {}, channels {})",
            args.input.display(),
            args.output.display(),
            out.width(),
            out.height(),
            args.op,
            out.channels()
        );
    }
    Ok(())
}

/// Splits an interleaved RGB f32 image into per-channel planes.
fn to_planar(img: &image::Rgb32FImage) -> Result<PlanarImage> {
    let (width, height) = (img.width() as usize, img.height() as usize);
    let mut planar = PlanarImage::new(width, height, ChannelSet::rgb())?;
    let raw = img.as_raw();
    for (idx, channel) in [Channel::Red, Channel::Green, Channel::Blue]
        .into_iter()
        .enumerate()
    {
        let plane = planar
            .plane_mut(channel)
            .ok_or_else(|| anyhow!("missing {channel} plane"))?;
        for (dst, px) in plane.iter_mut().zip(raw.chunks_exact(3)) {
            *dst = px[idx];
        }
    }
    Ok(planar)
}

/// Packs planar output back into an interleaved 8-bit RGB image.
///
/// Channels the render did not produce come out black.
fn to_interleaved(img: &PlanarImage) -> image::RgbImage {
    let (width, height) = (img.width() as u32, img.height() as u32);
    image::RgbImage::from_fn(width, height, |x, y| {
        let sample = |channel: Channel| -> u8 {
            img.row(channel, y as usize)
                .map(|row| (row[x as usize].clamp(0.0, 1.0) * 255.0).round() as u8)
                .unwrap_or(0)
        };
        image::Rgb([
            sample(Channel::Red),
            sample(Channel::Green),
            sample(Channel::Blue),
        ])
    })
}
