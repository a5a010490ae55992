//! # rowfx-core
//!
//! Core types for scanline-oriented image processing.
//!
//! This crate provides the foundational types used throughout the ROWFX
//! ecosystem:
//!
//! - [`Channel`], [`ChannelSet`] - Named per-pixel planes and bitset masks
//! - [`Span`], [`Region`] - Half-open scanline segments and request regions
//! - [`Row`], [`RowView`] - Per-channel sample buffers for one scanline
//! - [`PlanarImage`] - Owned per-channel image planes
//!
//! ## Design Philosophy
//!
//! Everything here is built around the scanline model used by compositing
//! engines: image operators never see whole images, only one horizontal
//! segment `[x, r)` at a fixed row `y`, with one contiguous `f32` sample
//! array per channel. Buffers for a segment are owned by the caller for the
//! duration of one invocation, so row operators stay pure and can be driven
//! from many worker threads at once.
//!
//! ## Crate Structure
//!
//! This crate is the foundation of ROWFX and has no internal dependencies.
//! All other ROWFX crates depend on `rowfx-core`:
//!
//! ```text
//! rowfx-core (this crate)
//!    ^
//!    |
//!    +-- rowfx-ops (row operators)
//!    +-- rowfx-host (registry, sources, render driver)
//!    +-- rowfx-cli (demo host application)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization for channel and region types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod channel;
pub mod error;
pub mod image;
pub mod row;
pub mod span;

// Re-exports for convenience
pub use channel::*;
pub use error::*;
pub use image::*;
pub use row::*;
pub use span::*;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use rowfx_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::channel::{Channel, ChannelSet};
    pub use crate::error::{Error, Result};
    pub use crate::image::PlanarImage;
    pub use crate::row::{Row, RowView};
    pub use crate::span::{Region, Span};
}
