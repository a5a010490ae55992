//! # rowfx-host
//!
//! The embedding side of a scanline pipeline: everything a compositing
//! application owns around its row operators.
//!
//! # Modules
//!
//! - [`registry`] - Explicit operator registry mapping names to factories
//! - [`source`] - Fetching input rows for a scanline segment
//! - [`render`] - The multi-threaded scanline render driver
//!
//! # Example
//!
//! ```rust
//! use rowfx_core::{ChannelSet, PlanarImage};
//! use rowfx_host::{render, ImageSource, OpRegistry};
//!
//! let registry = OpRegistry::with_builtins();
//! let op = registry.create("grey_average").unwrap();
//!
//! let input = PlanarImage::new(16, 16, ChannelSet::rgb()).unwrap();
//! let source = ImageSource::new(&input);
//! let out = render(op.as_ref(), &source, input.region(), ChannelSet::rgb()).unwrap();
//! assert_eq!(out.width(), 16);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod registry;
pub mod render;
pub mod source;

pub use error::{HostError, HostResult};
pub use registry::{OpDescription, OpFactory, OpRegistry};
pub use render::render;
pub use source::{ImageSource, RowSource};
