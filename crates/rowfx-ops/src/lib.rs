//! # rowfx-ops
//!
//! Row operators for scanline image processing.
//!
//! This crate defines the operator contract used by ROWFX render drivers and
//! the built-in operators that implement it.
//!
//! # Modules
//!
//! - [`op`] - The [`RowOp`] trait: channel negotiation, request propagation,
//!   and the per-scanline engine callback
//! - [`grey`] - RGB-averaging greyscale operator and its free-function kernel
//!
//! # Example
//!
//! ```rust
//! use rowfx_core::{Channel, ChannelSet, Row, RowView, Span};
//! use rowfx_ops::{GreyAverage, RowOp};
//!
//! let op = GreyAverage::new();
//! let span = Span::new(0, 2);
//!
//! let red = [0.0, 1.0];
//! let green = [0.0, 0.5];
//! let blue = [0.0, 0.5];
//! let mut input = RowView::new(span);
//! input.insert(Channel::Red, &red).unwrap();
//! input.insert(Channel::Green, &green).unwrap();
//! input.insert(Channel::Blue, &blue).unwrap();
//!
//! let mut out = Row::new(span, ChannelSet::rgb());
//! op.engine(0, span, ChannelSet::rgb(), &input, &mut out).unwrap();
//! assert!((out.channel(Channel::Green).unwrap()[1] - 2.0 / 3.0).abs() < 1e-6);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod grey;
pub mod op;

pub use error::{OpsError, OpsResult};
pub use grey::{average_rgb, GreyAverage};
pub use op::{InputArity, OpInfo, RowOp, RowRequest};
