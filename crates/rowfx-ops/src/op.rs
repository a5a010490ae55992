//! The row operator contract.
//!
//! A [`RowOp`] is one node of a scanline pipeline. The embedding application
//! owns scheduling, caching, and buffer memory; the operator only answers
//! negotiation questions and fills output rows:
//!
//! 1. [`RowOp::out_channels`] declares which channels the operator produces.
//! 2. [`RowOp::in_channels`] / [`RowOp::request`] declare which upstream
//!    channels and region must be fetched for a given output request.
//! 3. [`RowOp::engine`] computes one scanline segment.
//!
//! # Concurrency
//!
//! `engine` takes `&self` and may be invoked concurrently from multiple
//! worker threads, one invocation per scanline segment. Implementations must
//! be pure functions of their arguments: no instance-level mutable state and
//! no retained references to the row buffers after returning.

use crate::error::OpsResult;
use rowfx_core::{ChannelSet, Region, Row, RowView, Span};

/// Identity of an operator: how registries and UIs present it.
///
/// Mirrors the class-name / menu-path / help triple a compositing host
/// displays for a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpInfo {
    /// Unique operator name used for registry lookup.
    pub name: &'static str,
    /// Menu path under which a UI would list the operator.
    pub menu: &'static str,
    /// One-line user-facing description.
    pub help: &'static str,
}

/// How many upstream inputs an operator consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputArity {
    /// Minimum number of inputs.
    pub min: usize,
    /// Maximum number of inputs.
    pub max: usize,
}

impl InputArity {
    /// Arity for an operator taking exactly `n` inputs.
    #[inline]
    pub const fn exactly(n: usize) -> Self {
        Self { min: n, max: n }
    }

    /// Returns `true` if `n` inputs satisfy this arity.
    #[inline]
    pub const fn accepts(self, n: usize) -> bool {
        n >= self.min && n <= self.max
    }
}

/// A region-of-interest request propagated to an upstream source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRequest {
    /// Area the operator will read.
    pub region: Region,
    /// Channels the operator will read within that area.
    pub channels: ChannelSet,
}

/// A scanline operator.
///
/// See the [module documentation](self) for the invocation protocol.
pub trait RowOp: std::fmt::Debug + Send + Sync {
    /// Identity used for registry lookup and UI display.
    fn info(&self) -> OpInfo;

    /// Number of upstream inputs this operator consumes.
    fn input_arity(&self) -> InputArity {
        InputArity::exactly(1)
    }

    /// Channels this operator's output carries, given the upstream set.
    fn out_channels(&self, upstream: ChannelSet) -> ChannelSet;

    /// Upstream channels that must be fetched to satisfy a request for
    /// `requested` output channels.
    fn in_channels(&self, requested: ChannelSet) -> ChannelSet;

    /// Region-of-interest propagated upstream for a request over `region`.
    ///
    /// The default forwards the region unchanged, restricted to
    /// [`in_channels`](Self::in_channels).
    fn request(&self, region: Region, requested: ChannelSet) -> RowRequest {
        RowRequest {
            region,
            channels: self.in_channels(requested),
        }
    }

    /// Computes one scanline segment.
    ///
    /// For every column of `span` and every channel in `channels`, writes one
    /// sample into `out`. `input` covers the same span, restricted to the
    /// channels this operator asked for via [`request`](Self::request). Must
    /// fully populate every requested channel before returning.
    fn engine(
        &self,
        y: i32,
        span: Span,
        channels: ChannelSet,
        input: &RowView<'_>,
        out: &mut Row,
    ) -> OpsResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_accepts() {
        let unary = InputArity::exactly(1);
        assert!(unary.accepts(1));
        assert!(!unary.accepts(0));
        assert!(!unary.accepts(2));

        let binary_or_less = InputArity { min: 0, max: 2 };
        assert!(binary_or_less.accepts(0));
        assert!(binary_or_less.accepts(2));
        assert!(!binary_or_less.accepts(3));
    }
}
