//! Explicit operator registry.
//!
//! The registry is a plain value owned by the embedding application; there
//! is no global or static registration side channel. Applications build one
//! at startup, register the operator factories they ship, and look
//! operators up by name when constructing a pipeline.

use crate::error::{HostError, HostResult};
use rowfx_ops::{GreyAverage, OpInfo, RowOp};
use std::collections::HashMap;
use tracing::warn;

/// Factory function producing a fresh operator instance.
pub type OpFactory = fn() -> Box<dyn RowOp>;

/// A registered operator: its identity plus the factory that builds it.
#[derive(Clone, Copy)]
pub struct OpDescription {
    /// Identity reported by the operator.
    pub info: OpInfo,
    /// Instance factory.
    pub factory: OpFactory,
}

impl std::fmt::Debug for OpDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpDescription")
            .field("info", &self.info)
            .finish_non_exhaustive()
    }
}

/// Registry mapping operator names to factories.
///
/// # Example
///
/// ```rust
/// use rowfx_host::OpRegistry;
/// use rowfx_ops::GreyAverage;
///
/// let mut registry = OpRegistry::new();
/// registry.register(|| Box::new(GreyAverage::new()));
/// assert!(registry.contains(GreyAverage::NAME));
///
/// let op = registry.create(GreyAverage::NAME).unwrap();
/// assert_eq!(op.info().name, GreyAverage::NAME);
/// ```
#[derive(Debug, Default)]
pub struct OpRegistry {
    ops: HashMap<&'static str, OpDescription>,
}

impl OpRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry preloaded with the operators this workspace ships.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(|| Box::new(GreyAverage::new()));
        registry
    }

    /// Registers an operator factory under the name its instances report.
    ///
    /// Re-registering a name replaces the previous entry.
    pub fn register(&mut self, factory: OpFactory) {
        let info = factory().info();
        if self.ops.insert(info.name, OpDescription { info, factory }).is_some() {
            warn!(op = info.name, "replacing previously registered operator");
        }
    }

    /// Creates a fresh instance of the named operator.
    pub fn create(&self, name: &str) -> HostResult<Box<dyn RowOp>> {
        let desc = self
            .ops
            .get(name)
            .ok_or_else(|| HostError::OpNotFound(name.to_string()))?;
        Ok((desc.factory)())
    }

    /// Returns `true` if an operator is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.ops.contains_key(name)
    }

    /// Identity of the named operator, if registered.
    pub fn info(&self, name: &str) -> Option<OpInfo> {
        self.ops.get(name).map(|d| d.info)
    }

    /// Registered operator names in sorted order.
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.ops.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered operators.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns `true` if no operators are registered.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}
