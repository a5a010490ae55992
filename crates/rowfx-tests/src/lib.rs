//! Integration tests for ROWFX crates.
//!
//! This crate contains end-to-end tests that verify the interaction
//! between rowfx-core, rowfx-ops, and rowfx-host.
