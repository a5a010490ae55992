//! CLI command implementations

pub mod apply;
pub mod list;

use anyhow::{bail, Result};
use rowfx_core::{Channel, ChannelSet};

/// Parses a channel set from a compact spec like `rgb`, `r`, or `rga`.
pub fn parse_channel_set(spec: &str) -> Result<ChannelSet> {
    let mut set = ChannelSet::empty();
    for ch in spec.chars() {
        let mut buf = [0u8; 4];
        match Channel::parse(ch.encode_utf8(&mut buf)) {
            Some(channel) => {
                set.insert(channel);
            }
            None => bail!("unknown channel '{ch}' in spec '{spec}' (use r, g, b, a, z)"),
        }
    }
    Ok(set)
}
