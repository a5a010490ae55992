//! List command: show registered operators.

use anyhow::Result;
use rowfx_host::OpRegistry;

/// Runs the list command.
pub fn run() -> Result<()> {
    let registry = OpRegistry::with_builtins();
    for name in registry.list() {
        if let Some(info) = registry.info(name) {
            println!("{:<16} {:<24} {}", info.name, info.menu, info.help);
        }
    }
    Ok(())
}
