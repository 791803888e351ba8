// Show command for printing a config file as JSON

#![allow(clippy::print_stdout)]

use crate::config;
use crate::formats::REGISTRY;
use log::debug;

pub fn show(path: &str) -> anyhow::Result<()> {
    let full = config::config_root().join(path);

    let extension = full
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("'{}' has no file extension", path))?;
    let format = REGISTRY.get_or_error(&extension)?;

    let text = std::fs::read_to_string(&full)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", full.display(), e))?;
    let value = format.parse(&text)?;

    debug!("Showing {} as {}", full.display(), extension);
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
