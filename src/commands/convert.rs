// Convert command for re-encoding a config file into another format

use crate::config;
use crate::formats::REGISTRY;
use crate::ui;
use std::path::Path;

pub fn convert(from: &str, to: &str) -> anyhow::Result<()> {
    let root = config::config_root();
    let src = root.join(from);
    let dst = root.join(to);

    let src_format = REGISTRY.get_or_error(&extension_of(&src, from)?)?;
    let dst_format = REGISTRY.get_or_error(&extension_of(&dst, to)?)?;

    let text = std::fs::read_to_string(&src)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", src.display(), e))?;
    let value = src_format.parse(&text)?;
    let rendered = dst_format.render(&value)?;

    if let Some(parent) = dst.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&dst, rendered)?;

    ui::success(&format!("Converted {} -> {}", from, to));
    Ok(())
}

fn extension_of(path: &Path, display: &str) -> anyhow::Result<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("'{}' has no file extension", display))
}
