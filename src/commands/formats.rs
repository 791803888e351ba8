// Formats command for listing supported config formats

use crate::formats::REGISTRY;
use crate::ui;

pub fn formats() -> anyhow::Result<()> {
    ui::header("Supported config formats:");
    for extension in REGISTRY.extensions() {
        ui::dim(&format!("  .{}", extension));
    }
    Ok(())
}
