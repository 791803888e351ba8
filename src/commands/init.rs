// Init command for creating the configuration root

use crate::config;
use crate::ui;

pub fn init() -> anyhow::Result<()> {
    let root = config::config_root();

    if root.is_dir() {
        ui::dim(&format!(
            "Config root detected at {}. Skipping initialization.",
            root.display()
        ));
        return Ok(());
    }

    std::fs::create_dir_all(&root)?;
    ui::success(&format!("Initialized config root at {}", root.display()));
    Ok(())
}
