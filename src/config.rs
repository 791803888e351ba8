// Config module for configuration-root resolution

use crate::constants;
use std::path::PathBuf;

/// Directory all descriptor directories are resolved beneath.
/// PLUGCONF_DIR overrides the default.
pub fn config_root() -> PathBuf {
    std::env::var(constants::CONFIG_ROOT_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(constants::DEFAULT_CONFIG_ROOT))
}
