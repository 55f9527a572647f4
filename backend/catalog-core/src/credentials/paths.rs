//! Location of the openclaw config document.

use std::path::{Path, PathBuf};

use log::debug;

pub const OPENCLAW_DIR_NAME: &str = ".openclaw";
pub const OPENCLAW_CONFIG_FILE_NAME: &str = "openclaw.json";

/// `~/.openclaw/openclaw.json`, or `None` when no home directory is known.
pub fn openclaw_config_path() -> Option<PathBuf> {
    match dirs::home_dir() {
        Some(home) => Some(openclaw_config_path_in(&home)),
        None => {
            debug!("No home directory, skipping openclaw config lookup");
            None
        }
    }
}

pub fn openclaw_config_path_in(home: &Path) -> PathBuf {
    home.join(OPENCLAW_DIR_NAME).join(OPENCLAW_CONFIG_FILE_NAME)
}
