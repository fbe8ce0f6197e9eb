//! Where the config file lives, and writing the commented template there.

use concierge_common::ConfigError;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::template::default_config_toml;

const APP_DIR: &str = "concierge";
const CONFIG_FILE: &str = "config.toml";

/// `<base>/concierge/config.toml`.
pub fn config_path_in(base: &Path) -> PathBuf {
    base.join(APP_DIR).join(CONFIG_FILE)
}

/// Platform config file path, e.g. `~/.config/concierge/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|base| config_path_in(&base))
        .ok_or(ConfigError::NoConfigDir)
}

/// Write the commented template to `path`, creating parent directories.
///
/// An existing file is left untouched. Returns whether a file was written.
pub fn create_default_config(path: &Path) -> Result<bool, ConfigError> {
    let write_error = |e: std::io::Error| ConfigError::WriteError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!("config already present at {}", path.display());
            return Ok(false);
        }
        Err(e) => return Err(write_error(e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(write_error)?;

    info!("created default config at {}", path.display());
    Ok(true)
}
