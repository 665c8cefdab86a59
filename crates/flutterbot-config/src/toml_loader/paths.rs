//! Where FlutterBot keeps its files, and first-run creation of `config.toml`.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use flutterbot_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

/// Per-user FlutterBot directory: `config.toml` and an optional `.env`.
///
/// `None` when the platform has no config directory (no `$HOME`).
pub fn app_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("flutterbot"))
}

pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    app_dir()
        .map(|dir| dir.join("config.toml"))
        .ok_or_else(|| {
            ConfigError::ParseError("no per-user config directory on this platform".into())
        })
}

/// Write the commented template to `path`. An existing file is left alone,
/// so a config written by a concurrent first run is never clobbered.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_err = |e: std::io::Error| {
        ConfigError::ParseError(format!("cannot write {}: {e}", path.display()))
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(()),
        Err(e) => return Err(write_err(e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(write_err)?;

    info!("wrote starter config to {}", path.display());
    Ok(())
}
