//! Init-config command - Write the default configuration file

use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::{Result, ScoreError};
use crate::fs;
use crate::schemas::Config;

/// Write `Config::default()` to `path`, or the default location.
///
/// # Errors
/// * `ConfigError` - If the file exists and `force` is not set, or no
///   config directory can be determined
/// * `Io` - If the file cannot be written
pub fn run(path: Option<&Path>, force: bool) -> Result<PathBuf> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => fs::get_config_path().ok_or_else(|| {
            ScoreError::ConfigError("no config directory on this platform; use --config".to_string())
        })?,
    };

    if path.exists() && !force {
        return Err(ScoreError::ConfigError(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    fs::write_json(&path, &Config::default())?;
    info!(path = %path.display(), "wrote default config");
    Ok(path)
}
