//! Configuration loading with defaults

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::errors::Result;
use crate::fs;
use crate::schemas::Config;

/// Settings given on the command line, applied on top of the file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub max_station: Option<u32>,
    pub export_dir: Option<PathBuf>,
}

/// Load and validate configuration.
///
/// With an explicit `path`, that file must exist. Otherwise the default
/// location under the platform config directory is read if present, and
/// built-in defaults are used if not. Overrides are applied last. When
/// `max_station` is overridden, quick-jump stations beyond it are dropped.
///
/// # Errors
/// * `FileNotFound` - If an explicit path does not exist
/// * `InvalidJson` - If the file cannot be parsed
/// * `ConfigError` - If the resulting configuration is invalid
pub fn load_config(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Config> {
    let mut config = match path {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            fs::read_json(path)?
        }
        None => match fs::get_config_path() {
            Some(default_path) => {
                debug!(path = %default_path.display(), "loading config if present");
                fs::read_config_or_default(&default_path)?
            }
            None => Config::default(),
        },
    };

    if let Some(max) = overrides.max_station {
        config.max_station = max;
        let before = config.quick_jump_stations.len();
        config.quick_jump_stations.retain(|&n| n <= max);
        if config.quick_jump_stations.len() != before {
            warn!(max_station = max, "dropped quick-jump stations beyond the last station");
        }
    }
    if let Some(dir) = &overrides.export_dir {
        config.export.directory = Some(dir.clone());
    }

    config.validate()?;
    Ok(config)
}
