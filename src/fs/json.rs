//! Config file persistence
//!
//! The config is the only JSON document herdscore keeps on disk.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{Result, ScoreError};
use crate::schemas::Config;

/// Deserialize `path`; a missing file is `FileNotFound`, a bad shape `InvalidJson`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ScoreError::FileNotFound(path.display().to_string()))
        }
        Err(e) => return Err(e.into()),
    };

    serde_json::from_str(&content)
        .map_err(|e| ScoreError::InvalidJson(format!("{}: {}", path.display(), e)))
}

/// Pretty-print `data` into `path` through a sibling temp file, so readers
/// never see a half-written config.
pub fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let mut content =
        serde_json::to_vec_pretty(data).map_err(|e| ScoreError::InvalidJson(e.to_string()))?;
    content.push(b'\n');

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }

    let staging = path.with_extension("json.tmp");
    {
        let mut file = fs::File::create(&staging)?;
        file.write_all(&content)?;
        file.sync_all()?;
    }
    fs::rename(&staging, path)?;
    Ok(())
}

/// The config at `path`, or defaults when there is none yet.
pub fn read_config_or_default(path: &Path) -> Result<Config> {
    match read_json(path) {
        Err(ScoreError::FileNotFound(_)) => Ok(Config::default()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_json_file_not_found() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nonexistent.json");

        let result: Result<Config> = read_json(&path);
        assert!(matches!(result.unwrap_err(), ScoreError::FileNotFound(_)));
    }

    #[test]
    fn test_read_json_invalid_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("invalid.json");
        fs::write(&path, "not valid json {").unwrap();

        let result: Result<Config> = read_json(&path);
        assert!(matches!(result.unwrap_err(), ScoreError::InvalidJson(_)));
    }

    #[test]
    fn test_read_json_wrong_shape() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, r#"{"max_station": "lots"}"#).unwrap();

        let result: Result<Config> = read_json(&path);
        assert!(matches!(result.unwrap_err(), ScoreError::InvalidJson(_)));
    }

    #[test]
    fn test_write_and_read_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.json");

        let config = Config {
            max_station: 64,
            ..Config::default()
        };
        write_json(&path, &config).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());

        let read: Config = read_json(&path).unwrap();
        assert_eq!(read, config);
    }

    #[test]
    fn test_read_config_default_when_missing() {
        let temp = TempDir::new().unwrap();
        let config = read_config_or_default(&temp.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }
}
