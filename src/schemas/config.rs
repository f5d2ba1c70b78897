//! Config schema - Configuration for herdscore

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ScoreError};

use super::{Station, StationRange};

/// Characters Excel does not allow in a sheet name
const FORBIDDEN_SHEET_CHARS: &[char] = &['[', ']', ':', '*', '?', '/', '\\'];

/// Longest sheet name Excel accepts
const MAX_SHEET_NAME_LEN: usize = 31;

/// Spreadsheet export configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// File name prefix, followed by `_<YYYYMMDD>_<HHMMSS>.xlsx`
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    /// Name of the single worksheet
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,

    /// Destination directory (documents folder when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            file_prefix: default_file_prefix(),
            sheet_name: default_sheet_name(),
            directory: None,
        }
    }
}

/// Main configuration for herdscore
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Number of stations in the row
    #[serde(default = "default_max_station")]
    pub max_station: u32,

    /// Stations reachable with a single quick-jump key
    #[serde(default = "default_quick_jump_stations")]
    pub quick_jump_stations: Vec<u32>,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,
}

fn default_schema_version() -> u32 {
    1
}

fn default_max_station() -> u32 {
    StationRange::DEFAULT_MAX
}

fn default_quick_jump_stations() -> Vec<u32> {
    vec![1, 25, 50, 75, 100]
}

fn default_file_prefix() -> String {
    "body_condition_scores".to_string()
}

fn default_sheet_name() -> String {
    "Body Condition Scores".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_version: 1,
            max_station: StationRange::DEFAULT_MAX,
            quick_jump_stations: default_quick_jump_stations(),
            export: ExportConfig::default(),
        }
    }
}

impl Config {
    /// The configured station range.
    ///
    /// # Errors
    /// * `ConfigError` - If `max_station` is zero
    pub fn station_range(&self) -> Result<StationRange> {
        StationRange::new(self.max_station)
    }

    /// Quick-jump anchors validated against the station range.
    ///
    /// # Errors
    /// * `ConfigError` - If any anchor lies outside the range
    pub fn quick_jump_anchors(&self) -> Result<Vec<Station>> {
        let range = self.station_range()?;
        self.quick_jump_stations
            .iter()
            .map(|&n| {
                range.check(i64::from(n)).map_err(|_| {
                    ScoreError::ConfigError(format!(
                        "quick-jump station {} outside 1-{}",
                        n,
                        range.max()
                    ))
                })
            })
            .collect()
    }

    /// Check the whole configuration before a session starts.
    ///
    /// # Errors
    /// * `ConfigError` - On the first invalid setting
    pub fn validate(&self) -> Result<()> {
        self.quick_jump_anchors()?;

        if self.export.file_prefix.trim().is_empty() {
            return Err(ScoreError::ConfigError(
                "export.file_prefix must not be empty".to_string(),
            ));
        }

        let sheet = &self.export.sheet_name;
        if sheet.trim().is_empty() || sheet.chars().count() > MAX_SHEET_NAME_LEN {
            return Err(ScoreError::ConfigError(format!(
                "export.sheet_name must be 1-{} characters",
                MAX_SHEET_NAME_LEN
            )));
        }
        if let Some(c) = sheet.chars().find(|c| FORBIDDEN_SHEET_CHARS.contains(c)) {
            return Err(ScoreError::ConfigError(format!(
                "export.sheet_name contains forbidden character '{}'",
                c
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.schema_version, 1);
        assert_eq!(config.max_station, 100);
        assert_eq!(config.quick_jump_stations, vec![1, 25, 50, 75, 100]);
        assert_eq!(config.export.file_prefix, "body_condition_scores");
        assert_eq!(config.export.sheet_name, "Body Condition Scores");
        assert_eq!(config.export.directory, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_partial_json() {
        let json = r#"{"max_station": 40, "quick_jump_stations": [1, 20, 40]}"#;
        let parsed: Config = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.max_station, 40);
        assert_eq!(parsed.quick_jump_stations, vec![1, 20, 40]);
        assert_eq!(parsed.export.file_prefix, "body_condition_scores");
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn test_config_json_round_trip() {
        let mut config = Config::default();
        config.export.directory = Some(PathBuf::from("/tmp/scores"));
        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_anchor_outside_range_rejected() {
        let config = Config {
            max_station: 50,
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.code(), "CONFIG_ERROR");
        assert!(err.to_string().contains("quick-jump station 75"));
    }

    #[test]
    fn test_zero_stations_rejected() {
        let config = Config {
            max_station: 0,
            quick_jump_stations: vec![],
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_sheet_name_rules() {
        let mut config = Config::default();
        config.export.sheet_name = "scores/2024".to_string();
        assert!(config.validate().is_err());

        config.export.sheet_name = "x".repeat(32);
        assert!(config.validate().is_err());

        config.export.sheet_name = "x".repeat(31);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_prefix_rejected() {
        let mut config = Config::default();
        config.export.file_prefix = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
