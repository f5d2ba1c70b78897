//! Error types for herdscore
//!
//! Each error type has a corresponding error code for programmatic handling.
//! The `Display` text of the session errors doubles as the one-line status
//! message shown to the operator.

use thiserror::Error;

/// Result type alias for herdscore operations
pub type Result<T> = std::result::Result<T, ScoreError>;

/// Main error type for all herdscore operations
#[derive(Debug, Error)]
pub enum ScoreError {
    /// Station text is not an integer
    #[error("please enter a valid station number")]
    InvalidStationInput(String),

    /// Station number outside the configured range, as the operator wrote it
    #[error("station {station} out of 1-{max}")]
    StationOutOfRange { station: String, max: u32 },

    /// Score is not one of the allowed values
    #[error("invalid score: {0}")]
    InvalidScore(String),

    /// Export requested on an empty ledger
    #[error("no data to export")]
    NothingToExport,

    /// Workbook could not be written
    #[error("export failed: {0}")]
    ExportFailed(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScoreError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            ScoreError::InvalidStationInput(_) => "INPUT_PARSE",
            ScoreError::StationOutOfRange { .. } => "OUT_OF_RANGE",
            ScoreError::InvalidScore(_) => "INVALID_SCORE",
            ScoreError::NothingToExport => "EXPORT_EMPTY",
            ScoreError::ExportFailed(_) => "EXPORT_IO",
            ScoreError::ConfigError(_) => "CONFIG_ERROR",
            ScoreError::InvalidJson(_) => "INVALID_JSON",
            ScoreError::FileNotFound(_) => "FILE_NOT_FOUND",
            ScoreError::Io(_) => "IO_ERROR",
        }
    }

    /// Whether the error is recovered in place by showing a status line.
    ///
    /// These never end the session and never change its state.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ScoreError::InvalidStationInput(_)
                | ScoreError::StationOutOfRange { .. }
                | ScoreError::NothingToExport
                | ScoreError::ExportFailed(_)
        )
    }

    /// Wrap an export-side failure with its reason
    pub fn export<E: std::fmt::Display>(error: E) -> Self {
        ScoreError::ExportFailed(error.to_string())
    }
}

/// Convert an error to an appropriate exit code
pub fn to_exit_code(error: &ScoreError) -> i32 {
    match error {
        ScoreError::ConfigError(_) | ScoreError::InvalidJson(_) => 78, // EX_CONFIG
        _ => 1,
    }
}
