//! Path resolution utilities for herdscore
//!
//! Locates the configuration file and decides where exported workbooks go.

use std::path::PathBuf;

/// Directory name used under the platform config directory.
pub const APP_DIR_NAME: &str = "herdscore";

/// The working directory, or `.` when it cannot be read.
pub fn working_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Get the herdscore directory under the platform config directory.
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME))
}

/// Get the path to the default config.json file.
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.json"))
}

/// Capability that picks the directory exported workbooks are written to.
///
/// Injected into the exporter so the export step has no platform branching.
pub trait ExportDirResolver {
    fn resolve(&self) -> PathBuf;
}

/// The user's documents folder, or the working directory when there is none.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentsDir;

impl ExportDirResolver for DocumentsDir {
    fn resolve(&self) -> PathBuf {
        existing_dir_or(dirs::document_dir(), working_dir())
    }
}

/// A directory chosen in configuration or on the command line.
#[derive(Debug, Clone)]
pub struct FixedDir(pub PathBuf);

impl ExportDirResolver for FixedDir {
    fn resolve(&self) -> PathBuf {
        self.0.clone()
    }
}

/// Use `candidate` if it is an existing directory, otherwise `fallback`.
pub fn existing_dir_or(candidate: Option<PathBuf>, fallback: PathBuf) -> PathBuf {
    match candidate {
        Some(dir) if dir.is_dir() => dir,
        _ => fallback,
    }
}
