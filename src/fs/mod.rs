//! File system utilities for herdscore
//!
//! Provides path resolution and JSON file operations.

mod json;
mod paths;

pub use json::{read_config_or_default, read_json, write_json};
pub use paths::{
    existing_dir_or, get_config_dir, get_config_path, DocumentsDir,
    ExportDirResolver, FixedDir, APP_DIR_NAME,
};
