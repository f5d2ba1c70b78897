//! Export file naming

use chrono::NaiveDateTime;

/// `<prefix>_<YYYYMMDD>_<HHMMSS>.xlsx`
pub fn export_file_name(prefix: &str, at: NaiveDateTime) -> String {
    format!("{}_{}.xlsx", prefix, at.format("%Y%m%d_%H%M%S"))
}
