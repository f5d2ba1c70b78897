//! Schema types for herdscore
//!
//! Value types shared by the domain, export, and UI layers.

mod config;
mod record;
mod score;
mod station;

pub use config::{Config, ExportConfig};
pub use record::{normalize_identifier, Record};
pub use score::Score;
pub use station::{Station, StationRange};
