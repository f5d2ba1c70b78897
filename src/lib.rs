//! herdscore - Livestock body-condition scoring along a row of stations
//!
//! This library provides the core functionality for the herdscore CLI, including:
//! - Schema types for stations, scores, records, and configuration
//! - Domain logic for station navigation and the record ledger
//! - Spreadsheet export of a scoring session
//! - File system utilities for config and export paths
//! - The terminal UI that drives a session

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod export;
pub mod fs;
pub mod schemas;
pub mod tui;

// Re-export commonly used types
pub use domain::{RecordLedger, ScoringSession, StationNavigator};
pub use errors::{Result, ScoreError};
pub use schemas::{Config, Record, Score, Station, StationRange};
