//! Run command - Interactive scoring screen

use tracing::info;

use crate::domain::ScoringSession;
use crate::errors::Result;
use crate::export::WorkbookExporter;
use crate::schemas::Config;
use crate::tui::TuiRunner;

/// Start a fresh session and hand it to the TUI
pub fn run(config: &Config) -> Result<()> {
    let session = ScoringSession::from_config(config)?;
    let exporter = WorkbookExporter::from_config(&config.export);

    info!(
        max_station = config.max_station,
        export_dir = %exporter.target_dir().display(),
        "starting session"
    );

    TuiRunner::new(session, exporter).run()
}
