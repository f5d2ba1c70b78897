//! Workbook writing

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use rust_xlsxwriter::{Format, Workbook};
use tracing::{info, warn};

use crate::domain::{ExportRows, RecordLedger};
use crate::errors::{Result, ScoreError};
use crate::fs::{DocumentsDir, ExportDirResolver, FixedDir};
use crate::schemas::ExportConfig;

use super::filename::export_file_name;

/// Header row, in column order
pub const HEADERS: [&str; 4] = ["total count", "station number", "score", "identifier"];

/// Write `rows` to a new single-sheet workbook at `path`.
///
/// Columns follow [`HEADERS`]. An absent identifier leaves its cell empty.
///
/// # Errors
/// * `ExportFailed` - If the sheet name is rejected or the file cannot be saved
pub fn write_workbook(path: &Path, sheet_name: &str, rows: ExportRows<'_>) -> Result<()> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name).map_err(ScoreError::export)?;

    for (col, header) in (0u16..).zip(HEADERS) {
        worksheet
            .write_string_with_format(0, col, header, &header_format)
            .map_err(ScoreError::export)?;
    }

    for row in rows {
        let line = u32::try_from(row.index).map_err(ScoreError::export)?;
        worksheet
            .write_number(line, 0, row.index as f64)
            .map_err(ScoreError::export)?;
        worksheet
            .write_number(line, 1, f64::from(row.station.get()))
            .map_err(ScoreError::export)?;
        worksheet
            .write_number(line, 2, row.score.value())
            .map_err(ScoreError::export)?;
        if let Some(identifier) = row.identifier {
            worksheet
                .write_string(line, 3, identifier)
                .map_err(ScoreError::export)?;
        }
    }

    workbook.save(path).map_err(ScoreError::export)?;
    Ok(())
}

/// Exports a ledger to a timestamped workbook in the resolved directory
pub struct WorkbookExporter {
    file_prefix: String,
    sheet_name: String,
    resolver: Box<dyn ExportDirResolver>,
}

impl WorkbookExporter {
    pub fn new(settings: &ExportConfig, resolver: Box<dyn ExportDirResolver>) -> Self {
        Self {
            file_prefix: settings.file_prefix.clone(),
            sheet_name: settings.sheet_name.clone(),
            resolver,
        }
    }

    /// Exporter writing to the configured directory, or the documents folder.
    pub fn from_config(settings: &ExportConfig) -> Self {
        let resolver: Box<dyn ExportDirResolver> = match &settings.directory {
            Some(dir) => Box::new(FixedDir(dir.clone())),
            None => Box::new(DocumentsDir),
        };
        Self::new(settings, resolver)
    }

    /// Directory the next export will be written to
    pub fn target_dir(&self) -> PathBuf {
        self.resolver.resolve()
    }

    /// Export with the current local time in the file name.
    ///
    /// # Errors
    /// * `NothingToExport` - If the ledger is empty; nothing is written
    /// * `ExportFailed` - If the directory or workbook cannot be written
    pub fn export(&self, ledger: &RecordLedger) -> Result<PathBuf> {
        self.export_at(ledger, Local::now().naive_local())
    }

    /// Export with an explicit timestamp in the file name.
    pub fn export_at(&self, ledger: &RecordLedger, at: NaiveDateTime) -> Result<PathBuf> {
        let rows = ledger.export_rows()?;
        let count = rows.len();

        let dir = self.resolver.resolve();
        fs::create_dir_all(&dir).map_err(|e| {
            warn!(dir = %dir.display(), error = %e, "cannot create export directory");
            ScoreError::export(e)
        })?;

        let path = dir.join(export_file_name(&self.file_prefix, at));
        write_workbook(&path, &self.sheet_name, rows).inspect_err(|e| {
            warn!(path = %path.display(), error = %e, "export failed");
        })?;

        info!(path = %path.display(), rows = count, "exported");
        Ok(path)
    }
}
