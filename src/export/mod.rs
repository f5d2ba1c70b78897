//! Spreadsheet export
//!
//! Turns a ledger snapshot into a single-sheet `.xlsx` workbook.

mod filename;
mod workbook;

pub use filename::export_file_name;
pub use workbook::{write_workbook, WorkbookExporter, HEADERS};
