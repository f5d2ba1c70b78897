//! Domain logic for station navigation and score bookkeeping

mod ledger;
mod navigator;
mod session;
mod status;


pub use ledger::{ExportRow, ExportRows, RecordLedger};
pub use navigator::StationNavigator;
pub use session::{RecordOutcome, ScoringSession};
pub use status::{StatusKind, StatusLine};
