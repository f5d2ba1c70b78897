//! One-line status messages shown under the controls

use std::path::Path;

use crate::errors::ScoreError;

use super::session::RecordOutcome;

/// Whether a status line reports success or a recovered failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// The single status line; each new one replaces the last
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusLine {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }

    /// Status for a recovered error
    pub fn from_error(error: &ScoreError) -> Self {
        Self::error(error.to_string())
    }

    /// `station N record: S (id:X)` or `station N: OLD → NEW (id:X)`
    pub fn recorded(outcome: &RecordOutcome) -> Self {
        let id = outcome
            .current
            .identifier()
            .map(|id| format!(" (id:{})", id))
            .unwrap_or_default();

        let text = match &outcome.previous {
            Some(previous) => format!(
                "station {}: {} → {}{}",
                outcome.station, previous.score, outcome.current.score, id
            ),
            None => format!(
                "station {} record: {}{}",
                outcome.station, outcome.current.score, id
            ),
        };
        Self::info(text)
    }

    /// `exported: <file name>`
    pub fn exported(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::info(format!("exported: {}", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::{Record, Score, StationRange};

    fn outcome(previous: Option<&str>, current: &str, identifier: &str) -> RecordOutcome {
        let range = StationRange::default();
        RecordOutcome {
            station: range.check(7).unwrap(),
            previous: previous.map(|s| Record::new(s.parse::<Score>().unwrap(), "")),
            current: Record::new(current.parse::<Score>().unwrap(), identifier),
            advanced_to: range.check(8).unwrap(),
        }
    }

    #[test]
    fn test_first_record_message() {
        let line = StatusLine::recorded(&outcome(None, "3.5", "A1"));
        assert_eq!(line.kind, StatusKind::Info);
        assert_eq!(line.text, "station 7 record: 3.5 (id:A1)");
    }

    #[test]
    fn test_first_record_without_identifier() {
        let line = StatusLine::recorded(&outcome(None, "3.0", " "));
        assert_eq!(line.text, "station 7 record: 3.0");
    }

    #[test]
    fn test_rescore_message() {
        let line = StatusLine::recorded(&outcome(Some("2.75"), "4.25", "B2"));
        assert_eq!(line.text, "station 7: 2.75 → 4.25 (id:B2)");
    }

    #[test]
    fn test_error_message() {
        let line = StatusLine::from_error(&ScoreError::NothingToExport);
        assert_eq!(line.kind, StatusKind::Error);
        assert_eq!(line.text, "no data to export");
    }

    #[test]
    fn test_exported_message_uses_file_name() {
        let line = StatusLine::exported(Path::new("/home/me/Documents/scores_20240101_120000.xlsx"));
        assert_eq!(line.text, "exported: scores_20240101_120000.xlsx");
    }
}
