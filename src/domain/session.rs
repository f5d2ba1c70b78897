//! Scoring session
//!
//! Navigator and ledger held together as the one piece of state the UI
//! drives. Nothing here knows about rendering.

use std::path::PathBuf;

use crate::errors::Result;
use crate::export::WorkbookExporter;
use crate::schemas::{Config, Record, Score, Station, StationRange};

use super::ledger::RecordLedger;
use super::navigator::StationNavigator;

/// What a single recording did, for the status line
#[derive(Debug, Clone, PartialEq)]
pub struct RecordOutcome {
    /// Station that was scored
    pub station: Station,
    /// Record replaced at that station, if any
    pub previous: Option<Record>,
    /// Record now stored
    pub current: Record,
    /// Station the pointer advanced to
    pub advanced_to: Station,
}

/// In-memory state of one scoring walk
#[derive(Debug, Clone)]
pub struct ScoringSession {
    navigator: StationNavigator,
    ledger: RecordLedger,
}

impl ScoringSession {
    /// Create an empty session at the first station
    pub fn new(range: StationRange, anchors: Vec<Station>) -> Self {
        Self {
            navigator: StationNavigator::new(range, anchors),
            ledger: RecordLedger::new(),
        }
    }

    /// Create an empty session from validated configuration.
    ///
    /// # Errors
    /// * `ConfigError` - If the station range or quick-jump anchors are invalid
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.station_range()?, config.quick_jump_anchors()?))
    }

    pub fn navigator(&self) -> &StationNavigator {
        &self.navigator
    }

    pub fn ledger(&self) -> &RecordLedger {
        &self.ledger
    }

    pub fn current_station(&self) -> Station {
        self.navigator.current()
    }

    /// Record at the current station, if scored
    pub fn current_record(&self) -> Option<&Record> {
        self.ledger.lookup(self.navigator.current())
    }

    /// Identifier bound to the current station, if any
    pub fn current_binding(&self) -> Option<&str> {
        self.ledger.binding_for(self.navigator.current())
    }

    pub fn jump_to(&mut self, n: i64) -> Result<Station> {
        self.navigator.jump_to(n)
    }

    pub fn jump_to_input(&mut self, text: &str) -> Result<Station> {
        self.navigator.jump_to_input(text)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Station {
        self.navigator.next()
    }

    pub fn previous(&mut self) -> Station {
        self.navigator.previous()
    }

    pub fn quick_jump(&mut self, anchor: Station) -> Station {
        self.navigator.quick_jump(anchor)
    }

    /// Score the current station and advance to the next one
    pub fn record_current(&mut self, score: Score, identifier: &str) -> RecordOutcome {
        let station = self.navigator.current();
        let previous = self.ledger.record(station, score, identifier);
        let current = Record::new(score, identifier);
        let advanced_to = self.navigator.next();

        RecordOutcome {
            station,
            previous,
            current,
            advanced_to,
        }
    }

    /// Write every record to a new workbook.
    ///
    /// # Errors
    /// * `NothingToExport` - If nothing has been scored
    /// * `ExportFailed` - If the workbook could not be written
    pub fn export(&self, exporter: &WorkbookExporter) -> Result<PathBuf> {
        exporter.export(&self.ledger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> ScoringSession {
        ScoringSession::from_config(&Config::default()).unwrap()
    }

    fn score(text: &str) -> Score {
        text.parse().unwrap()
    }

    #[test]
    fn test_record_advances() {
        let mut session = session();
        let outcome = session.record_current(score("3.5"), "A1");

        assert_eq!(outcome.station.get(), 1);
        assert_eq!(outcome.previous, None);
        assert_eq!(outcome.advanced_to.get(), 2);
        assert_eq!(session.current_station().get(), 2);

        let first = session.ledger().lookup(outcome.station).unwrap();
        assert_eq!(first.score, score("3.5"));
        assert_eq!(first.identifier(), Some("A1"));
        assert_eq!(session.current_binding(), None);
        assert_eq!(session.current_record(), None);
    }

    #[test]
    fn test_record_at_last_station_wraps() {
        let mut session = session();
        session.jump_to(100).unwrap();
        let outcome = session.record_current(score("4.0"), "");
        assert_eq!(outcome.advanced_to.get(), 1);
    }

    #[test]
    fn test_rescoring_reports_previous() {
        let mut session = session();
        session.record_current(score("2.5"), "cow-1");
        session.previous();

        assert_eq!(session.current_binding(), Some("cow-1"));
        let outcome = session.record_current(score("3.0"), "cow-1b");
        assert_eq!(outcome.previous.map(|r| r.score), Some(score("2.5")));
        assert_eq!(outcome.current.identifier(), Some("cow-1b"));
        assert_eq!(session.ledger().len(), 1);
    }

    #[test]
    fn test_failed_jumps_keep_station() {
        let mut session = session();
        session.jump_to(12).unwrap();

        let err = session.jump_to(150).unwrap_err();
        assert_eq!(err.code(), "OUT_OF_RANGE");
        let err = session.jump_to_input("abc").unwrap_err();
        assert_eq!(err.code(), "INPUT_PARSE");

        assert_eq!(session.current_station().get(), 12);
    }

    #[test]
    fn test_quick_jump_to_configured_anchor() {
        let mut session = session();
        let anchor = session.navigator().anchors()[2];
        assert_eq!(session.quick_jump(anchor).get(), 50);
        assert_eq!(session.current_station().get(), 50);
    }
}
