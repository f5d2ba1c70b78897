//! Record ledger
//!
//! Latest score per station plus the identifier bound to each station.
//! Recording overwrites; no history is kept.

use std::collections::btree_map;
use std::collections::{BTreeMap, HashMap};
use std::iter::Enumerate;

use tracing::debug;

use crate::errors::{Result, ScoreError};
use crate::schemas::{Record, Score, Station};

/// One line of the export view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportRow<'a> {
    /// 1-based rank in station order
    pub index: usize,
    pub station: Station,
    pub score: Score,
    pub identifier: Option<&'a str>,
}

/// Station-ordered rows over a ledger snapshot.
///
/// Lazy and finite; clone it to walk the rows again.
#[derive(Debug, Clone)]
pub struct ExportRows<'a> {
    inner: Enumerate<btree_map::Iter<'a, Station, Record>>,
}

impl<'a> Iterator for ExportRows<'a> {
    type Item = ExportRow<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(i, (station, record))| ExportRow {
            index: i + 1,
            station: *station,
            score: record.score,
            identifier: record.identifier(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for ExportRows<'_> {}

/// Mapping from station to its latest record and bound identifier
#[derive(Debug, Clone, Default)]
pub struct RecordLedger {
    records: BTreeMap<Station, Record>,
    bindings: HashMap<Station, String>,
}

impl RecordLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `score` at `station`, replacing any earlier record.
    ///
    /// The identifier is trimmed; empty means none. The station's binding is
    /// set to the same identifier (cleared when none). Returns the record
    /// that was replaced.
    pub fn record(&mut self, station: Station, score: Score, identifier: &str) -> Option<Record> {
        let record = Record::new(score, identifier);

        match &record.identifier {
            Some(id) => {
                self.bindings.insert(station, id.clone());
            }
            None => {
                self.bindings.remove(&station);
            }
        }

        let previous = self.records.insert(station, record);
        debug!(
            %station,
            %score,
            previous = ?previous.as_ref().map(|r| r.score.to_string()),
            "recorded"
        );
        previous
    }

    /// The current record at `station`, if scored
    pub fn lookup(&self, station: Station) -> Option<&Record> {
        self.records.get(&station)
    }

    /// The identifier bound to `station`, if any
    pub fn binding_for(&self, station: Station) -> Option<&str> {
        self.bindings.get(&station).map(String::as_str)
    }

    /// Number of scored stations
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows for export, ordered by station.
    ///
    /// # Errors
    /// * `NothingToExport` - If no station has been scored
    pub fn export_rows(&self) -> Result<ExportRows<'_>> {
        if self.records.is_empty() {
            return Err(ScoreError::NothingToExport);
        }
        Ok(ExportRows {
            inner: self.records.iter().enumerate(),
        })
    }
}
