//! Station navigation
//!
//! The navigator owns the current-station pointer. It is always in range:
//! every operation either moves it to a valid station or leaves it alone.

use tracing::debug;

use crate::errors::Result;
use crate::schemas::{Station, StationRange};

/// Pointer over a fixed range of stations with wraparound stepping
#[derive(Debug, Clone)]
pub struct StationNavigator {
    range: StationRange,
    current: Station,
    anchors: Vec<Station>,
}

impl StationNavigator {
    /// Create a navigator at the first station.
    ///
    /// `anchors` are the quick-jump stations, already checked against `range`.
    pub fn new(range: StationRange, anchors: Vec<Station>) -> Self {
        Self {
            range,
            current: range.first(),
            anchors,
        }
    }

    pub fn current(&self) -> Station {
        self.current
    }

    pub fn range(&self) -> StationRange {
        self.range
    }

    /// Quick-jump stations in configured order
    pub fn anchors(&self) -> &[Station] {
        &self.anchors
    }

    /// Move to station `n`.
    ///
    /// # Errors
    /// * `StationOutOfRange` - If `n` is outside the range; the pointer is unchanged
    pub fn jump_to(&mut self, n: i64) -> Result<Station> {
        let station = self.range.check(n)?;
        debug!(from = %self.current, to = %station, "jump");
        self.current = station;
        Ok(station)
    }

    /// Move to the station typed by the operator.
    ///
    /// # Errors
    /// * `InvalidStationInput` - If the text is not an integer
    /// * `StationOutOfRange` - If the integer is outside the range
    ///
    /// The pointer is unchanged on error.
    pub fn jump_to_input(&mut self, text: &str) -> Result<Station> {
        let station = self.range.parse(text)?;
        debug!(from = %self.current, to = %station, "jump");
        self.current = station;
        Ok(station)
    }

    /// Step forward, wrapping from the last station to the first
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Station {
        self.current = self.range.succ(self.current);
        self.current
    }

    /// Step back, wrapping from the first station to the last
    pub fn previous(&mut self) -> Station {
        self.current = self.range.pred(self.current);
        self.current
    }

    /// Move to a quick-jump anchor
    pub fn quick_jump(&mut self, anchor: Station) -> Station {
        debug_assert!(self.range.contains(i64::from(anchor.get())));
        debug!(from = %self.current, to = %anchor, "quick jump");
        self.current = anchor;
        anchor
    }
}
