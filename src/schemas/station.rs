//! Station schema - Numbered positions along the scoring row

use std::num::IntErrorKind;

use crate::errors::{Result, ScoreError};

/// A station number known to lie inside its [`StationRange`].
///
/// Obtained only through [`StationRange::check`] and friends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Station(u32);

impl Station {
    /// The station number
    pub fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Station {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The closed range `[1, max]` of valid stations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationRange {
    max: u32,
}

impl StationRange {
    /// Number of stations when none is configured
    pub const DEFAULT_MAX: u32 = 100;

    /// Create a range `[1, max]`.
    ///
    /// # Errors
    /// * `ConfigError` - If `max` is zero
    pub fn new(max: u32) -> Result<Self> {
        if max == 0 {
            return Err(ScoreError::ConfigError(
                "max_station must be at least 1".to_string(),
            ));
        }
        Ok(StationRange { max })
    }

    /// Highest station number
    pub fn max(self) -> u32 {
        self.max
    }

    pub fn first(self) -> Station {
        Station(1)
    }

    pub fn last(self) -> Station {
        Station(self.max)
    }

    /// Whether `n` is a valid station number
    pub fn contains(self, n: i64) -> bool {
        n >= 1 && n <= i64::from(self.max)
    }

    /// Validate an integer station number.
    ///
    /// # Errors
    /// * `StationOutOfRange` - If `n` is outside `[1, max]`
    pub fn check(self, n: i64) -> Result<Station> {
        if self.contains(n) {
            // contains() bounds n to 1..=u32::MAX
            Ok(Station(n as u32))
        } else {
            Err(self.out_of_range(n.to_string()))
        }
    }

    /// Parse free-text station input.
    ///
    /// Surrounding whitespace is ignored. Integers too large to represent
    /// are out of range, reported with the digits as typed.
    ///
    /// # Errors
    /// * `InvalidStationInput` - If the text is not an integer
    /// * `StationOutOfRange` - If the integer is outside `[1, max]`
    pub fn parse(self, text: &str) -> Result<Station> {
        let trimmed = text.trim();
        match trimmed.parse::<i64>() {
            Ok(n) => self.check(n),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    Err(self.out_of_range(trimmed.to_string()))
                }
                _ => Err(ScoreError::InvalidStationInput(text.to_string())),
            },
        }
    }

    fn out_of_range(self, station: String) -> ScoreError {
        ScoreError::StationOutOfRange {
            station,
            max: self.max,
        }
    }

    /// The station after `station`, wrapping from `max` to 1
    pub fn succ(self, station: Station) -> Station {
        if station.0 >= self.max {
            Station(1)
        } else {
            Station(station.0 + 1)
        }
    }

    /// The station before `station`, wrapping from 1 to `max`
    pub fn pred(self, station: Station) -> Station {
        if station.0 <= 1 {
            Station(self.max)
        } else {
            Station(station.0 - 1)
        }
    }
}

impl Default for StationRange {
    fn default() -> Self {
        StationRange {
            max: Self::DEFAULT_MAX,
        }
    }
}
