//! Score schema - The fixed body-condition score scale

use crate::errors::{Result, ScoreError};

/// A body-condition score, one of the nine values on the 2.5 to 4.5 scale.
///
/// Stored in hundredths so equality and ordering are exact. The only way to
/// obtain a `Score` is through [`Score::ALL`] or the validating
/// constructors, so every value is on the scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Score(u16);

impl Score {
    /// The allowed scores, in button order.
    pub const ALL: [Score; 9] = [
        Score(250),
        Score(275),
        Score(300),
        Score(325),
        Score(350),
        Score(375),
        Score(400),
        Score(425),
        Score(450),
    ];

    /// Score in hundredths (e.g. 325 for 3.25)
    pub fn hundredths(self) -> u16 {
        self.0
    }

    /// Score as a number, for spreadsheet cells
    pub fn value(self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// 0-based position on the scale
    pub fn index(self) -> usize {
        usize::from((self.0 - Self::ALL[0].0) / 25)
    }

    /// Score at a 0-based position on the scale
    pub fn from_index(index: usize) -> Option<Score> {
        Self::ALL.get(index).copied()
    }

    /// Validate a numeric score against the scale.
    ///
    /// Every scale value is a multiple of 0.25 and so exact in `f64`; the
    /// comparison is exact too.
    ///
    /// # Errors
    /// * `InvalidScore` - If the value is not one of the nine allowed scores
    pub fn from_value(value: f64) -> Result<Score> {
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.value() == value)
            .ok_or_else(|| ScoreError::InvalidScore(value.to_string()))
    }

    /// Hundredths written by decimal text such as `3`, `3.25` or `4.50`.
    ///
    /// Digits past the hundredths must be zeros; nothing is rounded.
    fn parse_hundredths(text: &str) -> Option<u32> {
        let (whole, frac) = text.split_once('.').unwrap_or((text, ""));
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if !frac.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let frac = frac.trim_end_matches('0');
        if frac.len() > 2 {
            return None;
        }
        let whole: u32 = whole.parse().ok()?;
        let frac: u32 = format!("{:0<2}", frac).parse().ok()?;
        whole.checked_mul(100)?.checked_add(frac)
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        if frac % 10 == 0 {
            write!(f, "{}.{}", whole, frac / 10)
        } else {
            write!(f, "{}.{:02}", whole, frac)
        }
    }
}

impl std::str::FromStr for Score {
    type Err = ScoreError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Score::parse_hundredths(s.trim())
            .and_then(|h| Score::ALL.iter().copied().find(|score| u32::from(score.0) == h))
            .ok_or_else(|| ScoreError::InvalidScore(s.to_string()))
    }
}
