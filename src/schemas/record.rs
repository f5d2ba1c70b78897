//! Record schema - The latest scoring event at one station

use super::Score;

/// The latest score recorded at a station, with the animal identifier
/// entered at that moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub score: Score,
    pub identifier: Option<String>,
}

impl Record {
    /// Create a record, normalizing the raw identifier text
    pub fn new(score: Score, identifier: &str) -> Self {
        Record {
            score,
            identifier: normalize_identifier(identifier),
        }
    }

    /// The identifier, if one was entered
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }
}

/// Trim an identifier; empty text means no identifier.
pub fn normalize_identifier(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
