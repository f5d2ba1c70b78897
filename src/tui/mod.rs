//! Terminal User Interface (TUI) module
//!
//! Single screen for walking the station row: fields on the left, the
//! recorded score in the middle, score keys on the right.

pub mod events;
pub mod runner;
pub mod state;
pub mod widgets;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use events::{action_for_key, Action};
pub use runner::TuiRunner;
pub use state::{InputFocus, TuiState};
