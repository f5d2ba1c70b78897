//! TUI state management

use tracing::{debug, warn};

use crate::domain::{ScoringSession, StatusLine};
use crate::errors::ScoreError;
use crate::export::WorkbookExporter;
use crate::tui::events::Action;

/// Which part of the screen receives typed keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFocus {
    /// Score keys and navigation
    Scores,
    /// Animal identifier field
    Identifier,
    /// Station number field
    Station,
}

/// Main TUI state
#[derive(Debug, Clone)]
pub struct TuiState {
    pub session: ScoringSession,
    pub identifier_input: String,
    pub station_input: String,
    pub focus: InputFocus,
    pub status: Option<StatusLine>,
    pub should_quit: bool,
}

impl TuiState {
    /// Create TUI state over a fresh session
    pub fn new(session: ScoringSession) -> Self {
        let mut state = Self {
            session,
            identifier_input: String::new(),
            station_input: String::new(),
            focus: InputFocus::Scores,
            status: None,
            should_quit: false,
        };
        state.sync_inputs();
        state
    }

    /// Apply one action; the only place session state changes.
    pub fn apply(&mut self, action: Action, exporter: &WorkbookExporter) {
        match action {
            Action::Score(score) => {
                let outcome = self.session.record_current(score, &self.identifier_input);
                self.status = Some(StatusLine::recorded(&outcome));
                self.sync_inputs();
            }
            Action::QuickJump(station) => {
                self.session.quick_jump(station);
                self.sync_inputs();
            }
            Action::Next => {
                self.session.next();
                self.sync_inputs();
            }
            Action::Previous => {
                self.session.previous();
                self.sync_inputs();
            }
            Action::SubmitStation => match self.session.jump_to_input(&self.station_input) {
                Ok(_) => {
                    self.sync_inputs();
                    self.focus = InputFocus::Scores;
                }
                Err(e) => self.fail(e),
            },
            Action::Export => match self.session.export(exporter) {
                Ok(path) => self.status = Some(StatusLine::exported(&path)),
                Err(e) => self.fail(e),
            },
            Action::Focus(focus) => {
                // abandoning an unsubmitted station edit
                if self.focus == InputFocus::Station && focus != InputFocus::Station {
                    self.station_input = self.session.current_station().to_string();
                }
                self.focus = focus;
            }
            Action::Input(c) => {
                if let Some(field) = self.focused_field() {
                    field.push(c);
                }
            }
            Action::Backspace => {
                if let Some(field) = self.focused_field() {
                    field.pop();
                }
            }
            Action::Quit => self.should_quit = true,
            Action::None => {}
        }
    }

    /// Number of scored stations
    pub fn recorded_count(&self) -> usize {
        self.session.ledger().len()
    }

    fn focused_field(&mut self) -> Option<&mut String> {
        match self.focus {
            InputFocus::Identifier => Some(&mut self.identifier_input),
            InputFocus::Station => Some(&mut self.station_input),
            InputFocus::Scores => None,
        }
    }

    /// Refill both fields from the station the pointer is on
    fn sync_inputs(&mut self) {
        self.station_input = self.session.current_station().to_string();
        self.identifier_input = self
            .session
            .current_binding()
            .map(str::to_string)
            .unwrap_or_default();
    }

    fn fail(&mut self, error: ScoreError) {
        if error.is_recoverable() {
            debug!(code = error.code(), %error, "recovered");
        } else {
            warn!(code = error.code(), %error, "unexpected error during session");
        }
        self.status = Some(StatusLine::from_error(&error));
    }
}
