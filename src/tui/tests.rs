//! Unit tests for TUI state handling: key presses driving the session

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tempfile::TempDir;

use crate::domain::{ScoringSession, StatusKind};
use crate::export::WorkbookExporter;
use crate::fs::FixedDir;
use crate::schemas::{Config, ExportConfig, Score};
use crate::tui::events::{action_for_key, Action};
use crate::tui::state::{InputFocus, TuiState};

struct Harness {
    state: TuiState,
    exporter: WorkbookExporter,
    dir: TempDir,
}

impl Harness {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let exporter = WorkbookExporter::new(
            &ExportConfig::default(),
            Box::new(FixedDir(dir.path().to_path_buf())),
        );
        let session = ScoringSession::from_config(&Config::default()).unwrap();
        Self {
            state: TuiState::new(session),
            exporter,
            dir,
        }
    }

    fn key(&mut self, code: KeyCode) {
        let action = action_for_key(KeyEvent::new(code, KeyModifiers::NONE), &self.state);
        self.state.apply(action, &self.exporter);
    }

    fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.key(KeyCode::Char(c));
        }
    }

    fn station(&self) -> u32 {
        self.state.session.current_station().get()
    }

    fn status(&self) -> &str {
        self.state.status.as_ref().map(|s| s.text.as_str()).unwrap_or("")
    }
}

#[test]
fn test_initial_state() {
    let h = Harness::new();
    assert_eq!(h.station(), 1);
    assert_eq!(h.state.station_input, "1");
    assert_eq!(h.state.identifier_input, "");
    assert_eq!(h.state.focus, InputFocus::Scores);
    assert_eq!(h.state.status, None);
    assert!(!h.state.should_quit);
}

#[test]
fn test_score_with_identifier_advances_and_clears_field() {
    let mut h = Harness::new();
    h.key(KeyCode::Char('i'));
    h.type_text("A1");
    h.key(KeyCode::Enter);
    assert_eq!(h.state.focus, InputFocus::Scores);

    h.key(KeyCode::Char('5')); // 3.5

    assert_eq!(h.station(), 2);
    assert_eq!(h.state.station_input, "2");
    assert_eq!(h.state.identifier_input, "");
    assert_eq!(h.status(), "station 1 record: 3.5 (id:A1)");
    assert_eq!(h.state.recorded_count(), 1);
}

#[test]
fn test_revisit_prefills_identifier_and_reports_change() {
    let mut h = Harness::new();
    h.key(KeyCode::Char('i'));
    h.type_text("cow-7");
    h.key(KeyCode::Esc);
    h.key(KeyCode::Char('1')); // 2.5 at station 1

    h.key(KeyCode::Left);
    assert_eq!(h.station(), 1);
    assert_eq!(h.state.identifier_input, "cow-7");

    h.key(KeyCode::Char('9')); // 4.5
    assert_eq!(h.status(), "station 1: 2.5 → 4.5 (id:cow-7)");
    assert_eq!(h.state.recorded_count(), 1);
}

#[test]
fn test_station_jump_via_field() {
    let mut h = Harness::new();
    h.key(KeyCode::Char('g'));
    assert_eq!(h.state.focus, InputFocus::Station);
    h.key(KeyCode::Backspace);
    h.type_text("42");
    h.key(KeyCode::Enter);

    assert_eq!(h.station(), 42);
    assert_eq!(h.state.station_input, "42");
    assert_eq!(h.state.focus, InputFocus::Scores);
}

#[test]
fn test_out_of_range_jump_keeps_station_and_field() {
    let mut h = Harness::new();
    h.key(KeyCode::Char('g'));
    h.key(KeyCode::Backspace);
    h.type_text("150");
    h.key(KeyCode::Enter);

    assert_eq!(h.station(), 1);
    assert_eq!(h.state.station_input, "150");
    assert_eq!(h.state.focus, InputFocus::Station);
    assert_eq!(h.status(), "station 150 out of 1-100");
    assert_eq!(h.state.status.as_ref().unwrap().kind, StatusKind::Error);
}

#[test]
fn test_non_numeric_jump_reports_parse_error() {
    let mut h = Harness::new();
    h.key(KeyCode::Char('g'));
    h.key(KeyCode::Backspace);
    h.type_text("abc");
    h.key(KeyCode::Enter);

    assert_eq!(h.station(), 1);
    assert_eq!(h.status(), "please enter a valid station number");
}

#[test]
fn test_cancel_station_edit_restores_field() {
    let mut h = Harness::new();
    h.key(KeyCode::Char('g'));
    h.type_text("99");
    h.key(KeyCode::Esc);

    assert_eq!(h.state.focus, InputFocus::Scores);
    assert_eq!(h.state.station_input, "1");
    assert_eq!(h.station(), 1);
}

#[test]
fn test_wraparound_navigation() {
    let mut h = Harness::new();
    h.key(KeyCode::Left);
    assert_eq!(h.station(), 100);
    h.key(KeyCode::Right);
    assert_eq!(h.station(), 1);
}

#[test]
fn test_quick_jump_updates_fields() {
    let mut h = Harness::new();
    h.key(KeyCode::F(4));
    assert_eq!(h.station(), 75);
    assert_eq!(h.state.station_input, "75");
}

#[test]
fn test_export_empty_session() {
    let mut h = Harness::new();
    h.key(KeyCode::Char('x'));
    assert_eq!(h.status(), "no data to export");
    assert_eq!(std::fs::read_dir(h.dir.path()).unwrap().count(), 0);
}

#[test]
fn test_export_after_scoring() {
    let mut h = Harness::new();
    h.key(KeyCode::Char('3'));
    h.key(KeyCode::Char('4'));
    h.key(KeyCode::Char('x'));

    assert!(h.status().starts_with("exported: body_condition_scores_"));
    assert!(h.status().ends_with(".xlsx"));
    assert_eq!(std::fs::read_dir(h.dir.path()).unwrap().count(), 1);
    // export is read-only over the session
    assert_eq!(h.state.recorded_count(), 2);
    assert_eq!(h.station(), 3);
}

#[test]
fn test_score_keys_are_text_while_editing() {
    let mut h = Harness::new();
    h.key(KeyCode::Char('i'));
    h.type_text("12");
    assert_eq!(h.state.identifier_input, "12");
    assert_eq!(h.state.recorded_count(), 0);
}

#[test]
fn test_single_handler_records_any_score() {
    let mut h = Harness::new();
    for score in Score::ALL {
        h.state.apply(Action::Score(score), &h.exporter);
    }
    assert_eq!(h.station(), 10);
    assert_eq!(h.state.recorded_count(), 9);
}

#[test]
fn test_quit() {
    let mut h = Harness::new();
    h.key(KeyCode::Char('q'));
    assert!(h.state.should_quit);
}

#[test]
fn test_session_errors_keep_the_session_running() {
    let mut h = Harness::new();
    let errors = [
        h.state.session.jump_to_input("abc").unwrap_err(),
        h.state.session.jump_to(0).unwrap_err(),
        h.state.session.export(&h.exporter).unwrap_err(),
    ];
    for error in errors {
        assert!(error.is_recoverable(), "{error}");
    }
    assert_eq!(h.station(), 1);
    assert_eq!(h.state.recorded_count(), 0);
}
