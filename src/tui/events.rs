//! Key events mapped to scoring actions
//!
//! Every key resolves to one [`Action`]; the state applies actions through a
//! single handler, with the score or station carried as data.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::schemas::{Score, Station};
use crate::tui::state::{InputFocus, TuiState};

/// Something the operator asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Record a score at the current station and advance
    Score(Score),
    /// Jump to a quick-jump station
    QuickJump(Station),
    Next,
    Previous,
    /// Jump to the station typed into the station field
    SubmitStation,
    Export,
    /// Move keyboard focus
    Focus(InputFocus),
    /// Type a character into the focused field
    Input(char),
    Backspace,
    Quit,
    None,
}

/// Resolve a key press against the current focus
pub fn action_for_key(key: KeyEvent, state: &TuiState) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Action::Quit,
            KeyCode::Char('e') => Action::Export,
            _ => Action::None,
        };
    }

    // F1..F5 reach the quick-jump stations from any field
    if let KeyCode::F(n) = key.code {
        return usize::from(n)
            .checked_sub(1)
            .and_then(|i| state.session.navigator().anchors().get(i))
            .map(|&station| Action::QuickJump(station))
            .unwrap_or(Action::None);
    }

    match state.focus {
        InputFocus::Scores => match key.code {
            KeyCode::Char(c @ '1'..='9') => c
                .to_digit(10)
                .and_then(|d| Score::from_index(d as usize - 1))
                .map(Action::Score)
                .unwrap_or(Action::None),
            KeyCode::Right | KeyCode::Char('n') => Action::Next,
            KeyCode::Left | KeyCode::Char('p') => Action::Previous,
            KeyCode::Tab | KeyCode::Char('i') => Action::Focus(InputFocus::Identifier),
            KeyCode::Char('g') | KeyCode::Char('/') => Action::Focus(InputFocus::Station),
            KeyCode::Char('x') => Action::Export,
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        },
        InputFocus::Identifier => match key.code {
            KeyCode::Enter | KeyCode::Esc => Action::Focus(InputFocus::Scores),
            KeyCode::Tab => Action::Focus(InputFocus::Station),
            KeyCode::Backspace => Action::Backspace,
            KeyCode::Char(c) => Action::Input(c),
            _ => Action::None,
        },
        InputFocus::Station => match key.code {
            KeyCode::Enter => Action::SubmitStation,
            KeyCode::Esc | KeyCode::Tab => Action::Focus(InputFocus::Scores),
            KeyCode::Backspace => Action::Backspace,
            KeyCode::Char(c) => Action::Input(c),
            _ => Action::None,
        },
    }
}
