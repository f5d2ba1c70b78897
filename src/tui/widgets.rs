//! TUI widget rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::domain::StatusKind;
use crate::schemas::Score;
use crate::tui::state::{InputFocus, TuiState};

/// Draw the whole screen
pub fn render(f: &mut Frame, state: &TuiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(chunks[0]);

    render_controls_pane(f, columns[0], state);
    render_current_pane(f, columns[1], state);
    render_scores_pane(f, columns[2], state);
    render_footer(f, chunks[1], state);
}

/// Left column: fields, station, quick jumps, totals
pub fn render_controls_pane(f: &mut Frame, area: Rect, state: &TuiState) {
    let station = state.session.current_station();
    let max = state.session.navigator().range().max();

    let quick: Vec<Span> = state
        .session
        .navigator()
        .anchors()
        .iter()
        .enumerate()
        .flat_map(|(i, anchor)| {
            [
                Span::styled(format!("F{}", i + 1), Style::default().fg(Color::DarkGray)),
                Span::raw(format!(" {}  ", anchor)),
            ]
        })
        .collect();

    let lines = vec![
        field_line("Identifier", &state.identifier_input, state.focus == InputFocus::Identifier),
        Line::from(""),
        Line::from(Span::styled("Station", Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            format!("{} / {}", station, max),
            Style::default()
                .fg(Color::Rgb(26, 153, 255))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field_line("Go to", &state.station_input, state.focus == InputFocus::Station),
        Line::from(""),
        Line::from(Span::styled("Quick jump", Style::default().fg(Color::Gray))),
        Line::from(quick),
        Line::from(""),
        Line::from(format!("Records: {} stations", state.recorded_count())),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title("Station"),
    );
    f.render_widget(paragraph, area);
}

/// Middle column: what is recorded at the current station
pub fn render_current_pane(f: &mut Frame, area: Rect, state: &TuiState) {
    let (score_text, score_style, id_text) = match state.session.current_record() {
        Some(record) => (
            record.score.to_string(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            record.identifier().unwrap_or("--").to_string(),
        ),
        None => (
            "--".to_string(),
            Style::default().fg(Color::Rgb(153, 26, 179)),
            "--".to_string(),
        ),
    };

    let lines = vec![
        Line::from(Span::styled("Current score", Style::default().fg(Color::Gray))),
        Line::from(Span::styled(score_text, score_style)),
        Line::from(""),
        Line::from(Span::styled("Current identifier", Style::default().fg(Color::Gray))),
        Line::from(id_text),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title("Recorded"),
    );
    f.render_widget(paragraph, area);
}

/// Right column: the nine score keys
pub fn render_scores_pane(f: &mut Frame, area: Rect, state: &TuiState) {
    let current = state.session.current_record().map(|r| r.score);

    let items: Vec<ListItem> = Score::ALL
        .iter()
        .map(|&score| {
            let marker = if Some(score) == current { "◀" } else { " " };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {} ", score.index() + 1),
                    Style::default().fg(Color::Black).bg(score_color(score)),
                ),
                Span::styled(
                    format!("  {:<5} {}", score.to_string(), marker),
                    Style::default().fg(score_color(score)).add_modifier(Modifier::BOLD),
                ),
            ]))
        })
        .collect();

    let title = if state.focus == InputFocus::Scores {
        "Body condition score [1-9]"
    } else {
        "Body condition score"
    };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(title),
    );
    f.render_widget(list, area);
}

/// Status line and key help
pub fn render_footer(f: &mut Frame, area: Rect, state: &TuiState) {
    let status = match &state.status {
        Some(line) => {
            let color = match line.kind {
                StatusKind::Info => Color::Green,
                StatusKind::Error => Color::Red,
            };
            Span::styled(line.text.clone(), Style::default().fg(color))
        }
        None => Span::raw(""),
    };

    let keys = match state.focus {
        InputFocus::Scores => "[1-9] score  [←/→] station  [i] identifier  [g] go to  [x] export  [q] quit",
        InputFocus::Identifier => "type identifier  [enter] done  [tab] go to",
        InputFocus::Station => "type station  [enter] jump  [esc] cancel",
    };

    let paragraph = Paragraph::new(vec![
        Line::from(status),
        Line::from(Span::styled(keys, Style::default().fg(Color::DarkGray))),
    ])
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(paragraph, area);
}

// ===== HELPER FUNCTIONS =====

/// Button color for a score, red at 2.5 through purple at 4.5
pub fn score_color(score: Score) -> Color {
    match score.index() {
        0 => Color::Rgb(230, 77, 51),
        1 => Color::Rgb(255, 153, 0),
        2 => Color::Rgb(255, 230, 51),
        3 => Color::Rgb(204, 230, 51),
        4 => Color::Rgb(128, 204, 77),
        5 => Color::Rgb(77, 179, 77),
        6 => Color::Rgb(0, 153, 128),
        7 => Color::Rgb(51, 77, 179),
        _ => Color::Rgb(153, 26, 179),
    }
}

/// `Label: value` with a cursor when focused
fn field_line<'a>(label: &'a str, value: &'a str, focused: bool) -> Line<'a> {
    let label_style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let cursor = if focused { "▏" } else { "" };
    Line::from(vec![
        Span::styled(format!("{}: ", label), label_style),
        Span::raw(value),
        Span::styled(cursor, Style::default().fg(Color::Yellow)),
    ])
}
