//! TUI runner - manages TUI lifecycle and rendering

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use crate::domain::ScoringSession;
use crate::errors::Result;
use crate::export::WorkbookExporter;
use crate::tui::events::action_for_key;
use crate::tui::state::TuiState;
use crate::tui::widgets;

/// Main TUI runner
pub struct TuiRunner {
    state: TuiState,
    exporter: WorkbookExporter,
}

impl TuiRunner {
    /// Create a new TUI runner
    pub fn new(session: ScoringSession, exporter: WorkbookExporter) -> Self {
        Self {
            state: TuiState::new(session),
            exporter,
        }
    }

    /// Run the TUI until the operator quits (blocking call)
    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, DisableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_tui_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        info!(
            recorded = self.state.recorded_count(),
            "session ended"
        );
        result
    }

    fn run_tui_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| widgets::render(f, &self.state))?;

            if self.state.should_quit {
                return Ok(());
            }

            if event::poll(Duration::from_millis(250))? {
                match event::read()? {
                    Event::Key(key) => {
                        let action = action_for_key(key, &self.state);
                        self.state.apply(action, &self.exporter);
                    }
                    Event::Resize(_, _) => {
                        // Force redraw
                    }
                    _ => {}
                }
            }
        }
    }
}
