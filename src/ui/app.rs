//! Main TUI application state and logic

use crate::diagnostics::Diagnostic;
use crate::pipeline::AnalysisReport;
use crate::ui::panes::{self, SourceRenderData};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Diagnostics,
    Tokens,
    Symbols,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: source -> diagnostics -> tokens -> symbols)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Diagnostics,
            FocusedPane::Diagnostics => FocusedPane::Tokens,
            FocusedPane::Tokens => FocusedPane::Symbols,
            FocusedPane::Symbols => FocusedPane::Source,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Symbols,
            FocusedPane::Diagnostics => FocusedPane::Source,
            FocusedPane::Tokens => FocusedPane::Diagnostics,
            FocusedPane::Symbols => FocusedPane::Tokens,
        }
    }
}

/// The main application state
pub struct App {
    /// The analysis being viewed
    pub report: AnalysisReport,

    /// The analyzed source text
    pub source_code: String,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub source_scroll: usize,
    pub diagnostics_scroll: usize,
    pub tokens_scroll: usize,
    pub symbols_scroll: usize,

    /// Index into the stage-ordered diagnostic list
    pub selected_diagnostic: Option<usize>,

    /// Whether the source pane scrolls to the selected diagnostic
    pub follow_selection: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app for a finished analysis
    pub fn new(report: AnalysisReport, source_code: String) -> Self {
        let count = report.all_diagnostics().count();
        let (selected_diagnostic, status_message) = if count == 0 {
            (None, String::from("No diagnostics"))
        } else {
            (Some(0), format!("{} diagnostic(s)", count))
        };

        App {
            report,
            source_code,
            focused_pane: FocusedPane::Source,
            source_scroll: 0,
            diagnostics_scroll: 0,
            tokens_scroll: 0,
            symbols_scroll: 0,
            selected_diagnostic,
            follow_selection: true,
            should_quit: false,
            status_message,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        Ok(())
    }

    fn selected(&self) -> Option<&Diagnostic> {
        self.selected_diagnostic
            .and_then(|index| self.report.all_diagnostics().nth(index))
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Create layout: 4 panes in 2 columns, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Split into 2 columns
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(pane_area);

        // Left column: Source (top) | Diagnostics (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(columns[0]);

        // Right column: Tokens (top) | Symbols (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[1]);

        let diagnostics: Vec<&Diagnostic> = self.report.all_diagnostics().collect();
        let selected_line = self.selected().map(|d| d.line);

        let source_data = SourceRenderData {
            source: &self.source_code,
            tokens: &self.report.tokens,
            error_lines: diagnostics
                .iter()
                .filter(|d| d.is_error())
                .map(|d| d.line)
                .collect(),
            selected_line,
            follow_selected: self.follow_selection,
        };
        panes::render_source_pane(
            frame,
            left_rows[0],
            &source_data,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        panes::render_diagnostics_pane(
            frame,
            left_rows[1],
            &diagnostics,
            self.selected_diagnostic,
            self.focused_pane == FocusedPane::Diagnostics,
            &mut self.diagnostics_scroll,
        );

        panes::render_tokens_pane(
            frame,
            right_rows[0],
            &self.report.tokens,
            self.focused_pane == FocusedPane::Tokens,
            &mut self.tokens_scroll,
        );

        panes::render_symbols_pane(
            frame,
            right_rows[1],
            &self.report.semantic.symbol_table,
            self.focused_pane == FocusedPane::Symbols,
            &mut self.symbols_scroll,
        );

        // Render status bar
        panes::render_status_bar(frame, status_area, &self.status_message, &self.report);
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Left => self.select_previous(),
            KeyCode::Right => self.select_next(),
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Source => {
                    self.follow_selection = false;
                    self.source_scroll = self.source_scroll.saturating_sub(1);
                }
                FocusedPane::Diagnostics => self.select_previous(),
                FocusedPane::Tokens => {
                    self.tokens_scroll = self.tokens_scroll.saturating_sub(1);
                }
                FocusedPane::Symbols => {
                    self.symbols_scroll = self.symbols_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Source => {
                    self.follow_selection = false;
                    self.source_scroll = self.source_scroll.saturating_add(1);
                }
                FocusedPane::Diagnostics => self.select_next(),
                FocusedPane::Tokens => {
                    self.tokens_scroll = self.tokens_scroll.saturating_add(1);
                }
                FocusedPane::Symbols => {
                    self.symbols_scroll = self.symbols_scroll.saturating_add(1);
                }
            },
            _ => {}
        }
    }

    fn select_next(&mut self) {
        let count = self.report.all_diagnostics().count();
        if let Some(index) = self.selected_diagnostic {
            self.selected_diagnostic = Some((index + 1).min(count.saturating_sub(1)));
        }
        self.on_selection_changed();
    }

    fn select_previous(&mut self) {
        if let Some(index) = self.selected_diagnostic {
            self.selected_diagnostic = Some(index.saturating_sub(1));
        }
        self.on_selection_changed();
    }

    fn on_selection_changed(&mut self) {
        self.follow_selection = true;
        if let Some(diagnostic) = self.selected() {
            self.status_message = diagnostic.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::analyze_source;

    fn app_for(source: &str) -> App {
        App::new(analyze_source(source), source.to_string())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::from(code));
    }

    #[test]
    fn test_focus_cycles_through_all_panes() {
        let mut app = app_for("int a = 1;");
        for _ in 0..4 {
            press(&mut app, KeyCode::Tab);
        }
        assert_eq!(app.focused_pane, FocusedPane::Source);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focused_pane, FocusedPane::Symbols);
    }

    #[test]
    fn test_diagnostic_selection_is_clamped() {
        let mut app = app_for("int a = 5;\nint b = 10;");
        assert_eq!(app.selected_diagnostic, Some(0));

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.selected_diagnostic, Some(1));
        assert!(app.status_message.contains("Variable 'b' declared but never used"));

        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.selected_diagnostic, Some(0));
    }

    #[test]
    fn test_clean_source_has_no_selection() {
        let mut app = app_for("int a = 5;\nfloat b = a + 3.14;");
        assert_eq!(app.selected_diagnostic, None);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.selected_diagnostic, None);
    }

    #[test]
    fn test_quit() {
        let mut app = app_for("");
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
