use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::app::Startup;
use crate::db::Database;
use crate::display::{deliver, RowView, HEADERS};
use crate::loader::{spawn_load, LoadOutcome, PendingLoad};
use crate::record::Record;
use crate::{TITLE, VERSION};

/// State behind the interactive table.
pub struct TableApp {
    rows: Vec<Record>,
    state: TableState,
    status: String,
    error: Option<String>,
    db: Option<Database>,
    pending: Option<PendingLoad>,
}

impl RowView for TableApp {
    fn render_rows(&mut self, records: &[Record]) {
        self.rows = records.to_vec();
        self.state
            .select(if self.rows.is_empty() { None } else { Some(0) });
    }
}

impl TableApp {
    /// Take over the state produced at startup, including its pending load.
    #[must_use]
    pub fn new(startup: Startup) -> Self {
        Self {
            rows: Vec::new(),
            state: TableState::default(),
            status: "Loading…".to_string(),
            error: startup.open_error.map(|e| e.to_string()),
            db: startup.db,
            pending: Some(startup.pending),
        }
    }

    /// Apply the pending load's outcome if it has arrived. Returns `true`
    /// when rows were replaced.
    pub fn poll_delivery(&mut self) -> bool {
        let Some(outcome) = self.pending.as_mut().and_then(PendingLoad::try_take) else {
            return false;
        };
        self.pending = None;
        self.apply(&outcome);
        true
    }

    fn apply(&mut self, outcome: &LoadOutcome) {
        deliver(outcome, self);
        self.status = outcome.status_line();
    }

    /// Start a new load unless one is still in flight.
    pub fn reload(&mut self) {
        if self.pending.is_some() {
            return;
        }
        self.status = "Loading…".to_string();
        self.pending = Some(spawn_load(self.db.clone()));
    }

    /// Whether a load is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Currently displayed rows.
    #[must_use]
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Index of the highlighted row.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Handle a key press. Returns `true` when the app should exit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('r') => self.reload(),
            KeyCode::Down | KeyCode::Char('j') => self.step(1),
            KeyCode::Up | KeyCode::Char('k') => self.step(-1),
            KeyCode::Home => self.select_edge(false),
            KeyCode::End => self.select_edge(true),
            _ => {}
        }
        false
    }

    fn step(&mut self, delta: isize) {
        if self.rows.is_empty() {
            return;
        }
        let last = self.rows.len() - 1;
        let next = self
            .state
            .selected()
            .map_or(0, |i| i.saturating_add_signed(delta).min(last));
        self.state.select(Some(next));
    }

    fn select_edge(&mut self, end: bool) {
        if self.rows.is_empty() {
            return;
        }
        let index = if end { self.rows.len() - 1 } else { 0 };
        self.state.select(Some(index));
    }

    /// Draw the table, the optional error banner, and the status footer.
    pub fn draw(&mut self, frame: &mut Frame) {
        let banner_height = u16::from(self.error.is_some()) * 3;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(banner_height),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(frame.area());

        if let Some(ref err) = self.error {
            let banner = Paragraph::new(err.as_str())
                .style(Style::default().fg(Color::Red))
                .block(Block::default().borders(Borders::ALL).title("Error"));
            frame.render_widget(banner, chunks[0]);
        }

        let header = Row::new(HEADERS).style(Style::default().add_modifier(Modifier::BOLD));
        let rows = self.rows.iter().map(|r| {
            Row::new(vec![
                r.id.to_string(),
                r.title.clone(),
                r.author.clone(),
                r.year.to_string(),
            ])
        });
        let table = Table::new(
            rows,
            [
                Constraint::Length(4),
                Constraint::Fill(4),
                Constraint::Fill(5),
                Constraint::Length(6),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(TITLE))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        frame.render_stateful_widget(table, chunks[1], &mut self.state);

        let footer = Line::from(format!(
            " {}  ·  ↑/↓ move  r reload  q quit  ·  v{VERSION}",
            self.status
        ));
        frame.render_widget(Paragraph::new(footer), chunks[2]);
    }
}
