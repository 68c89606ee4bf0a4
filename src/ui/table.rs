//! Read-only task table.
//!
//! Renders a snapshot of the task collection loaded once at startup. The
//! event loop only navigates and quits; it never mutates the store.

use std::io;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, TableState};
use ratatui::Terminal;

use crate::error::Result;
use crate::task::Task;

const EVENT_POLL_MS: u64 = 120;
const COLOR_TEXT: Color = Color::Rgb(234, 236, 239);
const COLOR_MUTED: Color = Color::Rgb(160, 165, 172);
const COLOR_DONE: Color = Color::Rgb(126, 210, 146);
const COLOR_PENDING: Color = Color::Rgb(244, 200, 98);

// Accent palette; one entry is picked per render pass.
const ACCENTS: [Color; 4] = [
    Color::Rgb(255, 255, 0),
    Color::Rgb(255, 0, 0),
    Color::Rgb(122, 170, 255),
    Color::Rgb(255, 105, 180),
];

pub struct TableApp {
    tasks: Vec<Task>,
    state: TableState,
    should_quit: bool,
}

impl TableApp {
    pub fn new(tasks: Vec<Task>) -> Self {
        let mut state = TableState::default();
        if !tasks.is_empty() {
            state.select(Some(0));
        }
        Self {
            tasks,
            state,
            should_quit: false,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            _ => {}
        }
    }

    fn select_next(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        let next = match self.state.selected() {
            Some(idx) if idx + 1 < self.tasks.len() => idx + 1,
            Some(idx) => idx,
            None => 0,
        };
        self.state.select(Some(next));
    }

    fn select_prev(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        let prev = self.state.selected().map_or(0, |idx| idx.saturating_sub(1));
        self.state.select(Some(prev));
    }
}

/// Run the table view over a task snapshot until a quit key is pressed.
pub fn run(tasks: Vec<Task>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = TableApp::new(tasks);
    let result = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut TableApp,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        if event::poll(Duration::from_millis(EVENT_POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn render(frame: &mut ratatui::Frame, app: &mut TableApp) {
    let accent = pick_accent();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(frame.size());

    let header = Row::new(["ID", "Task", "Category", "Created", "Done"])
        .style(
            Style::default()
                .fg(COLOR_TEXT)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows = app.tasks.iter().map(|task| {
        let done_style = if task.done {
            Style::default().fg(COLOR_DONE)
        } else {
            Style::default().fg(COLOR_PENDING)
        };
        Row::new([
            task.id.map_or_else(|| "-".to_string(), |id| id.to_string()),
            task.task.clone(),
            task.category.clone(),
            task.created_at.format("%Y-%m-%d %H:%M").to_string(),
            if task.done { "Yes" } else { "No" }.to_string(),
        ])
        .style(done_style)
    });

    let widths = [
        Constraint::Length(6),
        Constraint::Min(30),
        Constraint::Length(15),
        Constraint::Length(18),
        Constraint::Length(5),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!(" Tasks ({}) ", app.tasks.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent)),
        )
        .highlight_style(
            Style::default()
                .fg(COLOR_TEXT)
                .bg(Color::Rgb(52, 56, 60))
                .add_modifier(Modifier::BOLD),
        );

    frame.render_stateful_widget(table, chunks[0], &mut app.state);

    let help = Paragraph::new("Press q to quit.").style(Style::default().fg(COLOR_MUTED));
    frame.render_widget(help, chunks[1]);
}

/// Per-render accent pick from a process-local pseudo-random source.
fn pick_accent() -> Color {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() as usize)
        .unwrap_or(0);
    ACCENTS[nanos % ACCENTS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tasks(n: usize) -> Vec<Task> {
        (0..n)
            .map(|i| {
                let mut task = Task::new(format!("task {i}"), "Work");
                task.id = Some(i as u64 + 1);
                task
            })
            .collect()
    }

    #[test]
    fn selection_starts_at_first_row() {
        let app = TableApp::new(tasks(3));
        assert_eq!(app.state.selected(), Some(0));
    }

    #[test]
    fn selection_clamps_at_both_ends() {
        let mut app = TableApp::new(tasks(2));
        app.select_prev();
        assert_eq!(app.state.selected(), Some(0));
        app.select_next();
        app.select_next();
        app.select_next();
        assert_eq!(app.state.selected(), Some(1));
    }

    #[test]
    fn empty_snapshot_has_no_selection() {
        let mut app = TableApp::new(Vec::new());
        assert_eq!(app.state.selected(), None);
        app.select_next();
        assert_eq!(app.state.selected(), None);
    }

    #[test]
    fn quit_keys_set_should_quit() {
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut app = TableApp::new(tasks(1));
            app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
            assert!(app.should_quit);
        }

        let mut app = TableApp::new(tasks(1));
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
