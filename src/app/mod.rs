use std::env;
use std::error::Error;
use std::io::{stdout, Stdout};
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::game::{Grid, GridError, RemoveStatus};
use crate::io::load_words;
use crate::ui::draw_game;
use crate::{DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_WORDS};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Puzzle session state driven by the event loop: the grid, the source word
/// list (kept so `n` can rebuild the puzzle), the words that fit nowhere,
/// the sidebar selection, and the last removal status message.
pub struct App {
    grid: Grid,
    source: Vec<String>,
    unplaced: Vec<String>,
    selected: usize,
    status: Option<String>,
}

impl App {
    pub fn new(rows: usize, cols: usize, source: Vec<String>) -> Result<Self, GridError> {
        let mut grid = Grid::new(rows, cols)?;
        let unplaced = grid.place_words(&source);
        Ok(Self {
            grid,
            source,
            unplaced,
            selected: 0,
            status: None,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn unplaced(&self) -> &[String] {
        &self.unplaced
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.grid.words().len() {
            self.selected += 1;
        }
    }

    /// Tries to remove the selected word with the direction key the user
    /// pressed; a wrong direction leaves the puzzle untouched and reports
    /// "not found", same as the engine.
    pub fn remove_selected(&mut self, direction: char) {
        let Some(word) = self.grid.words().get(self.selected).cloned() else {
            self.status = Some("no word selected".to_string());
            return;
        };
        self.status = Some(match self.grid.remove_word(&word, direction) {
            RemoveStatus::Removed => format!("{} removed", word.text()),
            RemoveStatus::NotFound => format!("{} not found", word.text()),
        });
        if self.selected >= self.grid.words().len() {
            self.selected = self.grid.words().len().saturating_sub(1);
        }
    }

    pub fn new_puzzle(&mut self) {
        match Grid::new(self.grid.rows, self.grid.cols) {
            Ok(grid) => {
                self.grid = grid;
                self.unplaced = self.grid.place_words(&self.source);
                self.selected = 0;
                self.status = None;
            }
            Err(err) => self.status = Some(err.to_string()),
        }
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let (rows, cols, words) = parse_args()?;
    let mut app = App::new(rows, cols, words)?;
    let mut tui = TuiGuard::new()?;
    run_loop(tui.terminal_mut(), &mut app)
}

// word-hunt [WORDS_FILE] [ROWS] [COLS]
fn parse_args() -> Result<(usize, usize, Vec<String>), Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let words = match args.first() {
        Some(path) => load_words(Path::new(path))?,
        None => DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
    };
    let rows = match args.get(1) {
        Some(value) => value.parse()?,
        None => DEFAULT_ROWS,
    };
    let cols = match args.get(2) {
        Some(value) => value.parse()?,
        None => DEFAULT_COLS,
    };
    Ok((rows, cols, words))
}

fn run_loop(terminal: &mut Term, app: &mut App) -> Result<(), Box<dyn Error>> {
    loop {
        terminal.draw(|frame| draw_game(frame, app))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    break;
                }
                handle_input(key.code, app);
            }
        }
    }
    Ok(())
}

struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn handle_input(code: KeyCode, app: &mut App) {
    match code {
        KeyCode::Up => app.select_prev(),
        KeyCode::Down => app.select_next(),
        KeyCode::Char('n') => app.new_puzzle(),
        KeyCode::Char(ch @ ('h' | 'v' | 'd' | 'H' | 'V' | 'D')) => app.remove_selected(ch),
        _ => {}
    }
}
