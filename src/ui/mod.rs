use ratatui::prelude::*;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::app::App;
use crate::CELL_W;

const SIDEBAR_W: u16 = 26;

pub fn draw_game(frame: &mut Frame, app: &App) {
    let area = frame.size();
    let grid = app.grid();

    // Puzzle text block: row-label gutter + cells, plus the surrounding border.
    let play_w = (grid.cols * CELL_W + 3) as u16 + 2;
    let play_h = grid.rows as u16 + 1 + 2;
    let min_width = play_w + SIDEBAR_W + 2;

    if area.width < min_width {
        let msg = Paragraph::new(format!("RESIZE PANE (min width: {min_width})"))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("WORD HUNT"));
        frame.render_widget(msg, area);
        return;
    }

    // Outer "cabinet" frame.
    let cabinet = Block::default()
        .title("WORD HUNT")
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left);
    let cabinet_inner = cabinet.inner(area);
    frame.render_widget(cabinet, area);

    // Split into puzzle area (left) and sidebar (right).
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(play_w), Constraint::Length(SIDEBAR_W)])
        .split(cabinet_inner);

    // Center the fixed-size puzzle within the left column.
    let v_center = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(play_h),
            Constraint::Min(0),
        ])
        .split(cols[0]);
    let h_center = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(play_w),
            Constraint::Min(0),
        ])
        .split(v_center[1]);

    draw_puzzle(frame, app, h_center[1]);
    draw_sidebar(frame, app, cols[1]);
}

fn draw_puzzle(frame: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .grid()
        .to_string()
        .lines()
        .map(|line| Line::raw(line.to_string()))
        .collect();
    let puzzle = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .block(Block::default().title("PUZZLE").borders(Borders::ALL));
    frame.render_widget(puzzle, area);
}

fn draw_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(5), Constraint::Length(6)].as_ref())
        .split(area);

    let info = Paragraph::new(vec![
        Line::raw(format!("{:<9} {}", "PLACED:", app.grid().words().len())),
        Line::raw(format!("{:<9} {}", "UNPLACED:", app.unplaced().len())),
        Line::raw(String::new()),
        Line::raw(app.status().unwrap_or("").to_string()),
    ])
    .block(Block::default().title("INFO").borders(Borders::ALL))
    .wrap(Wrap { trim: true });
    frame.render_widget(info, chunks[0]);

    // Placed words with the selection marker; the removal quiz is picking the
    // right direction key for the marked word.
    let mut word_lines: Vec<Line> = app
        .grid()
        .words()
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let marker = if i == app.selected() { '>' } else { ' ' };
            Line::raw(format!("{marker} {}", word.text()))
        })
        .collect();
    if !app.unplaced().is_empty() {
        word_lines.push(Line::raw(String::new()));
        word_lines.push(Line::raw("could not place:".to_string()));
        for word in app.unplaced() {
            word_lines.push(Line::raw(format!("  {word}")));
        }
    }
    let words = Paragraph::new(word_lines)
        .block(Block::default().title("WORDS").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    frame.render_widget(words, chunks[1]);

    let controls = Paragraph::new("↑/↓ select\nh/v/d remove\nn new puzzle\nq quit")
        .block(Block::default().title("CONTROLS").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    frame.render_widget(controls, chunks[2]);
}
