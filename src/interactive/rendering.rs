//! TUI rendering with ratatui

use super::app::App;
use crate::core::LetterScore;
use crate::game::{COLS, Cell, GameStatus, KEY_ROWS, letter_hints};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(12),    // Main content
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    // Main content area - board/keyboard on the left, stats on the right
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(chunks[1]);

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(5)])
        .split(main_chunks[0]);

    render_board(f, app, left_chunks[0]);
    render_keyboard(f, app, left_chunks[1]);
    render_stats(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn cell_span(cell: Cell) -> Span<'static> {
    let text = match cell.letter {
        Some(letter) => format!(" {} ", char::from(letter).to_ascii_uppercase()),
        None => " · ".to_string(),
    };

    let style = match cell.score {
        LetterScore::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterScore::WrongLocation => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterScore::NotPresent => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterScore::Unknown => {
            if cell.is_empty() {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            }
        }
    };

    Span::styled(text, style)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .game()
        .board()
        .rows()
        .map(|row| {
            let mut spans = Vec::with_capacity(COLS * 2 - 1);
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(cell_span(*cell));
            }
            Line::from(spans)
        })
        .collect();

    // The border doubles as the rejection cue
    let (title, border_style) = if let Some(text) = app.flash_text() {
        (
            format!(" {text} "),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    } else {
        match app.game().status() {
            GameStatus::Won => (
                " Great job! ".to_string(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            GameStatus::Lost => (
                format!(
                    " The word was {} ",
                    app.game().secret().text().to_uppercase()
                ),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            GameStatus::Active => (" Board ".to_string(), Style::default()),
        }
    };

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style),
    );

    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let hints = letter_hints(app.game().board());

    let lines: Vec<Line> = KEY_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|letter| {
                    let score = hints.get(&letter).copied().unwrap_or(LetterScore::Unknown);
                    let style = match score {
                        LetterScore::Correct => {
                            Style::default().fg(Color::Black).bg(Color::Green)
                        }
                        LetterScore::WrongLocation => {
                            Style::default().fg(Color::Black).bg(Color::Yellow)
                        }
                        LetterScore::NotPresent => Style::default().fg(Color::DarkGray),
                        LetterScore::Unknown => Style::default().fg(Color::White),
                    };
                    Span::styled(
                        format!(" {} ", char::from(letter).to_ascii_uppercase()),
                        style,
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Keyboard "));

    f.render_widget(keyboard, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.stats();

    let mut lines = vec![
        Line::from(format!("Games:       {}", stats.total_games)),
        Line::from(format!("Win rate:    {:.0}%", stats.win_rate())),
        Line::from(format!("Streak:      {}", stats.streak)),
        Line::from(format!("Best streak: {}", stats.best_streak)),
        Line::from(""),
        Line::from(Span::styled(
            "Guess distribution",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    let max_count = stats.guess_distribution.iter().max().copied().unwrap_or(0);
    for guesses in 1..=6 {
        let count = stats.guess_distribution[guesses];
        let bar_len = if max_count == 0 {
            0
        } else {
            count * 12 / max_count
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{guesses}: ")),
            Span::styled("█".repeat(bar_len), Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let stats_panel = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(stats_panel, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let (help, color) = if app.game().status().is_active() {
        (
            "Type letters | Enter: submit | Backspace: erase | Esc: quit",
            Color::DarkGray,
        )
    } else {
        ("n: New Game | q: Quit", Color::Green)
    };

    let status = Paragraph::new(help)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(status, area);
}
