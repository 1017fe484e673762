//! TUI application state and logic

use crate::core::Feedback;
use crate::game::{Game, GameEvent, GameStatus, Outcome};
use crate::words::Lexicon;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long the invalid-guess cue stays on screen
const REJECT_FLASH: Duration = Duration::from_millis(830);

/// Idle poll interval, so expired flashes clear without input
const TICK: Duration = Duration::from_millis(120);

/// Session statistics across games
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of guesses used (index 1-6; 0 unused)
    pub guess_distribution: [usize; 7],
    pub streak: usize,
    pub best_streak: usize,
}

impl Statistics {
    fn record_win(&mut self, guesses: usize) {
        self.total_games += 1;
        self.games_won += 1;
        if guesses < self.guess_distribution.len() {
            self.guess_distribution[guesses] += 1;
        }
        self.streak += 1;
        self.best_streak = self.best_streak.max(self.streak);
    }

    fn record_loss(&mut self) {
        self.total_games += 1;
        self.streak = 0;
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

/// A transient on-screen cue
#[derive(Debug, Clone)]
struct Flash {
    text: String,
    until: Instant,
}

/// Application state
pub struct App {
    lexicon: Lexicon,
    game: Game,
    history: Vec<Feedback>,
    stats: Statistics,
    flash: Option<Flash>,
    should_quit: bool,
}

impl App {
    /// Create the app with a freshly drawn secret word
    ///
    /// # Errors
    ///
    /// Returns an error if the lexicon has no answers to draw from.
    pub fn new(lexicon: Lexicon) -> Result<Self> {
        let secret = lexicon
            .pick_answer(&mut rand::rng())
            .context("word list contains no answers")?
            .clone();

        Ok(Self {
            lexicon,
            game: Game::new(secret),
            history: Vec::new(),
            stats: Statistics::default(),
            flash: None,
            should_quit: false,
        })
    }

    /// Reset the board and draw a new secret word
    pub fn new_game(&mut self) {
        // The lexicon was non-empty at startup, so the draw cannot fail
        if let Some(secret) = self.lexicon.pick_answer(&mut rand::rng()) {
            self.game = Game::new(secret.clone());
            self.history.clear();
            self.flash = None;
        }
    }

    /// Route a key press, respecting the game status
    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.game.status().is_active() {
            match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => self.dispatch(GameEvent::Letter(c)),
                KeyCode::Backspace => self.dispatch(GameEvent::Backspace),
                KeyCode::Enter => self.dispatch(GameEvent::Submit),
                _ => {}
            }
        } else {
            // Game over: only new-game and quit are live
            match key.code {
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            }
        }
    }

    /// Run one event through the reducer and react to the outcome
    fn dispatch(&mut self, event: GameEvent) {
        let (next, outcome) = self.game.apply(event, &self.lexicon);
        self.game = next;

        match outcome {
            Outcome::Rejected => {
                self.flash = Some(Flash {
                    text: "Not in the word list!".to_string(),
                    until: Instant::now() + REJECT_FLASH,
                });
            }
            Outcome::Scored(feedback) => {
                self.flash = None;
                self.history.push(feedback);
                match self.game.status() {
                    GameStatus::Won => self.stats.record_win(self.history.len()),
                    GameStatus::Lost => self.stats.record_loss(),
                    GameStatus::Active => {}
                }
            }
            Outcome::Edited => self.flash = None,
            Outcome::Ignored => {}
        }
    }

    /// Drop the flash once its deadline passes
    fn tick(&mut self) {
        if self
            .flash
            .as_ref()
            .is_some_and(|flash| Instant::now() >= flash.until)
        {
            self.flash = None;
        }
    }

    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub fn history(&self) -> &[Feedback] {
        &self.history
    }

    /// The active transient cue, if any
    #[must_use]
    pub fn flash_text(&self) -> Option<&str> {
        self.flash.as_ref().map(|flash| flash.text.as_str())
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        app.tick();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statistics_track_wins_and_streaks() {
        let mut stats = Statistics::default();
        stats.record_win(3);
        stats.record_win(4);
        stats.record_loss();
        stats.record_win(3);

        assert_eq!(stats.total_games, 4);
        assert_eq!(stats.games_won, 3);
        assert_eq!(stats.guess_distribution[3], 2);
        assert_eq!(stats.guess_distribution[4], 1);
        assert_eq!(stats.streak, 1);
        assert_eq!(stats.best_streak, 2);
        assert!((stats.win_rate() - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn win_rate_with_no_games() {
        assert!(Statistics::default().win_rate().abs() < f64::EPSILON);
    }
}
