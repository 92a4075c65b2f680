use crate::config::{MAX_DIMENSION, MIN_DIMENSION};
use crate::error::SessionError;
use crate::game::GameOutcome;
use crate::session::Session;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    session: Session,
    cursor: (usize, usize),
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(session: Session) -> Self {
        let config = session.history().config();
        let message = (session.has_opponent() && session.opponent().is_none())
            .then(|| "Opponent paused: too many empty cells to search".to_string());
        App {
            session,
            cursor: (config.rows / 2, config.cols / 2), // Start in middle
            should_quit: false,
            message,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        let config = self.session.history().config();
        let (row, col) = self.cursor;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => self.cursor.1 = col.saturating_sub(1),
            KeyCode::Right => self.cursor.1 = (col + 1).min(config.cols - 1),
            KeyCode::Up => self.cursor.0 = row.saturating_sub(1),
            KeyCode::Down => self.cursor.0 = (row + 1).min(config.rows - 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.play();
            }
            KeyCode::Char('r') => {
                let result = self.session.reset();
                self.report(result.map(|_| "New game started!".to_string()));
            }
            KeyCode::Char('a') => self.toggle_opponent(),
            KeyCode::PageUp => self.jump(self.session.history().current_move().checked_sub(1)),
            KeyCode::PageDown => self.jump(Some(self.session.history().current_move() + 1)),
            KeyCode::Home => self.jump(Some(0)),
            KeyCode::End => self.jump(Some(self.session.history().len() - 1)),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                self.jump(c.to_digit(10).map(|d| d as usize));
            }
            KeyCode::Char('+') => self.resize(config.rows + 1, config.cols),
            KeyCode::Char('-') => self.resize(config.rows.saturating_sub(1), config.cols),
            KeyCode::Char(']') => self.resize(config.rows, config.cols + 1),
            KeyCode::Char('[') => self.resize(config.rows, config.cols.saturating_sub(1)),
            _ => {}
        }
    }

    /// Play the cell under the cursor
    fn play(&mut self) {
        if self.session.outcome().is_over() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        let cell = self.session.history().config().index(self.cursor.0, self.cursor.1);
        let result = self.session.play(cell).map(|turn| match turn.outcome {
            GameOutcome::Winner(player) => format!("{player} wins!"),
            GameOutcome::Draw => "It's a draw!".to_string(),
            GameOutcome::InProgress => match (turn.reply, self.session.opponent()) {
                (Some(reply), Some((name, _))) => {
                    let (row, col) = self.session.history().config().position(reply);
                    format!("{name} played row {}, column {}", row + 1, col + 1)
                }
                _ => String::new(),
            },
        });
        self.report(result);
    }

    fn jump(&mut self, index: Option<usize>) {
        let Some(index) = index else {
            return;
        };
        let result = self.session.jump_to(index).map(|reply| match reply {
            Some(_) => format!("Back at move #{index}; opponent replayed its move"),
            None if index == 0 => "Back at game start".to_string(),
            None => format!("Back at move #{index}"),
        });
        self.report(result);
    }

    fn resize(&mut self, rows: usize, cols: usize) {
        if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&rows)
            || !(MIN_DIMENSION..=MAX_DIMENSION).contains(&cols)
        {
            self.message = Some(format!(
                "Board dimensions must stay between {MIN_DIMENSION} and {MAX_DIMENSION}"
            ));
            return;
        }

        let was_active = self.session.opponent().is_some();
        let result = self.session.resize(rows, cols).map(|_| {
            if was_active && self.session.opponent().is_none() {
                format!("Board resized to {rows}x{cols}; opponent paused, too many empty cells to search")
            } else {
                format!("Board resized to {rows}x{cols}, history cleared")
            }
        });
        self.cursor = (self.cursor.0.min(rows - 1), self.cursor.1.min(cols - 1));
        self.report(result);
    }

    fn toggle_opponent(&mut self) {
        if !self.session.has_opponent() {
            self.message = Some("No opponent in two-player mode".to_string());
            return;
        }
        let enable = self.session.opponent().is_none();
        let result = self.session.set_opponent_enabled(enable).map(|_| {
            if enable && self.session.opponent().is_none() {
                "Opponent stays paused: too many empty cells to search".to_string()
            } else if enable {
                "Opponent resumed".to_string()
            } else {
                "Opponent paused".to_string()
            }
        });
        self.report(result);
    }

    fn report(&mut self, result: Result<String, SessionError>) {
        self.message = match result {
            Ok(text) if text.is_empty() => None,
            Ok(text) => Some(text),
            Err(err) => Some(err.to_string()),
        };
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.session, self.cursor, &self.message);
    }
}
