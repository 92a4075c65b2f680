//! Game orchestration: a caller-owned history plus an optional automated
//! opponent that answers as soon as it is its turn.

use crate::ai::{Agent, MinimaxAgent};
use crate::config::AppConfig;
use crate::error::SessionError;
use crate::game::{Board, BoardConfig, GameHistory, GameOutcome, Player};

/// What happened during one [`Session::play`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// Cell the human played.
    pub cell: usize,
    /// Cell the opponent answered with, if it moved.
    pub reply: Option<usize>,
    pub outcome: GameOutcome,
}

struct Opponent {
    agent: Box<dyn Agent>,
    plays: Player,
    enabled: bool,
}

pub struct Session {
    history: GameHistory,
    opponent: Option<Opponent>,
}

impl Session {
    /// Two humans sharing one board.
    pub fn two_player(config: BoardConfig) -> Self {
        Session {
            history: GameHistory::new(config),
            opponent: None,
        }
    }

    /// Human against `agent`, which plays `plays`. If the opponent moves first
    /// it does so before this returns. An opponent whose search cannot cover
    /// the empty board starts paused.
    pub fn with_opponent(
        config: BoardConfig,
        agent: Box<dyn Agent>,
        plays: Player,
    ) -> Result<Self, SessionError> {
        let mut session = Session {
            history: GameHistory::new(config),
            opponent: Some(Opponent {
                agent,
                plays,
                enabled: true,
            }),
        };
        session.respond()?;
        Ok(session)
    }

    /// Session described by the application config, with the minimax agent
    /// as opponent when enabled.
    pub fn from_config(config: &AppConfig) -> Result<Self, SessionError> {
        let board = config.game.board();
        if config.opponent.enabled {
            Self::with_opponent(board, Box::new(MinimaxAgent::new()), config.opponent.plays)
        } else {
            Ok(Self::two_player(board))
        }
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    pub fn board(&self) -> &Board {
        self.history.current_board()
    }

    pub fn outcome(&self) -> GameOutcome {
        self.history.outcome()
    }

    /// Name and side of the automated opponent, if any and enabled.
    pub fn opponent(&self) -> Option<(&str, Player)> {
        self.opponent
            .as_ref()
            .filter(|opponent| opponent.enabled)
            .map(|opponent| (opponent.agent.name(), opponent.plays))
    }

    /// Whether an opponent is attached, enabled or not.
    pub fn has_opponent(&self) -> bool {
        self.opponent.is_some()
    }

    /// Pause or resume the opponent. Resuming on its turn makes it move.
    /// Has no effect on a two-player session.
    pub fn set_opponent_enabled(&mut self, enabled: bool) -> Result<Option<usize>, SessionError> {
        match self.opponent.as_mut() {
            Some(opponent) => opponent.enabled = enabled,
            None => return Ok(None),
        }
        self.respond()
    }

    /// Play `cell` for the side to move, then let the opponent answer.
    pub fn play(&mut self, cell: usize) -> Result<Turn, SessionError> {
        self.history.play_mut(cell)?;
        let reply = self.respond()?;
        Ok(Turn {
            cell,
            reply,
            outcome: self.outcome(),
        })
    }

    /// If the game is in progress and the opponent is to move, compute and
    /// apply its move. Returns the cell it played.
    ///
    /// An opponent facing more empty cells than its search can handle is
    /// paused instead; see [`Agent::max_empty_cells`].
    pub fn respond(&mut self) -> Result<Option<usize>, SessionError> {
        let Some(opponent) = self.opponent.as_mut().filter(|opponent| opponent.enabled) else {
            return Ok(None);
        };
        if self.history.is_terminal() {
            return Ok(None);
        }

        let empty = self.history.current_board().empty_cells().count();
        if let Some(limit) = opponent.agent.max_empty_cells().filter(|&limit| empty > limit) {
            opponent.enabled = false;
            tracing::warn!(
                empty,
                limit,
                agent = opponent.agent.name(),
                "too many empty cells to search, opponent paused"
            );
            return Ok(None);
        }

        if self.history.current_player() != opponent.plays {
            return Ok(None);
        }

        let board = self.history.current_board();
        let cell = opponent.agent.select_move(board, opponent.plays)?;
        self.history.play_mut(cell)?;
        tracing::info!(
            cell,
            agent = opponent.agent.name(),
            player = opponent.plays.name(),
            "opponent moved"
        );
        Ok(Some(cell))
    }

    /// Show an earlier position. Landing on the opponent's turn makes it move
    /// again from there, discarding the later moves.
    pub fn jump_to(&mut self, index: usize) -> Result<Option<usize>, SessionError> {
        self.history.jump_to_mut(index)?;
        self.respond()
    }

    /// Change the board dimensions, keeping the overlapping marks and starting
    /// a fresh history from them.
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<Option<usize>, SessionError> {
        self.history = self.history.resize(rows, cols);
        tracing::info!(board = %self.history.config(), "board resized");
        self.respond()
    }

    /// Start over on an empty board of the same size.
    pub fn reset(&mut self) -> Result<Option<usize>, SessionError> {
        self.history = GameHistory::new(self.history.config());
        self.respond()
    }
}
