//! Agent-versus-agent matches and win/draw/loss bookkeeping.

use crate::ai::Agent;
use crate::error::{SearchError, SessionError};
use crate::game::{BoardConfig, GameHistory, GameOutcome, Player};

/// Result of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    pub winner: Option<Player>,
    pub game_length: usize,
}

/// Play one game to the end. `x` moves first.
///
/// Fails up front if either agent cannot search the empty board.
pub fn play_match(
    x: &mut dyn Agent,
    o: &mut dyn Agent,
    config: BoardConfig,
) -> Result<(GameHistory, MatchResult), SessionError> {
    for agent in [&*x, &*o] {
        if let Some(limit) = agent.max_empty_cells().filter(|&limit| config.len() > limit) {
            return Err(SearchError::TooManyEmptyCells {
                agent: agent.name().to_string(),
                empty: config.len(),
                limit,
            }
            .into());
        }
    }

    let mut history = GameHistory::new(config);

    while !history.is_terminal() {
        let player = history.current_player();
        let agent: &mut dyn Agent = match player {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };
        let cell = agent.select_move(history.current_board(), player)?;
        history.play_mut(cell)?;
    }

    let winner = match history.outcome() {
        GameOutcome::Winner(player) => Some(player),
        GameOutcome::Draw | GameOutcome::InProgress => None,
    };
    let result = MatchResult {
        winner,
        game_length: history.len() - 1,
    };
    Ok((history, result))
}

/// Tally of a series from the evaluated agent's point of view.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct MatchReport {
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
    pub total_moves: usize,
}

impl MatchReport {
    pub fn record(&mut self, result: MatchResult, subject: Player) {
        self.games += 1;
        self.total_moves += result.game_length;
        match result.winner {
            Some(player) if player == subject => self.wins += 1,
            Some(_) => self.losses += 1,
            None => self.draws += 1,
        }
    }

    pub fn win_rate(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.wins as f32 / self.games as f32
    }

    pub fn draw_rate(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.draws as f32 / self.games as f32
    }

    pub fn average_game_length(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_moves as f32 / self.games as f32
    }
}

/// Play `games` games of `subject` against `sparring`, alternating who opens.
/// The subject plays X in even-numbered games.
pub fn evaluate(
    subject: &mut dyn Agent,
    sparring: &mut dyn Agent,
    config: BoardConfig,
    games: usize,
) -> Result<MatchReport, SessionError> {
    let mut report = MatchReport::default();

    for game in 0..games {
        let (side, (_, result)) = if game % 2 == 0 {
            (Player::X, play_match(subject, sparring, config)?)
        } else {
            (Player::O, play_match(sparring, subject, config)?)
        };
        report.record(result, side);
        tracing::debug!(
            game,
            subject = subject.name(),
            side = side.name(),
            winner = ?result.winner,
            moves = result.game_length,
            "game finished"
        );
    }

    tracing::info!(
        games = report.games,
        wins = report.wins,
        draws = report.draws,
        losses = report.losses,
        "evaluation finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{MinimaxAgent, RandomAgent};

    #[test]
    fn test_record_tallies_from_subject_view() {
        let mut report = MatchReport::default();
        report.record(
            MatchResult {
                winner: Some(Player::X),
                game_length: 5,
            },
            Player::X,
        );
        report.record(
            MatchResult {
                winner: Some(Player::X),
                game_length: 7,
            },
            Player::O,
        );
        report.record(
            MatchResult {
                winner: None,
                game_length: 9,
            },
            Player::O,
        );
        assert_eq!((report.wins, report.losses, report.draws), (1, 1, 1));
        assert!((report.average_game_length() - 7.0).abs() < 1e-6);
        assert!((report.win_rate() - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_report_rates_are_zero() {
        let report = MatchReport::default();
        assert_eq!(report.win_rate(), 0.0);
        assert_eq!(report.draw_rate(), 0.0);
        assert_eq!(report.average_game_length(), 0.0);
    }

    #[test]
    fn test_minimax_self_play_draws() {
        let mut x = MinimaxAgent::new();
        let mut o = MinimaxAgent::new();
        let (history, result) = play_match(&mut x, &mut o, BoardConfig::CLASSIC).unwrap();
        assert_eq!(result.winner, None);
        assert_eq!(result.game_length, 9);
        assert!(history.current_board().is_draw());
    }

    #[test]
    fn test_large_board_is_rejected_before_searching() {
        let mut subject = MinimaxAgent::new();
        let mut sparring = RandomAgent::with_seed(2);
        let err = evaluate(&mut subject, &mut sparring, BoardConfig::new(4, 3), 2).unwrap_err();
        assert_eq!(
            err,
            SessionError::Search(SearchError::TooManyEmptyCells {
                agent: "Minimax".to_string(),
                empty: 12,
                limit: 9,
            })
        );
    }

    #[test]
    fn test_random_agents_play_any_size() {
        let mut x = RandomAgent::with_seed(8);
        let mut o = RandomAgent::with_seed(9);
        let (history, result) = play_match(&mut x, &mut o, BoardConfig::new(5, 6)).unwrap();
        assert!(history.is_terminal());
        assert_eq!(result.game_length, history.len() - 1);
    }

    #[test]
    fn test_minimax_is_unbeaten_by_random() {
        let mut subject = MinimaxAgent::new();
        let mut sparring = RandomAgent::with_seed(11);
        let report = evaluate(&mut subject, &mut sparring, BoardConfig::CLASSIC, 4).unwrap();
        assert_eq!(report.games, 4);
        assert_eq!(report.losses, 0);
    }
}
