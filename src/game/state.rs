use super::{Board, BoardConfig, GameOutcome, Player};
use crate::error::{HistoryError, MoveError};

/// Board snapshots from the starting position onward plus a pointer to the
/// displayed one.
///
/// Each snapshot is one mark ahead of the previous one, except right after a
/// resize, when the history restarts from the remapped board. The player to
/// move is derived from the pointer, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHistory {
    boards: Vec<Board>,
    current_move: usize,
}

impl GameHistory {
    /// Create a history holding a single empty board
    pub fn new(config: BoardConfig) -> Self {
        Self::from_board(Board::new(config))
    }

    /// Start a history from an arbitrary position.
    pub fn from_board(board: Board) -> Self {
        GameHistory {
            boards: vec![board],
            current_move: 0,
        }
    }

    pub fn config(&self) -> BoardConfig {
        self.current_board().config()
    }

    /// All snapshots, oldest first.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Get reference to the displayed board
    pub fn current_board(&self) -> &Board {
        &self.boards[self.current_move]
    }

    /// Player to move on the displayed board
    pub fn current_player(&self) -> Player {
        Player::for_move(self.current_move)
    }

    pub fn outcome(&self) -> GameOutcome {
        self.current_board().outcome()
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_over()
    }

    /// Apply a move and return the new history (immutable).
    ///
    /// Any snapshots after the current one are discarded before the new board
    /// is appended.
    pub fn play(&self, cell: usize) -> Result<GameHistory, MoveError> {
        let mut next = self.clone();
        next.play_mut(cell)?;
        Ok(next)
    }

    /// Apply a move in place. On error the history is left untouched.
    pub fn play_mut(&mut self, cell: usize) -> Result<(), MoveError> {
        let board = self.current_board();
        if cell >= board.cells().len() {
            return Err(MoveError::InvalidCell {
                index: cell,
                len: board.cells().len(),
            });
        }
        if !board.is_empty_cell(cell) {
            return Err(MoveError::Occupied(cell));
        }
        if board.outcome().is_over() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player();
        let next = board.with_move(cell, player);
        self.boards.truncate(self.current_move + 1);
        self.boards.push(next);
        self.current_move += 1;

        tracing::debug!(cell, player = player.name(), move_index = self.current_move, "move played");
        Ok(())
    }

    /// Move the pointer to another snapshot without touching the history.
    pub fn jump_to(&self, index: usize) -> Result<GameHistory, HistoryError> {
        let mut next = self.clone();
        next.jump_to_mut(index)?;
        Ok(next)
    }

    pub fn jump_to_mut(&mut self, index: usize) -> Result<(), HistoryError> {
        if index >= self.boards.len() {
            return Err(HistoryError::OutOfRange {
                index,
                len: self.boards.len(),
            });
        }
        self.current_move = index;
        Ok(())
    }

    /// Remap the displayed board onto new dimensions and restart the history
    /// from it. Previous moves are dropped.
    pub fn resize(&self, rows: usize, cols: usize) -> GameHistory {
        let board = self.current_board().remap(BoardConfig::new(rows, cols));
        tracing::debug!(
            from = %self.config(),
            to = %board.config(),
            "board resized, history reset"
        );
        Self::from_board(board)
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new(BoardConfig::CLASSIC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    #[test]
    fn test_initial_history() {
        let history = GameHistory::default();
        assert_eq!(history.len(), 1);
        assert_eq!(history.current_move(), 0);
        assert_eq!(history.current_player(), Player::X);
        assert_eq!(history.outcome(), GameOutcome::InProgress);
    }

    #[test]
    fn test_play_appends_and_alternates() {
        let history = GameHistory::default().play(4).unwrap().play(0).unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history.current_move(), 2);
        assert_eq!(history.current_board().cell(4), Some(Cell::X));
        assert_eq!(history.current_board().cell(0), Some(Cell::O));
        assert_eq!(history.current_player(), Player::X);
    }

    #[test]
    fn test_each_snapshot_differs_by_one_cell() {
        let mut history = GameHistory::default();
        for cell in [4, 0, 8, 2, 1] {
            history = history.play(cell).unwrap();
        }
        for pair in history.boards().windows(2) {
            let changed: Vec<usize> = (0..9)
                .filter(|&i| pair[0].cell(i) != pair[1].cell(i))
                .collect();
            assert_eq!(changed.len(), 1);
            assert_eq!(pair[0].cell(changed[0]), Some(Cell::Empty));
        }
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        let history = GameHistory::default().play(4).unwrap();
        let before = history.clone();
        assert_eq!(history.play(4), Err(MoveError::Occupied(4)));
        assert_eq!(history, before);
    }

    #[test]
    fn test_out_of_board_cell_is_rejected() {
        let mut history = GameHistory::default();
        assert_eq!(
            history.play_mut(9),
            Err(MoveError::InvalidCell { index: 9, len: 9 })
        );
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_no_moves_after_win() {
        let mut history = GameHistory::default();
        // X: 0, 1, 2 ; O: 3, 4
        for cell in [0, 3, 1, 4, 2] {
            history.play_mut(cell).unwrap();
        }
        assert_eq!(history.outcome(), GameOutcome::Winner(Player::X));
        assert!(history.is_terminal());
        assert_eq!(history.play(8), Err(MoveError::GameOver));
    }

    #[test]
    fn test_jump_does_not_mutate_history() {
        let history = GameHistory::default().play(4).unwrap().play(0).unwrap();
        let jumped = history.jump_to(1).unwrap();
        assert_eq!(jumped.boards(), history.boards());
        assert_eq!(jumped.current_move(), 1);
        assert_eq!(jumped.current_player(), Player::O);
    }

    #[test]
    fn test_jump_out_of_range() {
        let history = GameHistory::default().play(4).unwrap();
        assert_eq!(
            history.jump_to(2),
            Err(HistoryError::OutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_play_from_past_discards_future() {
        let history = GameHistory::default()
            .play(4)
            .unwrap()
            .play(0)
            .unwrap()
            .play(8)
            .unwrap();
        let branched = history.jump_to(1).unwrap().play(2).unwrap();
        assert_eq!(branched.len(), 3);
        assert_eq!(branched.current_move(), 2);
        assert_eq!(branched.current_board().cell(2), Some(Cell::O));
        assert_eq!(branched.current_board().cell(0), Some(Cell::Empty));
        assert_eq!(branched.current_board().cell(8), Some(Cell::Empty));
    }

    #[test]
    fn test_resize_remaps_and_resets_history() {
        let history = GameHistory::default().play(4).unwrap();
        let resized = history.resize(4, 4);
        assert_eq!(resized.len(), 1);
        assert_eq!(resized.current_move(), 0);
        assert_eq!(resized.config(), BoardConfig::new(4, 4));
        let board = resized.current_board();
        assert_eq!(board.cell(5), Some(Cell::X));
        assert_eq!(board.count(Cell::Empty), 15);
    }
}
