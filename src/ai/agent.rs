use crate::error::SearchError;
use crate::game::{Board, Player};

/// Universal interface for automated players.
pub trait Agent {
    /// Pick a cell for `player` on `board`.
    ///
    /// Fails with [`SearchError::NoLegalMove`] when the board has no empty cell.
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize, SearchError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;

    /// Clone the agent into a boxed trait object.
    fn clone_agent(&self) -> Box<dyn Agent>;

    /// Most empty cells the agent can answer on in reasonable time, or `None`
    /// if board size does not matter.
    fn max_empty_cells(&self) -> Option<usize> {
        None
    }
}
