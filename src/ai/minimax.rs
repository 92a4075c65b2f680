use std::cmp::Reverse;

use crate::error::SearchError;
use crate::game::{Board, BoardConfig, Cell, Player};

use super::agent::Agent;

/// Beyond this many empty cells the unpruned search stops being practical.
pub const TRACTABLE_EMPTY_CELLS: usize = 9;

/// Cell preference for the second search phase: center first, then outward
/// ring by ring, corners of each ring before its edges, ties by index.
///
/// On the classic board this is `[4, 0, 2, 6, 8, 1, 3, 5, 7]`.
pub fn preference_order(config: BoardConfig) -> Vec<usize> {
    // Doubled offsets from the center keep even dimensions integral.
    let offset = |i: usize, n: usize| (2 * i as isize - (n as isize - 1)).unsigned_abs();

    let mut order: Vec<usize> = (0..config.len()).collect();
    order.sort_by_key(|&i| {
        let (row, col) = config.position(i);
        let dr = offset(row, config.rows);
        let dc = offset(col, config.cols);
        (dr.max(dc), Reverse(dr + dc), i)
    });
    order
}

/// Exhaustive minimax value of `board`: +1 when X wins with best play, -1
/// when O does, 0 for a draw. `maximizing` is true when X is to move.
///
/// No pruning and no depth limit; marks are placed and undone in place.
pub fn minimax(board: &mut Board, maximizing: bool) -> i8 {
    if let Some(winner) = board.winner() {
        return winner.score();
    }
    if board.is_full() {
        return 0;
    }

    let mark = if maximizing { Cell::X } else { Cell::O };
    let mut best = if maximizing { i8::MIN } else { i8::MAX };

    for i in 0..board.cells().len() {
        if board.cells()[i] != Cell::Empty {
            continue;
        }
        board.set(i, mark);
        let score = minimax(board, !maximizing);
        board.set(i, Cell::Empty);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// Pick `player`'s move on `board`.
///
/// An immediately winning cell (lowest index first) is returned without
/// searching. Otherwise every empty cell is scored with [`minimax`] in
/// [`preference_order`]; X keeps the highest score, O the lowest, and the
/// first cell reaching it wins ties.
pub fn best_move(board: &Board, player: Player) -> Result<usize, SearchError> {
    let empty = board.empty_cells().count();
    if empty == 0 {
        return Err(SearchError::NoLegalMove);
    }
    if empty > TRACTABLE_EMPTY_CELLS {
        tracing::warn!(
            empty,
            board = %board.config(),
            "exhaustive search over this many empty cells may not finish"
        );
    }

    let mark = player.to_cell();
    let mut scratch = board.clone();

    for i in board.empty_cells() {
        scratch.set(i, mark);
        let wins = scratch.winner() == Some(player);
        scratch.set(i, Cell::Empty);
        if wins {
            tracing::debug!(cell = i, player = player.name(), "immediate win");
            return Ok(i);
        }
    }

    let maximizing = player == Player::X;
    let mut best: Option<(usize, i8)> = None;

    for i in preference_order(board.config()) {
        if !scratch.is_empty_cell(i) {
            continue;
        }
        scratch.set(i, mark);
        let score = minimax(&mut scratch, !maximizing);
        scratch.set(i, Cell::Empty);

        let improves = match best {
            None => true,
            Some((_, best_score)) if maximizing => score > best_score,
            Some((_, best_score)) => score < best_score,
        };
        if improves {
            best = Some((i, score));
        }
    }

    let (cell, score) = best.ok_or(SearchError::NoLegalMove)?;
    tracing::debug!(cell, score, player = player.name(), "minimax move");
    Ok(cell)
}

/// Agent wrapping [`best_move`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxAgent;

impl MinimaxAgent {
    pub fn new() -> Self {
        MinimaxAgent
    }
}

impl Agent for MinimaxAgent {
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize, SearchError> {
        best_move(board, player)
    }

    fn name(&self) -> &str {
        "Minimax"
    }

    fn clone_agent(&self) -> Box<dyn Agent> {
        Box::new(*self)
    }

    fn max_empty_cells(&self) -> Option<usize> {
        Some(TRACTABLE_EMPTY_CELLS)
    }
}
