//! Core m,n,k game logic: grid encoding, win detection, player types, and the
//! move-history state machine with immutable transitions.

mod board;
mod player;
mod rules;
mod state;

pub use board::{index, position, Board, BoardConfig, Cell, CLASSIC_COLS, CLASSIC_ROWS};
pub use player::Player;
pub use rules::GameOutcome;
pub use state::GameHistory;
