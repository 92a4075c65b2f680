mod agent;
pub mod minimax;
mod random;

pub use agent::Agent;
pub use minimax::{best_move, MinimaxAgent, TRACTABLE_EMPTY_CELLS};
pub use random::RandomAgent;
