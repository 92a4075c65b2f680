use std::path::PathBuf;

/// Reasons a move cannot be applied to the current board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("illegal move: cell {index} is outside a board of {len} cells")]
    InvalidCell { index: usize, len: usize },

    #[error("illegal move: cell {0} is already occupied")]
    Occupied(usize),

    #[error("illegal move: the game is already over")]
    GameOver,
}

/// Errors from navigating the move history.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    #[error("move {index} is out of range (history has {len} entries)")]
    OutOfRange { index: usize, len: usize },
}

/// Errors from the move search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("no legal move: the board is full")]
    NoLegalMove,

    #[error("{agent} cannot search a board with {empty} empty cells (limit {limit})")]
    TooManyEmptyCells {
        agent: String,
        empty: usize,
        limit: usize,
    },
}

/// Anything that can go wrong while driving a [`Session`](crate::session::Session).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Move(#[from] MoveError),

    #[error(transparent)]
    History(#[from] HistoryError),

    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Errors from parsing the textual board format.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardParseError {
    #[error("expected {expected} cells for a {rows}x{cols} board, found {found}")]
    Length {
        rows: usize,
        cols: usize,
        expected: usize,
        found: usize,
    },

    #[error("unrecognized cell symbol {0:?} (expected X, O, '.', '-' or '_')")]
    Symbol(char),

    #[error("board dimensions must be at least 1x1, got {rows}x{cols}")]
    Dimensions { rows: usize, cols: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
