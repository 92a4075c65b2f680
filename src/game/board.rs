use std::fmt;

use super::player::Player;
use crate::error::BoardParseError;

/// Classic 3x3 dimensions.
pub const CLASSIC_ROWS: usize = 3;
pub const CLASSIC_COLS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    fn from_symbol(c: char) -> Result<Cell, BoardParseError> {
        match c {
            'X' | 'x' => Ok(Cell::X),
            'O' | 'o' => Ok(Cell::O),
            '.' | '-' | '_' => Ok(Cell::Empty),
            other => Err(BoardParseError::Symbol(other)),
        }
    }
}

/// Flat index of `(row, col)` on a board `cols` wide.
///
/// Callers guarantee `col < cols` (and `row < rows`); nothing is checked in
/// release builds.
pub fn index(row: usize, col: usize, cols: usize) -> usize {
    debug_assert!(col < cols, "column {col} out of range for {cols} columns");
    row * cols + col
}

/// Inverse of [`index`].
pub fn position(index: usize, cols: usize) -> (usize, usize) {
    debug_assert!(cols > 0, "board must have at least one column");
    (index / cols, index % cols)
}

/// Board dimensions. The win length is derived, never stored.
///
/// Any size of at least 1x1 works. With a dimension of 1 or 2 the win length
/// collapses to that dimension, so single marks or pairs already win; the
/// front-ends keep both dimensions at 3 or more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl BoardConfig {
    pub const CLASSIC: BoardConfig = BoardConfig {
        rows: CLASSIC_ROWS,
        cols: CLASSIC_COLS,
    };

    pub fn new(rows: usize, cols: usize) -> Self {
        BoardConfig { rows, cols }
    }

    /// Number of consecutive equal marks needed to win.
    pub fn win_length(&self) -> usize {
        self.rows.min(self.cols)
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows, "row {row} out of range for {} rows", self.rows);
        index(row, col, self.cols)
    }

    pub fn position(&self, index: usize) -> (usize, usize) {
        position(index, self.cols)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl fmt::Display for BoardConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// A full grid snapshot, row-major. The cell count always equals
/// `rows * cols`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    config: BoardConfig,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(config: BoardConfig) -> Self {
        Board {
            config,
            cells: vec![Cell::Empty; config.len()],
        }
    }

    /// Build a board from row-major cells.
    pub fn from_cells(config: BoardConfig, cells: Vec<Cell>) -> Result<Self, BoardParseError> {
        if cells.len() != config.len() {
            return Err(BoardParseError::Length {
                rows: config.rows,
                cols: config.cols,
                expected: config.len(),
                found: cells.len(),
            });
        }
        Ok(Board { config, cells })
    }

    /// Parse the textual format: one symbol per cell, row-major, whitespace
    /// ignored. `X`/`O` are marks and `.`, `-` or `_` are empty cells.
    pub fn parse(config: BoardConfig, text: &str) -> Result<Self, BoardParseError> {
        if config.rows == 0 || config.cols == 0 {
            return Err(BoardParseError::Dimensions {
                rows: config.rows,
                cols: config.cols,
            });
        }
        let cells = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(Cell::from_symbol)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_cells(config, cells)
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn rows(&self) -> usize {
        self.config.rows
    }

    pub fn cols(&self) -> usize {
        self.config.cols
    }

    /// Get the cell at a specific position. Row 0 is the top.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.config.index(row, col)]
    }

    /// Cell at a flat index, or `None` past the end of the board.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn is_empty_cell(&self, index: usize) -> bool {
        self.cell(index) == Some(Cell::Empty)
    }

    /// Indices of all empty cells in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Overwrite a cell in place. Used by the search to place and undo marks.
    pub(crate) fn set(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    /// Copy of this board with `player`'s mark at `index`. Legality is the
    /// caller's business; see [`GameHistory::play`](super::GameHistory::play).
    pub fn with_move(&self, index: usize, player: Player) -> Board {
        let mut next = self.clone();
        next.set(index, player.to_cell());
        next
    }

    /// New board of different dimensions carrying over the overlapping
    /// top-left rectangle; every other cell is empty.
    pub fn remap(&self, config: BoardConfig) -> Board {
        let mut board = Board::new(config);
        let rows = self.rows().min(config.rows);
        let cols = self.cols().min(config.cols);
        for row in 0..rows {
            for col in 0..cols {
                board.set(config.index(row, col), self.get(row, col));
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::CLASSIC)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.cols().max(1)).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}
