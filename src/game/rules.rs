//! Win and draw detection over boards of any size.

use super::board::{Board, Cell};
use super::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GameOutcome {
    InProgress,
    Winner(Player),
    Draw,
}

impl GameOutcome {
    pub fn is_over(self) -> bool {
        self != GameOutcome::InProgress
    }

    /// Minimax value of a finished game, `None` while it is in progress.
    pub fn score(self) -> Option<i8> {
        match self {
            GameOutcome::InProgress => None,
            GameOutcome::Winner(player) => Some(player.score()),
            GameOutcome::Draw => Some(0),
        }
    }
}

impl Board {
    /// First completed line of `win_length` equal marks.
    ///
    /// Lines are scanned horizontal, vertical, diagonal (`\`), then
    /// anti-diagonal (`/`), each in row-major order of its starting cell.
    pub fn winner(&self) -> Option<Player> {
        let rows = self.rows() as isize;
        let cols = self.cols() as isize;
        let len = self.config().win_length() as isize;
        if len == 0 {
            return None;
        }

        // (start row range, start col range, row step, col step)
        let families = [
            (0..rows, 0..cols - len + 1, 0, 1),
            (0..rows - len + 1, 0..cols, 1, 0),
            (0..rows - len + 1, 0..cols - len + 1, 1, 1),
            (len - 1..rows, 0..cols - len + 1, -1, 1),
        ];

        for (row_starts, col_starts, dr, dc) in families {
            for row in row_starts {
                for col in col_starts.clone() {
                    if let Some(player) = self.line_owner(row, col, dr, dc, len) {
                        return Some(player);
                    }
                }
            }
        }

        None
    }

    /// The player owning every cell of the `len`-long line starting at
    /// `(row, col)`, if any.
    fn line_owner(&self, row: isize, col: isize, dr: isize, dc: isize, len: isize) -> Option<Player> {
        let at = |i: isize| self.get((row + dr * i) as usize, (col + dc * i) as usize);
        let player = match at(0) {
            Cell::Empty => return None,
            Cell::X => Player::X,
            Cell::O => Player::O,
        };
        (1..len).all(|i| at(i) == player.to_cell()).then_some(player)
    }

    /// No winner and no empty cell left.
    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winner().is_none()
    }

    pub fn outcome(&self) -> GameOutcome {
        match self.winner() {
            Some(player) => GameOutcome::Winner(player),
            None if self.is_full() => GameOutcome::Draw,
            None => GameOutcome::InProgress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::BoardConfig;

    fn board(rows: usize, cols: usize, text: &str) -> Board {
        Board::parse(BoardConfig::new(rows, cols), text).unwrap()
    }

    /// Reference check against the eight fixed lines of the 3x3 game.
    fn classic_winner(cells: &[Cell]) -> Option<Cell> {
        const LINES: [[usize; 3]; 8] = [
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ];
        LINES.iter().find_map(|&[a, b, c]| {
            (cells[a] != Cell::Empty && cells[a] == cells[b] && cells[a] == cells[c])
                .then_some(cells[a])
        })
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(Board::default().winner(), None);
        assert_eq!(Board::default().outcome(), GameOutcome::InProgress);
    }

    #[test]
    fn test_matches_classic_lines_on_every_3x3_board() {
        let symbols = [Cell::Empty, Cell::X, Cell::O];
        for code in 0..3usize.pow(9) {
            let mut n = code;
            let cells: Vec<Cell> = (0..9)
                .map(|_| {
                    let cell = symbols[n % 3];
                    n /= 3;
                    cell
                })
                .collect();
            let board = Board::from_cells(BoardConfig::CLASSIC, cells.clone()).unwrap();
            assert_eq!(
                board.winner().map(Player::to_cell),
                classic_winner(&cells),
                "mismatch on board\n{board}"
            );
            assert_eq!(
                board.is_draw(),
                board.winner().is_none() && !cells.contains(&Cell::Empty)
            );
        }
    }

    #[test]
    fn test_horizontal_win() {
        assert_eq!(board(3, 3, "... OOO X.X").winner(), Some(Player::O));
        assert_eq!(board(4, 5, "..... .XXXX ..... .....").winner(), Some(Player::X));
    }

    #[test]
    fn test_vertical_win() {
        assert_eq!(board(3, 3, "..X .OX ..X").winner(), Some(Player::X));
        assert_eq!(
            board(5, 4, ".... O... O... O... O...").winner(),
            Some(Player::O)
        );
    }

    #[test]
    fn test_diagonal_win() {
        assert_eq!(board(3, 3, "X.. OX. O.X").winner(), Some(Player::X));
        // 4x5 board, win length 4, diagonal starting at column 1.
        assert_eq!(
            board(4, 5, ".O... ..O.. ...O. ....O").winner(),
            Some(Player::O)
        );
    }

    #[test]
    fn test_anti_diagonal_win() {
        assert_eq!(board(3, 3, "..O XO. OX.").winner(), Some(Player::O));
        // 5x4 board, anti-diagonal from (4, 0) to (1, 3).
        assert_eq!(
            board(5, 4, ".... ...X ..X. .X.. X...").winner(),
            Some(Player::X)
        );
    }

    #[test]
    fn test_run_shorter_than_win_length_is_not_a_win() {
        assert_eq!(board(4, 4, "XXX. OOO. .... ....").winner(), None);
        assert_eq!(board(4, 6, "XXX.XX ...... ...... ......").winner(), None);
    }

    #[test]
    fn test_first_line_in_scan_order_wins() {
        // Only reachable by hand-editing: both players own a row.
        assert_eq!(board(3, 3, "OOO XXX ...").winner(), Some(Player::O));
    }

    #[test]
    fn test_draw_board() {
        let b = board(3, 3, "XOX XOO OXX");
        assert!(b.is_draw());
        assert_eq!(b.winner(), None);
        assert_eq!(b.outcome(), GameOutcome::Draw);
        assert_eq!(b.outcome().score(), Some(0));
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        let b = board(3, 3, "XXX OOX OXO");
        assert!(!b.is_draw());
        assert_eq!(b.outcome(), GameOutcome::Winner(Player::X));
        assert_eq!(b.outcome().score(), Some(1));
    }

    #[test]
    fn test_degenerate_dimensions() {
        // A single row wins with one mark.
        assert_eq!(board(1, 4, "..O.").winner(), Some(Player::O));
        // Two rows: any vertical pair wins.
        assert_eq!(board(2, 4, ".X.. .X..").winner(), Some(Player::X));
        assert_eq!(board(2, 4, ".X.. ..X.").winner(), Some(Player::X));
    }
}
