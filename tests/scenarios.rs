use mnk_tictactoe::ai::best_move;
use mnk_tictactoe::config::AppConfig;
use mnk_tictactoe::error::{MoveError, SearchError, SessionError};
use mnk_tictactoe::game::{Board, BoardConfig, Cell, GameHistory, GameOutcome, Player};
use mnk_tictactoe::session::Session;

fn classic(text: &str) -> Board {
    Board::parse(BoardConfig::CLASSIC, text).unwrap()
}

#[test]
fn test_o_answers_center_with_corner() {
    let history = GameHistory::default().play(4).unwrap();
    let cell = best_move(history.current_board(), history.current_player()).unwrap();
    assert_eq!(cell, 0, "expected a corner reply to the center opening");
}

#[test]
fn test_x_completes_top_row() {
    let board = classic("XX. OO. ...");
    assert_eq!(best_move(&board, Player::X), Ok(2));
}

#[test]
fn test_best_move_is_repeatable() {
    let board = classic("X.O .X. ...");
    let first = best_move(&board, Player::O);
    assert_eq!(first, best_move(&board, Player::O));
    assert_eq!(first, Ok(8), "O must block the diagonal");
}

#[test]
fn test_full_board_search_is_an_error() {
    let board = classic("XOX XOO OXX");
    assert_eq!(best_move(&board, Player::O), Err(SearchError::NoLegalMove));
}

#[test]
fn test_drawn_board_reports_draw() {
    let board = classic("XOX XOO OXX");
    assert!(board.is_draw());
    assert_eq!(board.winner(), None);
    assert_eq!(board.outcome(), GameOutcome::Draw);
}

#[test]
fn test_resize_moves_center_mark_to_new_coordinates() {
    let history = GameHistory::default().play(4).unwrap();
    let resized = history.resize(4, 4);
    assert_eq!(resized.len(), 1);
    let board = resized.current_board();
    for i in 0..16 {
        let expected = if i == 5 { Cell::X } else { Cell::Empty };
        assert_eq!(board.cell(i), Some(expected), "cell {i}");
    }
}

#[test]
fn test_occupied_cell_is_rejected_without_touching_history() {
    let history = GameHistory::default().play(4).unwrap();
    assert_eq!(history.play(4), Err(MoveError::Occupied(4)));
    assert_eq!(history.len(), 2);
    assert_eq!(history.current_move(), 1);
}

#[test]
fn test_winning_lines_on_a_5x6_board() {
    let config = BoardConfig::new(5, 6);
    assert_eq!(config.win_length(), 5);

    let lines: [(&str, Player); 4] = [
        ("...... XXXXX. ...... ...... ......", Player::X),
        ("..O... ..O... ..O... ..O... ..O...", Player::O),
        (".X.... ..X... ...X.. ....X. .....X", Player::X),
        ("....O. ...O.. ..O... .O.... O.....", Player::O),
    ];
    for (text, player) in lines {
        let board = Board::parse(config, text).unwrap();
        assert_eq!(board.winner(), Some(player), "board\n{board}");
    }
}

#[test]
fn test_human_versus_minimax_never_wins() {
    // The human always takes the lowest empty cell; the opponent must hold.
    let mut session = Session::from_config(&Default::default()).unwrap();
    while !session.outcome().is_over() {
        let cell = session.board().empty_cells().next().unwrap();
        session.play(cell).unwrap();
    }
    assert_ne!(session.outcome(), GameOutcome::Winner(Player::X));
}

#[test]
fn test_playing_after_game_over_is_rejected() {
    let mut session = Session::two_player(BoardConfig::CLASSIC);
    for cell in [0, 3, 1, 4, 2] {
        session.play(cell).unwrap();
    }
    assert_eq!(
        session.play(8),
        Err(SessionError::Move(MoveError::GameOver))
    );
}

#[test]
fn test_validated_4x4_config_does_not_search_on_start() {
    let mut config = AppConfig::default();
    config.game.rows = 4;
    config.game.cols = 4;
    config.opponent.plays = Player::X;
    config.validate().unwrap();

    let mut session = Session::from_config(&config).unwrap();
    assert!(session.opponent().is_none(), "opponent should start paused");
    let turn = session.play(5).unwrap();
    assert_eq!(turn.reply, None);
    assert_eq!(session.history().len(), 2);
}
