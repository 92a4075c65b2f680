use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use mnk_tictactoe::ai::{best_move, MinimaxAgent, RandomAgent, TRACTABLE_EMPTY_CELLS};
use mnk_tictactoe::game::{Board, BoardConfig, Cell, GameOutcome, Player};
use mnk_tictactoe::selfplay::evaluate;

/// Query the m,n,k tic-tac-toe engine from the command line.
#[derive(Parser)]
#[command(name = "mnk-solve", about = "Minimax queries for m,n,k tic-tac-toe")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log: String,
}

#[derive(Args)]
struct BoardArgs {
    /// Row-major cells: X, O, and '.', '-' or '_' for empty. Whitespace is ignored.
    #[arg(long)]
    board: String,

    #[arg(long, default_value_t = 3)]
    rows: usize,

    #[arg(long, default_value_t = 3)]
    cols: usize,
}

impl BoardArgs {
    fn parse(&self) -> Result<Board> {
        Board::parse(BoardConfig::new(self.rows, self.cols), &self.board)
            .with_context(|| format!("parsing board {:?}", self.board))
    }
}

#[derive(Subcommand)]
enum Command {
    /// Print the minimax move for the side to move
    BestMove {
        #[command(flatten)]
        board: BoardArgs,

        /// Side to search for (defaults to whoever is to move by mark count)
        #[arg(long)]
        player: Option<Player>,

        #[arg(long)]
        json: bool,
    },
    /// Print the winner or draw status of a board
    Status {
        #[command(flatten)]
        board: BoardArgs,

        #[arg(long)]
        json: bool,
    },
    /// Play the minimax agent against a random agent, alternating sides
    Selfplay {
        #[arg(long, default_value_t = 10)]
        games: usize,

        /// Seed for the random agent
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long, default_value_t = 3)]
        rows: usize,

        #[arg(long, default_value_t = 3)]
        cols: usize,

        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log)))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::BestMove {
            board,
            player,
            json,
        } => run_best_move(&board.parse()?, player, json),
        Command::Status { board, json } => run_status(&board.parse()?, json),
        Command::Selfplay {
            games,
            seed,
            rows,
            cols,
            json,
        } => run_selfplay(games, seed, BoardConfig::new(rows, cols), json),
    }
}

/// X moves first, so O is to move whenever X has more marks.
fn side_to_move(board: &Board) -> Player {
    if board.count(Cell::X) > board.count(Cell::O) {
        Player::O
    } else {
        Player::X
    }
}

fn run_best_move(board: &Board, player: Option<Player>, json: bool) -> Result<()> {
    let player = player.unwrap_or_else(|| side_to_move(board));
    let empty = board.empty_cells().count();
    if empty > TRACTABLE_EMPTY_CELLS {
        bail!("{empty} empty cells is too many to search (limit {TRACTABLE_EMPTY_CELLS})");
    }
    let cell = best_move(board, player).context("searching for a move")?;
    let (row, col) = board.config().position(cell);

    if json {
        let out = json!({
            "player": player,
            "cell": cell,
            "row": row,
            "col": col,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", describe_move(board.config(), cell, player));
        println!("{}", board.with_move(cell, player));
    }
    Ok(())
}

/// One-line summary of a move; rows and columns count from 1 as in the TUI.
fn describe_move(config: BoardConfig, cell: usize, player: Player) -> String {
    let (row, col) = config.position(cell);
    format!("{player} plays cell {cell} (row {}, column {})", row + 1, col + 1)
}

fn run_status(board: &Board, json: bool) -> Result<()> {
    let outcome = board.outcome();

    if json {
        let winner = match outcome {
            GameOutcome::Winner(player) => Some(player),
            _ => None,
        };
        let out = json!({
            "board": board.config().to_string(),
            "win_length": board.config().win_length(),
            "winner": winner,
            "draw": board.is_draw(),
            "score": outcome.score(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        match outcome {
            GameOutcome::Winner(player) => println!("Winner: {player}"),
            GameOutcome::Draw => println!("Draw"),
            GameOutcome::InProgress => println!("In progress, {} to move", side_to_move(board)),
        }
    }
    Ok(())
}

fn run_selfplay(games: usize, seed: Option<u64>, config: BoardConfig, json: bool) -> Result<()> {
    if config.rows == 0 || config.cols == 0 {
        bail!("board dimensions must be at least 1x1, got {config}");
    }

    let mut subject = MinimaxAgent::new();
    let mut sparring = match seed {
        Some(seed) => RandomAgent::with_seed(seed),
        None => RandomAgent::new(),
    };
    let report = evaluate(&mut subject, &mut sparring, config, games).context("running self-play")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "Minimax vs Random on {config}: {} games, {} wins, {} draws, {} losses ({:.0}% wins, {:.0}% draws, {:.1} moves/game)",
            report.games,
            report.wins,
            report.draws,
            report.losses,
            report.win_rate() * 100.0,
            report.draw_rate() * 100.0,
            report.average_game_length()
        );
    }
    Ok(())
}
