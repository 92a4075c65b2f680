use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use mnk_tictactoe::config::AppConfig;
use mnk_tictactoe::session::Session;
use mnk_tictactoe::ui::App;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

/// Play tic-tac-toe on any board size against a minimax opponent.
#[derive(Parser)]
#[command(name = "mnk_tictactoe", about = "Terminal m,n,k tic-tac-toe")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "mnk.toml")]
    config: PathBuf,

    /// Override the number of rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override the number of columns
    #[arg(long)]
    cols: Option<usize>,

    /// Disable the automated opponent
    #[arg(long)]
    two_player: bool,

    /// Write logs to this file (the terminal is owned by the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(rows) = cli.rows {
        config.game.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.game.cols = cols;
    }
    if cli.two_player {
        config.opponent.enabled = false;
    }
    config.validate().context("invalid board settings")?;

    let session = Session::from_config(&config).context("starting game session")?;
    tracing::info!(board = %config.game.board(), opponent = config.opponent.enabled, "starting");

    run(App::new(session)).context("terminal UI failed")
}

fn run(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal even if the app failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
