use crate::game::{GameOutcome, Player};
use crate::session::Session;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::board_lines;

pub fn render(
    frame: &mut Frame,
    session: &Session,
    cursor: (usize, usize),
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Board + history
            Constraint::Length(3), // Message
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(28)])
        .split(chunks[1]);

    render_header(frame, session, chunks[0]);
    render_board(frame, session, cursor, middle[0]);
    render_history(frame, session, middle[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::X => Color::Cyan,
        Player::O => Color::Magenta,
    }
}

fn render_header(frame: &mut Frame, session: &Session, area: Rect) {
    let history = session.history();
    let mode = match session.opponent() {
        Some((name, side)) => format!("{name} plays {side}"),
        None => "Two players".to_string(),
    };

    let (status, color) = match history.outcome() {
        GameOutcome::Winner(player) => (format!("Winner: {player}"), player_color(player)),
        GameOutcome::Draw => ("Draw".to_string(), Color::Yellow),
        GameOutcome::InProgress => {
            let player = history.current_player();
            (format!("Next player: {player}"), player_color(player))
        }
    };

    let text = format!(
        "{status}  |  {} board, {} in a row  |  {mode}",
        history.config(),
        history.config().win_length()
    );

    let header = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Tic-Tac-Toe"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, session: &Session, cursor: (usize, usize), area: Rect) {
    let board = session.board();
    let cursor = (!session.outcome().is_over()).then_some(cursor);
    let mut lines = vec![Line::from("")];
    lines.extend(board_lines(board, cursor));

    if let Some(score) = session.outcome().score() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Score: {score:+}"),
            Style::default().fg(Color::Yellow),
        )));
    }

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Board"));
    frame.render_widget(widget, area);
}

fn render_history(frame: &mut Frame, session: &Session, area: Rect) {
    let history = session.history();
    let current = history.current_move();

    let lines: Vec<Line> = (0..history.len())
        .map(|index| {
            let description = if index > 0 {
                format!("Go to move #{index}")
            } else {
                "Go to game start".to_string()
            };
            if index == current {
                Line::from(Span::styled(
                    format!("> {description}"),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(format!("  {description}"))
            }
        })
        .collect();

    // Keep the current entry in view.
    let visible = area.height.saturating_sub(2) as usize;
    let offset = (current + 1).saturating_sub(visible) as u16;

    let widget = Paragraph::new(lines)
        .scroll((offset, 0))
        .block(Block::default().borders(Borders::ALL).title("History"));
    frame.render_widget(widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line1 = Line::from("Arrows: Move  |  Enter: Play  |  PgUp/PgDn/Home/End, 0-9: History");
    let line2 = Line::from("+/-: Rows  |  ]/[: Cols  |  A: Toggle opponent  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
