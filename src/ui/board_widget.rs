use crate::game::{Board, Cell};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

fn cell_style(cell: Cell) -> (&'static str, Style) {
    match cell {
        Cell::Empty => (" · ", Style::default().fg(Color::DarkGray)),
        Cell::X => (
            " X ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Cell::O => (
            " O ",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
    }
}

/// Board rows as styled lines, highlighting the cursor cell if given.
pub fn board_lines(board: &Board, cursor: Option<(usize, usize)>) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(board.rows() + 2);
    let rule = format!("  +{}+", "-".repeat(board.cols() * 3));

    lines.push(Line::from(rule.clone()));
    for row in 0..board.rows() {
        let mut spans = vec![Span::raw("  |")];
        for col in 0..board.cols() {
            let (symbol, mut style) = cell_style(board.get(row, col));
            if cursor == Some((row, col)) {
                style = style.bg(Color::DarkGray).add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(symbol, style));
        }
        spans.push(Span::raw("|"));
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(rule));

    lines
}
