//! Shown in place of the data tabs when no character could be loaded

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, message: &str, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "No character loaded",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Usage: sheet_tui <character.json> [--rules rules.toml] [--print] [--output FILE]",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Error "))
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}
