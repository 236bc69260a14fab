//! Help tab view

use super::section;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, _app: &App, area: Rect) {
    let lines = vec![
        section("Navigation"),
        key_line("1-4", "Jump to tab (Summary/Source/Improved Initiative/Help)"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("↑/k  ↓/j", "Scroll"),
        key_line("PgUp / PgDn", "Scroll a page"),
        key_line("q / Ctrl+C", "Quit"),
        Line::from(""),
        section("Files"),
        key_line("s", "Save the current tab next to the input file"),
        Line::from("  Source tab writes <name>.source.json"),
        Line::from("  Summary and Improved Initiative tabs write <name>.ii.json"),
        Line::from(""),
        section("Conversion"),
        Line::from(""),
        Line::from(Span::styled(
            "Modifiers:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  Race, background, class and item modifiers are merged, then applied"),
        Line::from("  in priority order: other kinds first, then bonus, proficiency,"),
        Line::from("  expertise and set."),
        Line::from(""),
        Line::from(Span::styled(
            "Hit Points:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  First class level: full hit die + Con"),
        Line::from("  Later levels: average hit die roll (die / 2 + 1) + Con"),
        Line::from(""),
        Line::from(Span::styled(
            "Armor Class:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  Best worn armor (or 10) + Dex, capped at +2 for medium and 0 for heavy"),
        Line::from("  Shields and other worn items with AC add on top"),
        Line::from(""),
        Line::from(Span::styled(
            "Rules file:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  --rules <file.toml> overrides modifier kind names, priorities and units"),
        Line::from("  Set RUST_LOG=debug to trace each applied modifier on stderr"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help "))
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:20}", key),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
