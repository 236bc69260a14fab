//! Raw JSON view for the source and converted tabs

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let Some(json) = app.current_json() else {
        return;
    };

    let title = match app.save_path() {
        Some(path) => format!(" {} -> {} ", app.current_tab.name(), path.display()),
        None => format!(" {} ", app.current_tab.name()),
    };

    let lines: Vec<Line> = json.lines().map(highlight).collect();
    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .scroll((app.scroll() as u16, 0));

    f.render_widget(paragraph, area);
}

/// Keys in cyan, values in white
fn highlight(line: &str) -> Line<'static> {
    match line.split_once("\": ") {
        Some((key, value)) => Line::from(vec![
            Span::styled(format!("{}\":", key), Style::default().fg(Color::Cyan)),
            Span::styled(format!(" {}", value), Style::default().fg(Color::White)),
        ]),
        None => Line::from(Span::styled(
            line.to_string(),
            Style::default().fg(Color::Gray),
        )),
    }
}
