//! Summary tab view

use super::{modifier_line, section, value_line};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use sheet_core::{Ability, StatBlock};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let Some(loaded) = &app.loaded else {
        return;
    };
    let block = &loaded.block;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let scroll = app.scroll() as u16;

    let left = Paragraph::new(core_lines(block))
        .block(Block::default().borders(Borders::ALL).title(" Stat Block "))
        .scroll((scroll, 0));
    f.render_widget(left, chunks[0]);

    let right = Paragraph::new(proficiency_lines(block))
        .block(Block::default().borders(Borders::ALL).title(" Proficiencies "))
        .scroll((scroll, 0));
    f.render_widget(right, chunks[1]);
}

/// Height of the taller of the two summary columns
pub fn line_count(block: &StatBlock) -> usize {
    core_lines(block).len().max(proficiency_lines(block).len())
}

fn with_notes(value: i32, notes: &str) -> String {
    if notes.is_empty() {
        value.to_string()
    } else {
        format!("{} {}", value, notes)
    }
}

fn core_lines(block: &StatBlock) -> Vec<Line<'static>> {
    let mut lines = vec![
        value_line("Class", block.type_line.clone()),
        value_line("Level", block.challenge.clone()),
        Line::from(""),
        section("Defense"),
        value_line("Hit Points", with_notes(block.hp.value, &block.hp.notes)),
        value_line("Armor Class", with_notes(block.ac.value, &block.ac.notes)),
        modifier_line("Initiative", block.initiative_modifier),
        Line::from(""),
        section("Speed"),
    ];
    lines.extend(block.speed.iter().map(|s| Line::from(format!("  {}", s))));
    lines.push(Line::from(""));
    lines.push(section("Abilities"));
    for ability in Ability::ALL {
        let score = block.abilities[ability];
        lines.push(value_line(
            ability.name(),
            format!("{:>2} ({:+})", score, block.abilities.modifier(ability)),
        ));
    }

    let defenses = [
        ("Vulnerabilities", &block.damage_vulnerabilities),
        ("Resistances", &block.damage_resistances),
        ("Immunities", &block.damage_immunities),
        ("Condition Immunities", &block.condition_immunities),
    ];
    if defenses.iter().any(|(_, list)| !list.is_empty()) {
        lines.push(Line::from(""));
        lines.push(section("Damage & Conditions"));
        for (name, list) in defenses {
            if !list.is_empty() {
                lines.push(value_line(name, list.join(", ")));
            }
        }
    }
    lines
}

fn proficiency_lines(block: &StatBlock) -> Vec<Line<'static>> {
    let mut lines = vec![section("Saving Throws")];
    lines.extend(block.saves.iter().map(|m| modifier_line(&m.name, m.modifier)));
    lines.push(Line::from(""));
    lines.push(section("Skills"));
    lines.extend(block.skills.iter().map(|m| modifier_line(&m.name, m.modifier)));
    lines.push(Line::from(""));
    lines.push(section("Senses"));
    lines.extend(block.senses.iter().map(|s| Line::from(format!("  {}", s))));
    lines.push(Line::from(""));
    lines.push(section("Languages"));
    lines.push(Line::from(format!("  {}", block.languages.join(", "))));
    lines
}
