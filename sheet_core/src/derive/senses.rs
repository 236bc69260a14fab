//! Senses - passive checks followed by granted senses

use super::state::DerivedState;
use crate::types::Skill;
use std::cmp::Ordering;

/// Case-insensitive name order, ties broken by exact bytes
pub fn sort_by_name(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn passive(state: &DerivedState, skill: Skill) -> i32 {
    10 + state
        .skills
        .get(skill.name())
        .unwrap_or_else(|| state.scores.modifier(skill.ability()))
}

/// The three passive senses, then the granted senses sorted by name
pub fn passive_senses(state: &DerivedState) -> Vec<String> {
    let mut granted = state.senses.clone();
    granted.sort_by(|a, b| sort_by_name(a, b));

    let mut senses = vec![
        format!("Passive perception: {}", passive(state, Skill::Perception)),
        format!("Passive investigation: {}", passive(state, Skill::Investigation)),
        format!("Passive insight: {}", passive(state, Skill::Insight)),
    ];
    senses.extend(granted);
    senses
}
