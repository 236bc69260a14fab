//! DerivedState - working state for a single conversion

use super::senses::sort_by_name;
use crate::config::ConversionRules;
use crate::source::BeyondCharacter;
use crate::stat_block::NamedModifier;
use crate::types::{proficiency_bonus, AbilityScores};

/// Name -> modifier list where a repeated name keeps the larger value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BonusList {
    entries: Vec<NamedModifier>,
}

impl BonusList {
    pub fn new() -> Self {
        BonusList::default()
    }

    /// Insert `name`, or raise its modifier to `modifier` if that is larger.
    /// Values are never summed.
    pub fn upsert_max(&mut self, name: &str, modifier: i32) {
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(existing) => {
                if modifier > existing.modifier {
                    tracing::trace!(entry = name, from = existing.modifier, to = modifier, "raised bonus");
                    existing.modifier = modifier;
                }
            }
            None => self.entries.push(NamedModifier {
                name: name.to_string(),
                modifier,
            }),
        }
    }

    pub fn get(&self, name: &str) -> Option<i32> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.modifier)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by name
    pub fn into_sorted(self) -> Vec<NamedModifier> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| sort_by_name(&a.name, &b.name));
        entries
    }
}

/// Accumulates everything the modifier pass produces
///
/// Built fresh for every conversion from a copy of the export's scores, so nothing leaks
/// between calls.
#[derive(Debug, Clone)]
pub struct DerivedState {
    /// Ability scores, mutated in place by bonus and set modifiers
    pub scores: AbilityScores,
    pub proficiency_bonus: i32,
    /// AC before armor; replaced by unarmored defense
    pub armor_base: i32,
    pub initiative: i32,
    /// Added to every non-zero speed
    pub speed_bonus: i32,
    pub saves: BonusList,
    pub skills: BonusList,
    /// "Darkvision 60" style entries from set-base modifiers
    pub senses: Vec<String>,
    pub languages: Vec<String>,
}

impl DerivedState {
    pub fn new(character: &BeyondCharacter, rules: &ConversionRules) -> Self {
        DerivedState {
            scores: character.ability_scores(),
            proficiency_bonus: proficiency_bonus(character.first_class_level()),
            armor_base: rules.armor.unarmored_base,
            initiative: 0,
            speed_bonus: 0,
            saves: BonusList::new(),
            skills: BonusList::new(),
            senses: Vec::new(),
            languages: Vec::new(),
        }
    }
}
