//! StatBlock - the flat record Improved Initiative imports

use crate::types::AbilityScores;
use serde::{Deserialize, Serialize};

/// A value with a human-readable breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ValueWithNotes {
    pub value: i32,
    pub notes: String,
}

/// A named save or skill bonus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NamedModifier {
    pub name: String,
    pub modifier: i32,
}

/// Converted character, ready to paste into the combat tracker
///
/// Fields the tracker treats as optional (`Source`, `Traits`, `Actions`, ...) are not
/// emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatBlock {
    /// "Monk (Way of the Open Hand) / Cleric"
    #[serde(rename = "Type")]
    pub type_line: String,
    #[serde(rename = "HP")]
    pub hp: ValueWithNotes,
    #[serde(rename = "AC")]
    pub ac: ValueWithNotes,
    pub initiative_modifier: i32,
    pub initiative_advantage: bool,
    pub speed: Vec<String>,
    pub abilities: AbilityScores,
    pub damage_vulnerabilities: Vec<String>,
    pub damage_resistances: Vec<String>,
    pub damage_immunities: Vec<String>,
    pub condition_immunities: Vec<String>,
    pub saves: Vec<NamedModifier>,
    pub skills: Vec<NamedModifier>,
    pub senses: Vec<String>,
    pub languages: Vec<String>,
    /// Total character level
    pub challenge: String,
}

impl StatBlock {
    pub fn save(&self, name: &str) -> Option<i32> {
        find(&self.saves, name)
    }

    pub fn skill(&self, name: &str) -> Option<i32> {
        find(&self.skills, name)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn find(list: &[NamedModifier], name: &str) -> Option<i32> {
    list.iter().find(|m| m.name == name).map(|m| m.modifier)
}
