//! Damage and condition defenses

use crate::config::{ConversionRules, ModifierKind};
use crate::source::BeyondCharacter;

/// The four defense lists, names in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefenseLists {
    pub vulnerabilities: Vec<String>,
    pub resistances: Vec<String>,
    pub immunities: Vec<String>,
    pub condition_immunities: Vec<String>,
}

impl DefenseLists {
    /// Collect defense modifiers from the origins the rules allow
    pub fn collect(character: &BeyondCharacter, rules: &ConversionRules) -> Self {
        let mut lists = DefenseLists::default();
        for (origin, modifier) in character.modifiers.merged() {
            if !rules.is_defense_origin(origin) {
                continue;
            }
            let target = match rules.kind_of(&modifier.kind) {
                Some(ModifierKind::Vulnerability) => &mut lists.vulnerabilities,
                Some(ModifierKind::Resistance) => &mut lists.resistances,
                Some(ModifierKind::Immunity) => &mut lists.immunities,
                Some(ModifierKind::ConditionImmunity) => &mut lists.condition_immunities,
                _ => continue,
            };
            target.push(modifier.friendly_subtype_name.clone());
        }
        lists
    }
}
