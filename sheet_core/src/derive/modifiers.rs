//! Modifier pass - one ordered walk over every modifier the character has

use super::state::DerivedState;
use crate::config::{ConversionRules, ModifierKind};
use crate::source::{BeyondCharacter, BeyondModifier, ModifierOrigin};
use crate::types::{Ability, Skill};

/// A modifier with its origin and resolved kind
#[derive(Debug, Clone, Copy)]
pub struct ResolvedModifier<'a> {
    pub origin: ModifierOrigin,
    /// `None` when the kind string is not in the rules' kind table
    pub kind: Option<ModifierKind>,
    pub modifier: &'a BeyondModifier,
}

/// All modifiers merged race → background → class → item, then stable sorted by the
/// rules' priority table. Order within a priority level is the merge order.
pub fn merged_modifiers<'a>(
    character: &'a BeyondCharacter,
    rules: &ConversionRules,
) -> Vec<ResolvedModifier<'a>> {
    let mut merged: Vec<ResolvedModifier<'a>> = character
        .modifiers
        .merged()
        .map(|(origin, modifier)| ResolvedModifier {
            origin,
            kind: rules.kind_of(&modifier.kind),
            modifier,
        })
        .collect();
    merged.sort_by_key(|m| rules.priority_of(m.kind));
    merged
}

/// Proficiencies not available to multiclass characters only count when the class
/// granting them is the starting class.
pub fn grants_proficiency(modifier: &BeyondModifier, character: &BeyondCharacter) -> bool {
    if modifier.available_to_multiclass {
        return true;
    }
    character
        .class_granting(modifier.component_id)
        .map_or(false, |class| class.is_starting_class)
}

/// Apply a single modifier to the working state
pub fn apply_modifier(
    state: &mut DerivedState,
    resolved: &ResolvedModifier<'_>,
    character: &BeyondCharacter,
    rules: &ConversionRules,
) {
    let modifier = resolved.modifier;
    let ability = Ability::from_prefix(&modifier.friendly_subtype_name);

    match resolved.kind {
        Some(ModifierKind::Bonus) => apply_bonus(state, modifier, ability, rules),
        Some(kind @ (ModifierKind::Proficiency | ModifierKind::Expertise)) => {
            if !grants_proficiency(modifier, character) {
                tracing::debug!(
                    origin = %resolved.origin,
                    target_name = %modifier.friendly_subtype_name,
                    component = modifier.component_id,
                    "skipped proficiency from a non-starting class"
                );
                return;
            }
            apply_proficiency(state, modifier, ability, kind == ModifierKind::Expertise, rules);
        }
        Some(ModifierKind::Language) => {
            if ability.is_none() {
                state.languages.push(modifier.friendly_subtype_name.clone());
            }
        }
        Some(ModifierKind::Set) => apply_set(state, modifier, ability, rules),
        Some(ModifierKind::SetBase) => {
            if ability.is_none() {
                state.senses.push(format!(
                    "{} {}",
                    modifier.friendly_subtype_name,
                    modifier.value_or_zero()
                ));
            }
        }
        // Defense kinds are collected separately; unknown kinds are ignored
        _ => {}
    }
}

fn apply_bonus(
    state: &mut DerivedState,
    modifier: &BeyondModifier,
    ability: Option<Ability>,
    rules: &ConversionRules,
) {
    let subtypes = &rules.subtypes;
    if let Some(ability) = ability {
        state.scores[ability] = state.scores[ability].saturating_add(modifier.value_or_zero());
    } else if modifier.sub_type == subtypes.unarmored_movement {
        state.speed_bonus = modifier.value_or_zero();
    } else if modifier.has_bonus_type(subtypes.initiative_bonus_type)
        && modifier.sub_type == subtypes.initiative
    {
        state.initiative = state.proficiency_bonus;
    }
}

fn apply_proficiency(
    state: &mut DerivedState,
    modifier: &BeyondModifier,
    ability: Option<Ability>,
    expertise: bool,
    rules: &ConversionRules,
) {
    let bonus = if expertise {
        state.proficiency_bonus * 2
    } else {
        state.proficiency_bonus
    };

    match ability {
        Some(ability) if modifier.sub_type.ends_with(&rules.subtypes.saving_throws_suffix) => {
            let value = state.scores.modifier(ability) + bonus;
            state.saves.upsert_max(ability.short(), value);
        }
        _ => {
            if let Some(skill) = Skill::from_name(&modifier.friendly_subtype_name) {
                let value = state.scores.modifier(skill.ability()) + bonus;
                state.skills.upsert_max(skill.name(), value);
            }
        }
    }
}

fn apply_set(
    state: &mut DerivedState,
    modifier: &BeyondModifier,
    ability: Option<Ability>,
    rules: &ConversionRules,
) {
    if let Some(ability) = ability {
        // A zero or missing value leaves the score alone
        if let Some(value) = modifier.value.filter(|v| *v != 0) {
            state.scores[ability] = value;
        }
    } else if modifier.sub_type == rules.subtypes.unarmored_armor_class {
        state.armor_base = rules
            .armor
            .unarmored_base
            .saturating_add(state.scores.modifier(Ability::Dexterity))
            .saturating_add(state.scores.modifier(Ability::Wisdom));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{character, class, class_proficiency, modifier};

    fn run(character: &BeyondCharacter) -> DerivedState {
        let rules = ConversionRules::default();
        let mut state = DerivedState::new(character, &rules);
        for resolved in merged_modifiers(character, &rules) {
            apply_modifier(&mut state, &resolved, character, &rules);
        }
        state
    }

    #[test]
    fn test_priority_sort_is_stable() {
        let mut c = character(vec![class("Fighter", 10, 1, true, &[])], [10; 6]);
        c.modifiers.item = vec![modifier("set", "strength-score", "Strength Score", Some(19))];
        c.modifiers.race = vec![
            modifier("language", "common", "Common", None),
            modifier("bonus", "strength-score", "Strength Score", Some(2)),
        ];
        c.modifiers.class = vec![modifier("proficiency", "athletics", "Athletics", None)];
        c.modifiers.background = vec![modifier("bonus", "dexterity-score", "Dexterity Score", Some(1))];

        let rules = ConversionRules::default();
        let order: Vec<&str> = merged_modifiers(&c, &rules)
            .iter()
            .map(|m| m.modifier.friendly_subtype_name.as_str())
            .collect();

        // language (unlisted) first, then bonuses in merge order, proficiency, set
        assert_eq!(
            order,
            vec!["Common", "Strength Score", "Dexterity Score", "Athletics", "Strength Score"]
        );
    }

    #[test]
    fn test_merged_modifiers_carry_origin() {
        let mut c = character(vec![class("Fighter", 10, 1, true, &[])], [10; 6]);
        c.modifiers.item = vec![modifier("bonus", "strength-score", "Strength Score", Some(1))];
        c.modifiers.class = vec![modifier("bonus", "strength-score", "Strength Score", Some(1))];
        c.modifiers.race = vec![modifier("bonus", "strength-score", "Strength Score", Some(1))];
        c.modifiers.background = vec![modifier("bonus", "strength-score", "Strength Score", Some(1))];

        let origins: Vec<String> = merged_modifiers(&c, &ConversionRules::default())
            .iter()
            .map(|m| m.origin.to_string())
            .collect();
        assert_eq!(origins, vec!["race", "background", "class", "item"]);
    }

    #[test]
    fn test_set_overrides_earlier_bonus() {
        let mut c = character(vec![class("Fighter", 10, 1, true, &[])], [15, 10, 10, 10, 10, 10]);
        // Item set listed before race bonus in the input; priority still applies the set last
        c.modifiers.item = vec![modifier("set", "strength-score", "Strength Score", Some(19))];
        c.modifiers.race = vec![modifier("bonus", "strength-score", "Strength Score", Some(2))];
        let state = run(&c);
        assert_eq!(state.scores.strength, 19);
    }

    #[test]
    fn test_set_without_value_keeps_score() {
        let mut c = character(vec![class("Fighter", 10, 1, true, &[])], [15, 10, 10, 10, 10, 10]);
        c.modifiers.item = vec![
            modifier("set", "strength-score", "Strength Score", None),
            modifier("set", "strength-score", "Strength Score", Some(0)),
        ];
        assert_eq!(run(&c).scores.strength, 15);
    }

    #[test]
    fn test_saving_throw_uses_short_name() {
        let mut c = character(vec![class("Rogue", 8, 1, true, &[])], [10, 16, 10, 10, 10, 10]);
        c.modifiers.class = vec![modifier(
            "proficiency",
            "dexterity-saving-throws",
            "Dexterity Saving Throws",
            None,
        )];
        let state = run(&c);
        // +3 Dex, +2 proficiency
        assert_eq!(state.saves.get("Dex"), Some(5));
        assert!(state.skills.is_empty());
    }

    #[test]
    fn test_expertise_doubles_proficiency() {
        let mut c = character(vec![class("Rogue", 8, 5, true, &[])], [10, 16, 10, 10, 10, 10]);
        c.modifiers.class = vec![modifier("expertise", "stealth", "Stealth", None)];
        // +3 Dex, 2 × 3 proficiency
        assert_eq!(run(&c).skills.get("Stealth"), Some(9));
    }

    #[test]
    fn test_duplicate_skill_keeps_larger() {
        let mut c = character(vec![class("Rogue", 8, 1, true, &[])], [10, 16, 10, 10, 10, 10]);
        c.modifiers.background = vec![modifier("proficiency", "stealth", "Stealth", None)];
        c.modifiers.class = vec![modifier("expertise", "stealth", "Stealth", None)];
        let state = run(&c);
        assert_eq!(state.skills.get("Stealth"), Some(7));
        assert_eq!(state.skills.len(), 1);
    }

    #[test]
    fn test_non_starting_class_proficiency_is_gated() {
        let mut c = character(
            vec![
                class("Fighter", 10, 3, true, &[100]),
                class("Rogue", 8, 1, false, &[200]),
            ],
            [10, 14, 10, 10, 10, 10],
        );
        c.modifiers.class = vec![
            class_proficiency("proficiency", "stealth", "Stealth", 200),
            class_proficiency("proficiency", "athletics", "Athletics", 100),
        ];
        let state = run(&c);
        assert_eq!(state.skills.get("Stealth"), None);
        assert_eq!(state.skills.get("Athletics"), Some(2));
    }

    #[test]
    fn test_unowned_feature_is_gated() {
        let mut c = character(vec![class("Fighter", 10, 1, true, &[1])], [10; 6]);
        c.modifiers.class = vec![class_proficiency("proficiency", "stealth", "Stealth", 999)];
        assert!(run(&c).skills.is_empty());
    }

    #[test]
    fn test_multiclass_available_ignores_gate() {
        let mut c = character(
            vec![
                class("Fighter", 10, 1, true, &[]),
                class("Rogue", 8, 1, false, &[200]),
            ],
            [10; 6],
        );
        let mut m = class_proficiency("proficiency", "stealth", "Stealth", 200);
        m.available_to_multiclass = true;
        c.modifiers.class = vec![m];
        assert_eq!(run(&c).skills.get("Stealth"), Some(2));
    }

    #[test]
    fn test_proficiency_uses_scores_after_bonuses() {
        let mut c = character(vec![class("Fighter", 10, 1, true, &[])], [15, 10, 10, 10, 10, 10]);
        c.modifiers.class = vec![modifier(
            "proficiency",
            "strength-saving-throws",
            "Strength Saving Throws",
            None,
        )];
        c.modifiers.race = vec![modifier("bonus", "strength-score", "Strength Score", Some(1))];
        // 16 Str after the bonus
        assert_eq!(run(&c).saves.get("Str"), Some(5));
    }

    #[test]
    fn test_unarmored_movement_and_initiative() {
        let mut c = character(vec![class("Monk", 8, 5, true, &[])], [10; 6]);
        let mut alert = modifier("bonus", "initiative", "Initiative", None);
        alert.bonus_types = vec![1];
        c.modifiers.class = vec![
            modifier("bonus", "unarmored-movement", "Unarmored Movement", Some(10)),
            alert,
            modifier("bonus", "initiative", "Initiative", Some(5)),
        ];
        let state = run(&c);
        assert_eq!(state.speed_bonus, 10);
        assert_eq!(state.initiative, 3);
    }

    #[test]
    fn test_unarmored_armor_class() {
        let mut c = character(vec![class("Monk", 8, 1, true, &[])], [10, 16, 10, 10, 14, 10]);
        c.modifiers.class = vec![modifier(
            "set",
            "unarmored-armor-class",
            "Unarmored Armor Class",
            None,
        )];
        assert_eq!(run(&c).armor_base, 15);
    }

    #[test]
    fn test_languages_and_senses() {
        let mut c = character(vec![class("Wizard", 6, 1, true, &[])], [10; 6]);
        c.modifiers.race = vec![
            modifier("language", "elvish", "Elvish", None),
            modifier("set-base", "darkvision", "Darkvision", Some(60)),
            modifier("set-base", "tremorsense", "Tremorsense", None),
        ];
        let state = run(&c);
        assert_eq!(state.languages, vec!["Elvish"]);
        assert_eq!(state.senses, vec!["Darkvision 60", "Tremorsense 0"]);
    }

    #[test]
    fn test_ability_prefixed_language_is_dropped() {
        let mut c = character(vec![class("Wizard", 6, 1, true, &[])], [10; 6]);
        c.modifiers.race = vec![modifier("language", "language", "Charismatic Tongue", None)];
        assert!(run(&c).languages.is_empty());
    }

    #[test]
    fn test_prefix_collision_bonus_hits_ability() {
        let mut c = character(vec![class("Bard", 8, 1, true, &[])], [10; 6]);
        c.modifiers.item = vec![modifier("bonus", "intimidation", "Intimidation", Some(2))];
        assert_eq!(run(&c).scores.intelligence, 12);
    }

    #[test]
    fn test_unknown_kind_is_ignored() {
        let mut c = character(vec![class("Bard", 8, 1, true, &[])], [10; 6]);
        c.modifiers.item = vec![modifier("advantage", "stealth", "Stealth", Some(2))];
        let state = run(&c);
        assert!(state.skills.is_empty());
        assert_eq!(state.scores, c.ability_scores());
    }
}
