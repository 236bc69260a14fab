//! Conversion entry points

use crate::config::ConversionRules;
use crate::derive::{
    apply_modifier, armor_class, hit_points, merged_modifiers, passive_senses, render_speeds,
    DefenseLists, DerivedState,
};
use crate::source::{parse_character, BeyondCharacter, SchemaError};
use crate::stat_block::{StatBlock, ValueWithNotes};
use crate::types::Ability;

/// Convert a validated export with the built-in rules
pub fn convert(character: &BeyondCharacter) -> StatBlock {
    convert_with_rules(character, &ConversionRules::default())
}

/// Convert a validated export.
///
/// Pure and total over anything `source::validate` accepts: no I/O, no errors, and the
/// same input always yields the same stat block.
pub fn convert_with_rules(character: &BeyondCharacter, rules: &ConversionRules) -> StatBlock {
    let mut state = DerivedState::new(character, rules);
    for resolved in merged_modifiers(character, rules) {
        apply_modifier(&mut state, &resolved, character, rules);
    }

    let armor = armor_class(
        state.armor_base,
        state.scores.modifier(Ability::Dexterity),
        &character.inventory,
        &rules.armor,
    );
    let hp = hit_points(character, state.scores.modifier(Ability::Constitution), rules);
    let defenses = DefenseLists::collect(character, rules);
    let speed = render_speeds(
        &character.race.weight_speeds.normal,
        state.speed_bonus,
        &rules.units,
    );
    let senses = passive_senses(&state);
    let type_line = character
        .classes
        .iter()
        .map(|c| c.summary())
        .collect::<Vec<_>>()
        .join(" / ");

    tracing::debug!(
        hp = hp.value,
        ac = armor.value,
        saves = state.saves.len(),
        skills = state.skills.len(),
        "converted character"
    );

    StatBlock {
        type_line,
        hp: ValueWithNotes {
            value: hp.value,
            notes: hp.notes,
        },
        ac: ValueWithNotes {
            value: armor.value,
            notes: armor.notes,
        },
        initiative_modifier: state.initiative,
        initiative_advantage: false,
        speed,
        abilities: state.scores,
        damage_vulnerabilities: defenses.vulnerabilities,
        damage_resistances: defenses.resistances,
        damage_immunities: defenses.immunities,
        condition_immunities: defenses.condition_immunities,
        saves: state.saves.into_sorted(),
        skills: state.skills.into_sorted(),
        senses,
        languages: state.languages,
        challenge: character.total_level().to_string(),
    }
}

/// Parse, validate and convert a raw export; schema failures are the only errors
pub fn convert_str(json: &str) -> Result<StatBlock, SchemaError> {
    let character = parse_character(json)?;
    Ok(convert(&character))
}
