//! Armor class - worn armor vs. the unarmored base

use crate::config::ArmorRules;
use crate::source::InventoryItem;

/// Final AC and the list of armor that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArmorClass {
    pub value: i32,
    /// "(Studded Leather + Shield)", empty when nothing is worn
    pub notes: String,
}

/// Dex modifier allowed on top of armor, from the category of the heaviest-AC piece
///
/// No armor, an unknown category or a light one add the full modifier, medium armor caps
/// it, heavy armor drops it.
pub fn dex_bonus_cap(dex_mod: i32, category: Option<i32>, rules: &ArmorRules) -> i32 {
    match category {
        Some(c) if c >= rules.heavy_category => 0,
        Some(c) if c >= rules.medium_category => dex_mod.min(rules.medium_dex_cap),
        _ => dex_mod,
    }
}

/// Calculate AC
///
/// `max(base, sum(worn armor AC, or the unarmored base when none) + capped Dex)`, where
/// `base` is whatever the modifier pass left (10, or the unarmored defense value).
///
/// # Arguments
/// * `base` - AC base after the modifier pass
/// * `dex_mod` - Dexterity modifier after the modifier pass
/// * `inventory` - the full inventory; only equipped items with a non-zero AC count
pub fn armor_class(
    base: i32,
    dex_mod: i32,
    inventory: &[InventoryItem],
    rules: &ArmorRules,
) -> ArmorClass {
    let mut worn: Vec<(&InventoryItem, i32)> = inventory
        .iter()
        .filter_map(|item| item.worn_armor_class().map(|ac| (item, ac)))
        .collect();
    // Stable: equal AC keeps inventory order
    worn.sort_by(|a, b| b.1.cmp(&a.1));

    let category = worn
        .first()
        .and_then(|(item, _)| item.definition.armor_type_id);
    let dex_bonus = dex_bonus_cap(dex_mod, category, rules);
    tracing::debug!(dex_mod, ?category, dex_bonus, "armor dex bonus");

    let armor_total = if worn.is_empty() {
        rules.unarmored_base
    } else {
        worn.iter().fold(0, |total: i32, (_, ac)| total.saturating_add(*ac))
    };

    let notes = if worn.is_empty() {
        String::new()
    } else {
        let names: Vec<&str> = worn
            .iter()
            .map(|(item, _)| item.definition.name.as_str())
            .collect();
        format!("({})", names.join(" + "))
    };

    ArmorClass {
        value: base.max(armor_total.saturating_add(dex_bonus)),
        notes,
    }
}
