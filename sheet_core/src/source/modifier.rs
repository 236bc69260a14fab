//! Modifiers granted by race, background, class and equipped items

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single modifier as exported by the character service
///
/// The kind (`type`) stays a raw string here. It is resolved against the configurable
/// kind table when the engine runs, so a renamed kind never fails schema validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeyondModifier {
    /// Kind string: "bonus", "proficiency", "set", ...
    #[serde(rename = "type")]
    pub kind: String,
    /// Machine target: "strength-saving-throws", "unarmored-movement", ...
    pub sub_type: String,
    /// Human target: "Strength Saving Throws", "Perception", "Darkvision", ...
    pub friendly_subtype_name: String,
    #[serde(default)]
    pub value: Option<i32>,
    #[serde(default)]
    pub bonus_types: Vec<i32>,
    /// Applies even when the granting class is not the starting class
    pub available_to_multiclass: bool,
    /// Id of the feature that grants this modifier
    pub component_id: i64,
}

impl BeyondModifier {
    pub fn value_or_zero(&self) -> i32 {
        self.value.unwrap_or(0)
    }

    pub fn has_bonus_type(&self, bonus_type: i32) -> bool {
        self.bonus_types.contains(&bonus_type)
    }
}

/// Where a modifier came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierOrigin {
    Race,
    Background,
    Class,
    Item,
}

impl ModifierOrigin {
    /// Order in which origins are merged before the priority sort
    pub const MERGE_ORDER: [ModifierOrigin; 4] = [
        ModifierOrigin::Race,
        ModifierOrigin::Background,
        ModifierOrigin::Class,
        ModifierOrigin::Item,
    ];
}

impl fmt::Display for ModifierOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModifierOrigin::Race => "race",
            ModifierOrigin::Background => "background",
            ModifierOrigin::Class => "class",
            ModifierOrigin::Item => "item",
        };
        write!(f, "{}", name)
    }
}

/// Modifier lists partitioned by origin
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Modifiers {
    pub background: Vec<BeyondModifier>,
    pub class: Vec<BeyondModifier>,
    pub race: Vec<BeyondModifier>,
    pub item: Vec<BeyondModifier>,
}

impl Modifiers {
    pub fn by_origin(&self, origin: ModifierOrigin) -> &[BeyondModifier] {
        match origin {
            ModifierOrigin::Race => &self.race,
            ModifierOrigin::Background => &self.background,
            ModifierOrigin::Class => &self.class,
            ModifierOrigin::Item => &self.item,
        }
    }

    /// All modifiers in merge order (race, background, class, item), each tagged with its origin
    pub fn merged(&self) -> impl Iterator<Item = (ModifierOrigin, &BeyondModifier)> + '_ {
        ModifierOrigin::MERGE_ORDER
            .into_iter()
            .flat_map(move |origin| self.by_origin(origin).iter().map(move |m| (origin, m)))
    }

    pub fn len(&self) -> usize {
        self.background.len() + self.class.len() + self.race.len() + self.item.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
