//! Builders for hand-made character exports used across unit tests

use crate::source::{
    BeyondCharacter, BeyondModifier, ClassDefinition, ClassEntry, ClassFeature,
    FeatureDefinition, InventoryItem, ItemDefinition, Modifiers, Race, Speeds, Stat,
    SubclassDefinition, WeightSpeeds,
};

pub fn class(name: &str, hit_dice: i32, level: i32, starting: bool, features: &[i64]) -> ClassEntry {
    ClassEntry {
        level,
        class_features: features
            .iter()
            .map(|id| ClassFeature {
                definition: FeatureDefinition { id: *id },
            })
            .collect(),
        definition: ClassDefinition {
            name: name.to_string(),
            hit_dice,
        },
        subclass_definition: None,
        is_starting_class: starting,
    }
}

pub fn with_subclass(mut entry: ClassEntry, subclass: &str) -> ClassEntry {
    entry.subclass_definition = Some(SubclassDefinition {
        name: subclass.to_string(),
    });
    entry
}

pub fn character(classes: Vec<ClassEntry>, stats: [i32; 6]) -> BeyondCharacter {
    BeyondCharacter {
        base_hit_points: 0,
        classes,
        race: Race {
            weight_speeds: WeightSpeeds {
                normal: Speeds {
                    walk: 30,
                    ..Speeds::default()
                },
            },
        },
        stats: stats.iter().map(|value| Stat { value: *value }).collect(),
        modifiers: Modifiers::default(),
        inventory: Vec::new(),
    }
}

pub fn modifier(kind: &str, sub_type: &str, friendly: &str, value: Option<i32>) -> BeyondModifier {
    BeyondModifier {
        kind: kind.to_string(),
        sub_type: sub_type.to_string(),
        friendly_subtype_name: friendly.to_string(),
        value,
        bonus_types: Vec::new(),
        available_to_multiclass: true,
        component_id: 0,
    }
}

/// A proficiency granted by a class feature, not available to multiclassing
pub fn class_proficiency(kind: &str, sub_type: &str, friendly: &str, feature: i64) -> BeyondModifier {
    BeyondModifier {
        available_to_multiclass: false,
        component_id: feature,
        ..modifier(kind, sub_type, friendly, None)
    }
}

pub fn armor(name: &str, armor_class: i32, category: Option<i32>, equipped: bool) -> InventoryItem {
    InventoryItem {
        equipped: Some(equipped),
        definition: ItemDefinition {
            armor_class: Some(armor_class),
            armor_type_id: category,
            name: name.to_string(),
        },
    }
}
