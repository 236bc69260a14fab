//! Hit points - hit dice accumulated per class

use crate::config::ConversionRules;
use crate::source::{BeyondCharacter, ClassEntry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitPoints {
    pub value: i32,
    /// "(5d8+2 / 3d10+2)"
    pub notes: String,
}

/// Hit points from one class: full die at its first level, `1 + die / 2` after
pub fn class_hit_points(hit_dice: i32, level: i32, con_mod: i32) -> i32 {
    if level < 1 {
        return 0;
    }
    let first = hit_dice.saturating_add(con_mod);
    let later = (1 + hit_dice.div_euclid(2)).saturating_add(con_mod);
    first.saturating_add(later.saturating_mul(level - 1))
}

/// Total hit points across every class, plus one per character level when the race grants
/// extra hit points per level
pub fn hit_points(character: &BeyondCharacter, con_mod: i32, rules: &ConversionRules) -> HitPoints {
    let mut value: i32 = character
        .classes
        .iter()
        .map(|c| class_hit_points(c.definition.hit_dice, c.level, con_mod))
        .fold(0, i32::saturating_add);

    let per_level = character
        .modifiers
        .race
        .iter()
        .any(|m| m.sub_type == rules.subtypes.hit_points_per_level);
    if per_level {
        value = value.saturating_add(character.total_level());
    }

    HitPoints {
        value,
        notes: hit_dice_notes(&character.classes, con_mod),
    }
}

fn hit_dice_notes(classes: &[ClassEntry], con_mod: i32) -> String {
    let dice: Vec<String> = classes
        .iter()
        .map(|c| format!("{}d{}{:+}", c.level, c.definition.hit_dice, con_mod))
        .collect();
    format!("({})", dice.join(" / "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{character, class, modifier};

    #[test]
    fn test_single_class_level_five() {
        // 8 + 2, then 4 × (1 + 4 + 2)
        assert_eq!(class_hit_points(8, 5, 2), 38);
    }

    #[test]
    fn test_level_one() {
        assert_eq!(class_hit_points(12, 1, 3), 15);
        assert_eq!(class_hit_points(6, 1, -1), 5);
    }

    #[test]
    fn test_multiclass_split_per_class() {
        let c = character(
            vec![class("Fighter", 10, 2, true, &[]), class("Wizard", 6, 3, false, &[])],
            [10, 10, 14, 10, 10, 10],
        );
        let hp = hit_points(&c, 2, &ConversionRules::default());
        // Fighter: (10 + 2) + (1 + 5 + 2) = 20
        // Wizard:  (6 + 2) + 2 × (1 + 3 + 2) = 20
        assert_eq!(hp.value, 40);
        assert_eq!(hp.notes, "(2d10+2 / 3d6+2)");
    }

    #[test]
    fn test_hit_points_per_level_race() {
        let mut c = character(vec![class("Cleric", 8, 4, true, &[])], [10; 6]);
        c.modifiers.race = vec![modifier(
            "bonus",
            "hit-points-per-level",
            "Hit Points per Level",
            Some(1),
        )];
        let hp = hit_points(&c, 0, &ConversionRules::default());
        // 8 + 3 × 5 = 23, plus 4 levels
        assert_eq!(hp.value, 27);
    }

    #[test]
    fn test_per_level_from_other_origin_ignored() {
        let mut c = character(vec![class("Cleric", 8, 4, true, &[])], [10; 6]);
        c.modifiers.item = vec![modifier("bonus", "hit-points-per-level", "HP", Some(1))];
        assert_eq!(hit_points(&c, 0, &ConversionRules::default()).value, 23);
    }

    #[test]
    fn test_extreme_con_saturates() {
        assert_eq!(class_hit_points(12, 20, i32::MAX), i32::MAX);
        assert_eq!(class_hit_points(8, 20, i32::MIN), i32::MIN);
    }

    #[test]
    fn test_negative_con_notes() {
        let c = character(vec![class("Wizard", 6, 2, true, &[])], [10, 10, 8, 10, 10, 10]);
        let hp = hit_points(&c, -1, &ConversionRules::default());
        assert_eq!(hp.notes, "(2d6-1)");
        assert_eq!(hp.value, 5 + 3);
    }
}
