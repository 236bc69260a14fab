//! Source record - a character sheet as exported by the character-builder service

mod class;
mod inventory;
mod modifier;
mod schema;

pub use class::{ClassDefinition, ClassEntry, ClassFeature, FeatureDefinition, SubclassDefinition};
pub use inventory::{InventoryItem, ItemDefinition};
pub use modifier::{BeyondModifier, ModifierOrigin, Modifiers};
pub use schema::{validate, SchemaError};

use crate::types::{AbilityScores, SpeedKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// A validated character export
///
/// Only the fields the converter reads are modelled; everything else in the export is
/// ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeyondCharacter {
    pub base_hit_points: i32,
    pub classes: Vec<ClassEntry>,
    pub race: Race,
    /// Ability scores, positionally Str/Dex/Con/Int/Wis/Cha
    pub stats: Vec<Stat>,
    pub modifiers: Modifiers,
    pub inventory: Vec<InventoryItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    pub weight_speeds: WeightSpeeds,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightSpeeds {
    pub normal: Speeds,
}

/// Movement speeds in feet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speeds {
    pub burrow: i32,
    pub climb: i32,
    pub fly: i32,
    pub swim: i32,
    pub walk: i32,
}

impl Speeds {
    pub fn get(&self, kind: SpeedKind) -> i32 {
        match kind {
            SpeedKind::Burrow => self.burrow,
            SpeedKind::Climb => self.climb,
            SpeedKind::Fly => self.fly,
            SpeedKind::Swim => self.swim,
            SpeedKind::Walk => self.walk,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: i32,
}

impl BeyondCharacter {
    /// Run schema validation on an already deserialized record
    pub fn validate(&self) -> Result<(), SchemaError> {
        validate(self)
    }

    /// Base ability scores in canonical order
    pub fn ability_scores(&self) -> AbilityScores {
        let score = |i: usize| self.stats.get(i).map_or(0, |s| s.value);
        AbilityScores::from_array([score(0), score(1), score(2), score(3), score(4), score(5)])
    }

    /// Sum of all class levels
    pub fn total_level(&self) -> i32 {
        self.classes.iter().map(|c| c.level).fold(0, i32::saturating_add)
    }

    /// Level of the first listed class
    pub fn first_class_level(&self) -> i32 {
        self.classes.first().map_or(0, |c| c.level)
    }

    /// The class owning the feature with the given id, if any
    pub fn class_granting(&self, feature_id: i64) -> Option<&ClassEntry> {
        self.classes.iter().find(|c| c.grants_feature(feature_id))
    }
}

/// Parse and validate a character export.
///
/// Accepts either the bare character object or the service's response envelope
/// (`{"success": true, "data": {...}}`).
pub fn parse_character(json: &str) -> Result<BeyondCharacter, SchemaError> {
    let value: Value = serde_json::from_str(json)?;
    from_value(value)
}

/// Deserialize and validate from an already parsed JSON value
pub fn from_value(value: Value) -> Result<BeyondCharacter, SchemaError> {
    let character: BeyondCharacter = serde_json::from_value(unwrap_envelope(value))?;
    character.validate()?;
    tracing::debug!(
        classes = character.classes.len(),
        modifiers = character.modifiers.len(),
        items = character.inventory.len(),
        "character export validated"
    );
    Ok(character)
}

/// Load, parse and validate a character export from disk
pub fn load_character(path: &Path) -> Result<BeyondCharacter, SchemaError> {
    let content = fs::read_to_string(path)?;
    parse_character(&content)
}

fn unwrap_envelope(value: Value) -> Value {
    match value {
        Value::Object(mut map) if !map.contains_key("classes") && map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal() -> Value {
        json!({
            "baseHitPoints": 8,
            "classes": [{
                "level": 1,
                "classFeatures": [{ "definition": { "id": 1 } }],
                "definition": { "name": "Rogue", "hitDice": 8 },
                "subclassDefinition": null,
                "isStartingClass": true
            }],
            "race": { "weightSpeeds": { "normal": {
                "burrow": 0, "climb": 0, "fly": 0, "swim": 0, "walk": 30
            } } },
            "stats": [
                { "id": 1, "value": 10 }, { "id": 2, "value": 16 }, { "id": 3, "value": 12 },
                { "id": 4, "value": 13 }, { "id": 5, "value": 11 }, { "id": 6, "value": 8 }
            ],
            "modifiers": { "background": [], "class": [], "race": [], "item": [] },
            "inventory": []
        })
    }

    #[test]
    fn test_parse_bare_record() {
        let character = from_value(minimal()).unwrap();
        assert_eq!(character.total_level(), 1);
        assert_eq!(character.ability_scores().dexterity, 16);
        assert_eq!(character.race.weight_speeds.normal.get(SpeedKind::Walk), 30);
    }

    #[test]
    fn test_parse_envelope() {
        let envelope = json!({ "id": 5, "success": true, "message": "", "data": minimal() });
        let character = parse_character(&envelope.to_string()).unwrap();
        assert_eq!(character.classes[0].definition.name, "Rogue");
    }

    #[test]
    fn test_missing_key_is_malformed() {
        let mut value = minimal();
        value.as_object_mut().unwrap().remove("race");
        let err = from_value(value).unwrap_err();
        assert!(matches!(err, SchemaError::Malformed(_)));
        assert!(err.to_string().contains("race"));
    }

    #[test]
    fn test_wrong_type_is_malformed() {
        let mut value = minimal();
        value["baseHitPoints"] = json!("eight");
        assert!(matches!(from_value(value), Err(SchemaError::Malformed(_))));
    }

    #[test]
    fn test_not_json_is_malformed() {
        assert!(matches!(
            parse_character("<html>login</html>"),
            Err(SchemaError::Malformed(_))
        ));
    }

    #[test]
    fn test_stat_count() {
        let mut value = minimal();
        value["stats"].as_array_mut().unwrap().pop();
        assert!(matches!(from_value(value), Err(SchemaError::StatCount(5))));
    }

    #[test]
    fn test_no_classes() {
        let mut value = minimal();
        value["classes"] = json!([]);
        assert!(matches!(from_value(value), Err(SchemaError::NoClasses)));
    }

    #[test]
    fn test_zero_level() {
        let mut value = minimal();
        value["classes"][0]["level"] = json!(0);
        let err = from_value(value).unwrap_err();
        assert_eq!(err.to_string(), "Rogue level must be between 1 and 20, found 0");
    }

    #[test]
    fn test_level_above_cap() {
        let mut value = minimal();
        value["classes"][0]["level"] = json!(i32::MAX);
        assert!(matches!(
            from_value(value),
            Err(SchemaError::InvalidLevel { level: i32::MAX, .. })
        ));
    }

    #[test]
    fn test_hit_die_above_cap() {
        let mut value = minimal();
        value["classes"][0]["definition"]["hitDice"] = json!(i32::MAX);
        assert!(matches!(from_value(value), Err(SchemaError::InvalidHitDie { .. })));
    }

    #[test]
    fn test_negative_speed() {
        let mut value = minimal();
        value["race"]["weightSpeeds"]["normal"]["fly"] = json!(-10);
        let err = from_value(value).unwrap_err();
        assert_eq!(err.to_string(), "fly speed must be between 0 and 1000, found -10");
    }

    #[test]
    fn test_speed_above_cap() {
        let mut value = minimal();
        value["race"]["weightSpeeds"]["normal"]["walk"] = json!(i32::MAX);
        assert!(matches!(from_value(value), Err(SchemaError::InvalidSpeed { .. })));
    }

    #[test]
    fn test_zero_stat() {
        let mut value = minimal();
        value["stats"][2]["value"] = json!(0);
        assert!(matches!(
            from_value(value),
            Err(SchemaError::InvalidStat { ability: crate::types::Ability::Constitution, value: 0 })
        ));
    }

    #[test]
    fn test_stat_above_cap() {
        let mut value = minimal();
        value["stats"][0]["value"] = json!(i32::MAX);
        let err = from_value(value).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Str score must be between 1 and 30, found {}", i32::MAX)
        );
    }

    #[test]
    fn test_missing_file() {
        let err = load_character(Path::new("/nonexistent/character.json")).unwrap_err();
        assert!(matches!(err, SchemaError::Io(_)));
    }
}
