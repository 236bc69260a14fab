//! Class entries - levels, hit dice and granted features

use serde::{Deserialize, Serialize};

/// One class the character has levels in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassEntry {
    /// Levels taken in this class
    pub level: i32,
    /// Features this class grants, referenced by modifiers' `componentId`
    #[serde(default)]
    pub class_features: Vec<ClassFeature>,
    pub definition: ClassDefinition,
    #[serde(default)]
    pub subclass_definition: Option<SubclassDefinition>,
    /// Whether the character started in this class
    pub is_starting_class: bool,
}

impl ClassEntry {
    /// Whether this class grants the feature with the given id
    pub fn grants_feature(&self, feature_id: i64) -> bool {
        self.class_features
            .iter()
            .any(|f| f.definition.id == feature_id)
    }

    /// "Monk (Way of the Open Hand)", or just "Monk" without a subclass
    pub fn summary(&self) -> String {
        match &self.subclass_definition {
            Some(subclass) => format!("{} ({})", self.definition.name, subclass.name),
            None => self.definition.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDefinition {
    pub name: String,
    /// Hit die size (8 for a d8)
    pub hit_dice: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubclassDefinition {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassFeature {
    pub definition: FeatureDefinition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureDefinition {
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(subclass: Option<&str>) -> ClassEntry {
        ClassEntry {
            level: 3,
            class_features: vec![ClassFeature {
                definition: FeatureDefinition { id: 42 },
            }],
            definition: ClassDefinition {
                name: "Monk".to_string(),
                hit_dice: 8,
            },
            subclass_definition: subclass.map(|name| SubclassDefinition {
                name: name.to_string(),
            }),
            is_starting_class: true,
        }
    }

    #[test]
    fn test_summary_with_and_without_subclass() {
        assert_eq!(entry(Some("Way of Shadow")).summary(), "Monk (Way of Shadow)");
        assert_eq!(entry(None).summary(), "Monk");
    }

    #[test]
    fn test_grants_feature() {
        let class = entry(None);
        assert!(class.grants_feature(42));
        assert!(!class.grants_feature(7));
    }

    #[test]
    fn test_deserialize_null_subclass() {
        let json = r#"{
            "level": 2,
            "classFeatures": [],
            "definition": { "name": "Wizard", "hitDice": 6 },
            "subclassDefinition": null,
            "isStartingClass": false
        }"#;
        let class: ClassEntry = serde_json::from_str(json).unwrap();
        assert!(class.subclass_definition.is_none());
        assert_eq!(class.definition.hit_dice, 6);
    }
}
