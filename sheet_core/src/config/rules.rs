//! Conversion rules - the string contract with the character service, as data

use super::ConfigError;
use crate::source::ModifierOrigin;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// How the engine handles a modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModifierKind {
    Bonus,
    Proficiency,
    Expertise,
    Set,
    SetBase,
    Resistance,
    Vulnerability,
    Immunity,
    ConditionImmunity,
    Language,
}

impl ModifierKind {
    pub const ALL: [ModifierKind; 10] = [
        ModifierKind::Bonus,
        ModifierKind::Proficiency,
        ModifierKind::Expertise,
        ModifierKind::Set,
        ModifierKind::SetBase,
        ModifierKind::Resistance,
        ModifierKind::Vulnerability,
        ModifierKind::Immunity,
        ModifierKind::ConditionImmunity,
        ModifierKind::Language,
    ];

    /// The kind string the service uses by default
    pub fn default_name(&self) -> &'static str {
        match self {
            ModifierKind::Bonus => "bonus",
            ModifierKind::Proficiency => "proficiency",
            ModifierKind::Expertise => "expertise",
            ModifierKind::Set => "set",
            ModifierKind::SetBase => "set-base",
            ModifierKind::Resistance => "resistance",
            ModifierKind::Vulnerability => "vulnerability",
            ModifierKind::Immunity => "immunity",
            ModifierKind::ConditionImmunity => "condition-immunity",
            ModifierKind::Language => "language",
        }
    }
}

/// Tunable conversion rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRules {
    /// Service kind string -> handling. Unlisted kind strings are ignored.
    #[serde(default = "default_modifier_kinds")]
    pub modifier_kinds: BTreeMap<String, ModifierKind>,
    /// Stacking order. Earlier kinds apply first; unlisted kinds apply before all of them.
    #[serde(default = "default_priority")]
    pub priority: Vec<ModifierKind>,
    /// Origins whose defense modifiers feed the damage/condition lists
    #[serde(default = "default_defense_origins")]
    pub defense_origins: Vec<ModifierOrigin>,
    #[serde(default)]
    pub subtypes: SubtypeRules,
    #[serde(default)]
    pub armor: ArmorRules,
    #[serde(default)]
    pub units: UnitRules,
}

impl Default for ConversionRules {
    fn default() -> Self {
        ConversionRules {
            modifier_kinds: default_modifier_kinds(),
            priority: default_priority(),
            defense_origins: default_defense_origins(),
            subtypes: SubtypeRules::default(),
            armor: ArmorRules::default(),
            units: UnitRules::default(),
        }
    }
}

impl ConversionRules {
    /// Resolve a service kind string
    pub fn kind_of(&self, kind: &str) -> Option<ModifierKind> {
        self.modifier_kinds.get(kind).copied()
    }

    /// Sort key for a modifier kind: its position in `priority`, or -1 when unlisted
    pub fn priority_of(&self, kind: Option<ModifierKind>) -> i32 {
        kind.and_then(|k| self.priority.iter().position(|p| *p == k))
            .map_or(-1, |i| i as i32)
    }

    pub fn is_defense_origin(&self, origin: ModifierOrigin) -> bool {
        self.defense_origins.contains(&origin)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for kind in &self.priority {
            if !seen.insert(kind) {
                return Err(ConfigError::ValidationError(format!(
                    "priority lists {:?} more than once",
                    kind
                )));
            }
        }
        if self.units.meters_per_foot <= 0.0 || self.units.feet_per_square <= 0.0 {
            return Err(ConfigError::ValidationError(
                "unit conversion factors must be positive".to_string(),
            ));
        }
        if self.armor.medium_category >= self.armor.heavy_category {
            return Err(ConfigError::ValidationError(format!(
                "medium armor category ({}) must be below heavy ({})",
                self.armor.medium_category, self.armor.heavy_category
            )));
        }
        Ok(())
    }
}

fn default_modifier_kinds() -> BTreeMap<String, ModifierKind> {
    ModifierKind::ALL
        .into_iter()
        .map(|k| (k.default_name().to_string(), k))
        .collect()
}

fn default_priority() -> Vec<ModifierKind> {
    vec![
        ModifierKind::Bonus,
        ModifierKind::Proficiency,
        ModifierKind::Expertise,
        ModifierKind::Set,
    ]
}

fn default_defense_origins() -> Vec<ModifierOrigin> {
    vec![ModifierOrigin::Race]
}

/// Subtype strings the engine keys on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubtypeRules {
    #[serde(default = "default_unarmored_movement")]
    pub unarmored_movement: String,
    #[serde(default = "default_initiative")]
    pub initiative: String,
    /// Bonus type tag that turns an initiative bonus into "add proficiency"
    #[serde(default = "default_initiative_bonus_type")]
    pub initiative_bonus_type: i32,
    #[serde(default = "default_unarmored_armor_class")]
    pub unarmored_armor_class: String,
    #[serde(default = "default_hit_points_per_level")]
    pub hit_points_per_level: String,
    #[serde(default = "default_saving_throws_suffix")]
    pub saving_throws_suffix: String,
}

impl Default for SubtypeRules {
    fn default() -> Self {
        SubtypeRules {
            unarmored_movement: default_unarmored_movement(),
            initiative: default_initiative(),
            initiative_bonus_type: default_initiative_bonus_type(),
            unarmored_armor_class: default_unarmored_armor_class(),
            hit_points_per_level: default_hit_points_per_level(),
            saving_throws_suffix: default_saving_throws_suffix(),
        }
    }
}

fn default_unarmored_movement() -> String {
    "unarmored-movement".to_string()
}
fn default_initiative() -> String {
    "initiative".to_string()
}
fn default_initiative_bonus_type() -> i32 {
    1
}
fn default_unarmored_armor_class() -> String {
    "unarmored-armor-class".to_string()
}
fn default_hit_points_per_level() -> String {
    "hit-points-per-level".to_string()
}
fn default_saving_throws_suffix() -> String {
    "saving-throws".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmorRules {
    /// AC with no armor and no unarmored defense
    #[serde(default = "default_unarmored_base")]
    pub unarmored_base: i32,
    /// Categories below this add the full Dex modifier
    #[serde(default = "default_medium_category")]
    pub medium_category: i32,
    /// Categories at or above this add no Dex modifier
    #[serde(default = "default_heavy_category")]
    pub heavy_category: i32,
    #[serde(default = "default_medium_dex_cap")]
    pub medium_dex_cap: i32,
}

impl Default for ArmorRules {
    fn default() -> Self {
        ArmorRules {
            unarmored_base: default_unarmored_base(),
            medium_category: default_medium_category(),
            heavy_category: default_heavy_category(),
            medium_dex_cap: default_medium_dex_cap(),
        }
    }
}

fn default_unarmored_base() -> i32 {
    10
}
fn default_medium_category() -> i32 {
    2
}
fn default_heavy_category() -> i32 {
    3
}
fn default_medium_dex_cap() -> i32 {
    2
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitRules {
    #[serde(default = "default_meters_per_foot")]
    pub meters_per_foot: f64,
    /// Size of one combat square
    #[serde(default = "default_feet_per_square")]
    pub feet_per_square: f64,
}

impl Default for UnitRules {
    fn default() -> Self {
        UnitRules {
            meters_per_foot: default_meters_per_foot(),
            feet_per_square: default_feet_per_square(),
        }
    }
}

fn default_meters_per_foot() -> f64 {
    0.3048
}
fn default_feet_per_square() -> f64 {
    5.0
}
