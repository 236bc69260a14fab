//! sheet_core - Converts character-builder exports into Improved Initiative stat blocks
//!
//! This library provides:
//! - BeyondCharacter: the exported character sheet, with schema validation
//! - ConversionRules: the service's string contract and 5e constants as TOML config
//! - DerivedState and the derivation passes (modifiers, armor, hit points, senses)
//! - StatBlock: the flat record the combat tracker imports
//!
//! ```no_run
//! let json = std::fs::read_to_string("character.json").unwrap();
//! let block = sheet_core::convert_str(&json).unwrap();
//! println!("{}", block.to_json_pretty().unwrap());
//! ```

pub mod config;
pub mod convert;
pub mod derive;
pub mod prelude;
pub mod source;
pub mod stat_block;
pub mod types;

#[cfg(test)]
mod testing;

// Re-export core types for convenience
pub use config::{default_rules, load_rules, ConfigError, ConversionRules, ModifierKind};
pub use convert::{convert, convert_str, convert_with_rules};
pub use derive::{BonusList, DerivedState};
pub use source::{
    load_character, parse_character, BeyondCharacter, BeyondModifier, ModifierOrigin,
    SchemaError,
};
pub use stat_block::{NamedModifier, StatBlock, ValueWithNotes};
pub use types::{proficiency_bonus, stat_mod, Ability, AbilityScores, Skill, SpeedKind};
