//! Prelude module for convenient imports
//!
//! ```rust
//! use sheet_core::prelude::*;
//! ```

// Core types
pub use crate::types::{proficiency_bonus, stat_mod, Ability, AbilityScores, Skill, SpeedKind};

// Source record
pub use crate::source::{
    load_character, parse_character, BeyondCharacter, BeyondModifier, ModifierOrigin,
    SchemaError,
};

// Conversion
pub use crate::convert::{convert, convert_str, convert_with_rules};
pub use crate::stat_block::{NamedModifier, StatBlock, ValueWithNotes};

// Config
pub use crate::config::{default_rules, load_rules, ConversionRules, ModifierKind};
