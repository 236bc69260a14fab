//! Schema validation - the only place conversion can fail

use super::BeyondCharacter;
use crate::types::{Ability, SpeedKind};
use thiserror::Error;

/// Highest ability score the rules allow, magic included
pub const MAX_ABILITY_SCORE: i32 = 30;
pub const MAX_CLASS_LEVEL: i32 = 20;
pub const MAX_HIT_DIE: i32 = 20;
/// Feet; well above any movement speed a character can have
pub const MAX_SPEED: i32 = 1000;

/// The character record does not have the shape the converter expects
///
/// Raised when the service contract changed or the export is partial. The converter is
/// never invoked on a record that failed here.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Failed to read character file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Character data does not match the expected shape: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Expected exactly 6 ability scores, found {0}")]
    StatCount(usize),
    #[error("{ability} score must be between 1 and {}, found {value}", MAX_ABILITY_SCORE)]
    InvalidStat { ability: Ability, value: i32 },
    #[error("Character has no classes")]
    NoClasses,
    #[error("{class} level must be between 1 and {}, found {level}", MAX_CLASS_LEVEL)]
    InvalidLevel { class: String, level: i32 },
    #[error("{class} hit die must be between 1 and {}, found {hit_dice}", MAX_HIT_DIE)]
    InvalidHitDie { class: String, hit_dice: i32 },
    #[error("{} speed must be between 0 and {}, found {value}", .kind.name(), MAX_SPEED)]
    InvalidSpeed { kind: SpeedKind, value: i32 },
}

/// Check the invariants serde cannot express
pub fn validate(character: &BeyondCharacter) -> Result<(), SchemaError> {
    if character.stats.len() != Ability::ALL.len() {
        return Err(SchemaError::StatCount(character.stats.len()));
    }
    for (ability, stat) in Ability::ALL.into_iter().zip(&character.stats) {
        if !(1..=MAX_ABILITY_SCORE).contains(&stat.value) {
            return Err(SchemaError::InvalidStat {
                ability,
                value: stat.value,
            });
        }
    }

    if character.classes.is_empty() {
        return Err(SchemaError::NoClasses);
    }
    for class in &character.classes {
        if !(1..=MAX_CLASS_LEVEL).contains(&class.level) {
            return Err(SchemaError::InvalidLevel {
                class: class.definition.name.clone(),
                level: class.level,
            });
        }
        if !(1..=MAX_HIT_DIE).contains(&class.definition.hit_dice) {
            return Err(SchemaError::InvalidHitDie {
                class: class.definition.name.clone(),
                hit_dice: class.definition.hit_dice,
            });
        }
    }

    let speeds = &character.race.weight_speeds.normal;
    for kind in SpeedKind::ALL {
        let value = speeds.get(kind);
        if !(0..=MAX_SPEED).contains(&value) {
            return Err(SchemaError::InvalidSpeed { kind, value });
        }
    }

    Ok(())
}
