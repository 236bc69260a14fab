//! Core 5e types shared by the source schema, the engine and the stat block

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// The six ability scores, in the canonical order the source exports them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Ability {
    /// All abilities in canonical (export) order
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ];

    /// Three-letter short name, also used as the stat block key
    pub fn short(&self) -> &'static str {
        match self {
            Ability::Strength => "Str",
            Ability::Dexterity => "Dex",
            Ability::Constitution => "Con",
            Ability::Intelligence => "Int",
            Ability::Wisdom => "Wis",
            Ability::Charisma => "Cha",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Ability::Strength => "Strength",
            Ability::Dexterity => "Dexterity",
            Ability::Constitution => "Constitution",
            Ability::Intelligence => "Intelligence",
            Ability::Wisdom => "Wisdom",
            Ability::Charisma => "Charisma",
        }
    }

    /// Position in the exported `stats` list
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Resolve the ability a description string targets.
    ///
    /// Only the first three characters are compared, case sensitively, against the six
    /// short names. "Strength Saving Throws" resolves to `Strength`. Any other game term
    /// that happens to start with a short name resolves too ("Intimidation" gives
    /// `Intelligence`); callers rely on that exact behavior.
    pub fn from_prefix(description: &str) -> Option<Ability> {
        let prefix = description.get(..3)?;
        Ability::ALL.into_iter().find(|a| a.short() == prefix)
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short())
    }
}

/// Ability score table
///
/// Serialized with the short names as keys, which is the shape the stat block's
/// `Abilities` field expects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    #[serde(rename = "Str")]
    pub strength: i32,
    #[serde(rename = "Dex")]
    pub dexterity: i32,
    #[serde(rename = "Con")]
    pub constitution: i32,
    #[serde(rename = "Int")]
    pub intelligence: i32,
    #[serde(rename = "Wis")]
    pub wisdom: i32,
    #[serde(rename = "Cha")]
    pub charisma: i32,
}

impl AbilityScores {
    /// Build from scores in canonical order
    pub fn from_array(scores: [i32; 6]) -> Self {
        let [strength, dexterity, constitution, intelligence, wisdom, charisma] = scores;
        AbilityScores {
            strength,
            dexterity,
            constitution,
            intelligence,
            wisdom,
            charisma,
        }
    }

    /// Modifier for one ability
    pub fn modifier(&self, ability: Ability) -> i32 {
        stat_mod(self[ability])
    }
}

impl Index<Ability> for AbilityScores {
    type Output = i32;

    fn index(&self, ability: Ability) -> &i32 {
        match ability {
            Ability::Strength => &self.strength,
            Ability::Dexterity => &self.dexterity,
            Ability::Constitution => &self.constitution,
            Ability::Intelligence => &self.intelligence,
            Ability::Wisdom => &self.wisdom,
            Ability::Charisma => &self.charisma,
        }
    }
}

impl IndexMut<Ability> for AbilityScores {
    fn index_mut(&mut self, ability: Ability) -> &mut i32 {
        match ability {
            Ability::Strength => &mut self.strength,
            Ability::Dexterity => &mut self.dexterity,
            Ability::Constitution => &mut self.constitution,
            Ability::Intelligence => &mut self.intelligence,
            Ability::Wisdom => &mut self.wisdom,
            Ability::Charisma => &mut self.charisma,
        }
    }
}

/// The eighteen 5e skills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Skill {
    Acrobatics,
    AnimalHandling,
    Arcana,
    Athletics,
    Deception,
    History,
    Insight,
    Intimidation,
    Investigation,
    Medicine,
    Nature,
    Perception,
    Performance,
    Persuasion,
    Religion,
    SleightOfHand,
    Stealth,
    Survival,
}

impl Skill {
    pub const ALL: [Skill; 18] = [
        Skill::Acrobatics,
        Skill::AnimalHandling,
        Skill::Arcana,
        Skill::Athletics,
        Skill::Deception,
        Skill::History,
        Skill::Insight,
        Skill::Intimidation,
        Skill::Investigation,
        Skill::Medicine,
        Skill::Nature,
        Skill::Perception,
        Skill::Performance,
        Skill::Persuasion,
        Skill::Religion,
        Skill::SleightOfHand,
        Skill::Stealth,
        Skill::Survival,
    ];

    /// Display name, spelled exactly as the character service spells it
    pub fn name(&self) -> &'static str {
        match self {
            Skill::Acrobatics => "Acrobatics",
            Skill::AnimalHandling => "Animal Handling",
            Skill::Arcana => "Arcana",
            Skill::Athletics => "Athletics",
            Skill::Deception => "Deception",
            Skill::History => "History",
            Skill::Insight => "Insight",
            Skill::Intimidation => "Intimidation",
            Skill::Investigation => "Investigation",
            Skill::Medicine => "Medicine",
            Skill::Nature => "Nature",
            Skill::Perception => "Perception",
            Skill::Performance => "Performance",
            Skill::Persuasion => "Persuasion",
            Skill::Religion => "Religion",
            Skill::SleightOfHand => "Sleight of Hand",
            Skill::Stealth => "Stealth",
            Skill::Survival => "Survival",
        }
    }

    /// Governing ability
    pub fn ability(&self) -> Ability {
        match self {
            Skill::Athletics => Ability::Strength,
            Skill::Acrobatics | Skill::SleightOfHand | Skill::Stealth => Ability::Dexterity,
            Skill::Arcana
            | Skill::History
            | Skill::Investigation
            | Skill::Nature
            | Skill::Religion => Ability::Intelligence,
            Skill::AnimalHandling
            | Skill::Insight
            | Skill::Medicine
            | Skill::Perception
            | Skill::Survival => Ability::Wisdom,
            Skill::Deception
            | Skill::Intimidation
            | Skill::Performance
            | Skill::Persuasion => Ability::Charisma,
        }
    }

    /// Exact-match lookup by display name
    pub fn from_name(name: &str) -> Option<Skill> {
        Skill::ALL.into_iter().find(|s| s.name() == name)
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Named movement speeds, in rendering order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedKind {
    Burrow,
    Climb,
    Fly,
    Swim,
    Walk,
}

impl SpeedKind {
    pub const ALL: [SpeedKind; 5] = [
        SpeedKind::Burrow,
        SpeedKind::Climb,
        SpeedKind::Fly,
        SpeedKind::Swim,
        SpeedKind::Walk,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SpeedKind::Burrow => "burrow",
            SpeedKind::Climb => "climb",
            SpeedKind::Fly => "fly",
            SpeedKind::Swim => "swim",
            SpeedKind::Walk => "walk",
        }
    }
}

/// Ability score to modifier: `floor(score / 2) - 5`
///
/// Floor division, so odd scores truncate downwards (11 gives 0, 9 gives -1).
pub fn stat_mod(score: i32) -> i32 {
    score.div_euclid(2) - 5
}

/// Proficiency bonus: `ceil(1 + level / 4)`
///
/// The level passed in is the first listed class's level, not the total character level.
/// That underestimates the bonus for some multiclass orderings and is kept as is.
pub fn proficiency_bonus(level: i32) -> i32 {
    1 + level.saturating_add(3).div_euclid(4)
}
