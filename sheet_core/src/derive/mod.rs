//! Derivation passes - everything the converter computes from a validated export
//!
//! The passes share one `DerivedState` per conversion:
//! - modifiers: priority-ordered walk over all modifiers, mutating ability scores and
//!   collecting saves, skills, senses and languages
//! - armor: equipped armor vs. unarmored base
//! - hit_points: per-class hit die accumulation
//! - speed / senses / defenses: output rendering

mod armor;
mod defenses;
mod hit_points;
mod modifiers;
mod senses;
mod speed;
mod state;

pub use armor::{armor_class, dex_bonus_cap, ArmorClass};
pub use defenses::DefenseLists;
pub use hit_points::{class_hit_points, hit_points, HitPoints};
pub use modifiers::{apply_modifier, grants_proficiency, merged_modifiers, ResolvedModifier};
pub use senses::{passive_senses, sort_by_name};
pub use speed::{render_speed, render_speeds, round_half_up};
pub use state::{BonusList, DerivedState};
