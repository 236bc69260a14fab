//! Speed rendering - feet, metres and combat squares

use crate::config::UnitRules;
use crate::source::Speeds;
use crate::types::SpeedKind;

/// Round to the nearest integer, halves towards positive infinity
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// "walk 30ft. (9m) (6c.)"
pub fn render_speed(kind: SpeedKind, feet: i32, units: &UnitRules) -> String {
    let feet_f = f64::from(feet);
    format!(
        "{} {}ft. ({}m) ({}c.)",
        kind.name(),
        feet,
        round_half_up(feet_f * units.meters_per_foot),
        round_half_up(feet_f / units.feet_per_square)
    )
}

/// Every speed that is non-zero before the bonus, with the bonus added
pub fn render_speeds(speeds: &Speeds, bonus: i32, units: &UnitRules) -> Vec<String> {
    SpeedKind::ALL
        .into_iter()
        .filter(|kind| speeds.get(*kind) > 0)
        .map(|kind| render_speed(kind, speeds.get(kind).saturating_add(bonus), units))
        .collect()
}
