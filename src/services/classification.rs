//! Name heuristics for exercises and workouts.
//!
//! Both classifiers are plain substring matches on the lower-cased name.
//! Markers are not matched on word boundaries, so "wu" also hits "Wushu".

use crate::models::WorkoutType;

pub const WARMUP_MARKERS: [&str; 9] = [
    "warm up",
    "warmup",
    "warm-up",
    "wu",
    "activation",
    "primer",
    "ramp",
    "ramping",
    "prep",
];

pub const LOWER_BODY_MARKERS: [&str; 4] = ["lower", "leg", "glute", "ham"];

/// Whether an exercise name looks like a warm-up set
pub fn is_warmup(name: &str) -> bool {
    let name = name.to_lowercase();
    WARMUP_MARKERS.iter().any(|marker| name.contains(marker))
}

/// Day type for a workout name.
///
/// Lower-body markers win over "upper", so "Upper Lower Combo" is `Lower`.
/// Full-body sessions and names with no marker at all count as `Upper`.
pub fn derive_workout_type(name: Option<&str>) -> WorkoutType {
    let name = match name {
        Some(name) if !name.is_empty() => name.to_lowercase(),
        _ => return WorkoutType::Rest,
    };

    if LOWER_BODY_MARKERS.iter().any(|marker| name.contains(marker)) {
        return WorkoutType::Lower;
    }

    if name.contains("upper") {
        return WorkoutType::Upper;
    }

    // Full-body sessions are filed as upper days
    if name.contains("full") {
        return WorkoutType::Upper;
    }

    // No marker matched
    WorkoutType::Upper
}
