use proptest::prelude::*;

use workout_tracker::models::WorkoutType;
use workout_tracker::services::classification::{LOWER_BODY_MARKERS, WARMUP_MARKERS};
use workout_tracker::services::{derive_workout_type, is_warmup};

fn with_case(marker: &str, upper: bool) -> String {
    if upper {
        marker.to_uppercase()
    } else {
        marker.to_string()
    }
}

proptest! {
    #[test]
    fn names_with_a_warmup_marker_are_warmups(
        prefix in "[a-zA-Z ]{0,12}",
        marker in prop::sample::select(WARMUP_MARKERS.to_vec()),
        suffix in "[a-zA-Z ]{0,12}",
        upper in any::<bool>(),
    ) {
        let name = format!("{}{}{}", prefix, with_case(marker, upper), suffix);
        prop_assert!(is_warmup(&name));
    }

    #[test]
    fn warmup_detection_ignores_case(name in "[a-zA-Z -]{0,24}") {
        prop_assert_eq!(is_warmup(&name), is_warmup(&name.to_uppercase()));
        prop_assert_eq!(is_warmup(&name), is_warmup(&name.to_lowercase()));
    }

    #[test]
    fn names_without_markers_are_working_sets(name in "[bcdfgjklnoqstvxyz ]{0,24}") {
        // The alphabet leaves out letters every marker needs
        prop_assert!(!is_warmup(&name));
    }

    #[test]
    fn lower_markers_always_win(
        prefix in "[a-zA-Z ]{0,12}",
        marker in prop::sample::select(LOWER_BODY_MARKERS.to_vec()),
        suffix in "[a-zA-Z ]{0,12}",
        upper in any::<bool>(),
    ) {
        let name = format!("{}{}{}", prefix, with_case(marker, upper), suffix);
        prop_assert_eq!(derive_workout_type(Some(&name)), WorkoutType::Lower);
    }

    #[test]
    fn named_workouts_are_never_rest(name in ".{1,32}") {
        prop_assert_ne!(derive_workout_type(Some(&name)), WorkoutType::Rest);
    }
}
