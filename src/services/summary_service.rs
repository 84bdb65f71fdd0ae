use crate::models::{Workout, WorkoutSummary};
use crate::services::classification::{derive_workout_type, is_warmup};

/// Summarize a logged workout, keeping warm-up sets out of reps and volume
pub fn summarize(workout: &Workout) -> WorkoutSummary {
    let mut summary = WorkoutSummary {
        workout_type: derive_workout_type(workout.name.as_deref()),
        exercise_count: workout.exercises.len(),
        total_sets: 0,
        warmup_sets: 0,
        working_sets: 0,
        total_reps: 0,
        volume: 0.0,
    };

    for exercise in &workout.exercises {
        let set_count = exercise.sets.len();
        summary.total_sets += set_count;

        if is_warmup(&exercise.name) {
            summary.warmup_sets += set_count;
            continue;
        }

        summary.working_sets += set_count;
        for set in &exercise.sets {
            summary.total_reps += u64::from(set.reps);
            summary.volume += f64::from(set.reps) * set.weight.unwrap_or(0.0);
        }
    }

    summary
}
