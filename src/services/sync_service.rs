use std::collections::HashMap;

use crate::models::{CachedWorkout, SyncPlan, WorkoutMeta};

/// Compare cached workouts with the server's metadata.
///
/// Every cached id lands in exactly one bucket, in cache order.
pub fn reconcile(cached: &[CachedWorkout], server: &[WorkoutMeta]) -> SyncPlan {
    let server_by_id: HashMap<&str, &WorkoutMeta> =
        server.iter().map(|meta| (meta.id.as_str(), meta)).collect();

    let mut plan = SyncPlan::default();

    for workout in cached {
        match server_by_id.get(workout.id.as_str()) {
            Some(meta) if meta.updated_at > workout.updated_at => plan.stale.push(workout.id.clone()),
            Some(_) => plan.fresh.push(workout.id.clone()),
            None => plan.missing.push(workout.id.clone()),
        }
    }

    plan
}
