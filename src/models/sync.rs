use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Locally cached copy of a workout, as far as freshness is concerned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedWorkout {
    pub id: String,
    pub updated_at: DateTime<Utc>,
}

/// Partition of cached workouts against server metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SyncPlan {
    /// Server copy is newer; re-download
    pub stale: Vec<String>,
    pub fresh: Vec<String>,
    /// No server row visible to this user
    pub missing: Vec<String>,
}

impl SyncPlan {
    /// Percent-encoded value for the `ids` query parameter covering every
    /// cached workout. Each id is encoded on its own; the separating commas
    /// are left as is. Ids must not themselves contain commas.
    pub fn requested_ids(cached: &[CachedWorkout]) -> String {
        cached
            .iter()
            .map(|workout| urlencoding::encode(&workout.id))
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn is_up_to_date(&self) -> bool {
        self.stale.is_empty() && self.missing.is_empty()
    }
}
