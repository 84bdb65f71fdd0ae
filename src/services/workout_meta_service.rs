use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, error};
use uuid::Uuid;

use crate::models::WorkoutMeta;
use crate::storage::{StoreError, WorkoutStore};

/// Looks up freshness metadata for a caller's workouts
#[derive(Clone)]
pub struct WorkoutMetaService {
    store: Arc<dyn WorkoutStore>,
}

impl WorkoutMetaService {
    pub fn new(store: Arc<dyn WorkoutStore>) -> Self {
        Self { store }
    }

    /// Split a comma-separated id list, trimming entries and dropping empty
    /// and repeated ones
    pub fn parse_ids(raw: &str) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();

        raw.split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty() && seen.insert(*id))
            .map(str::to_string)
            .collect()
    }

    /// Metadata for the requested workouts that `user_id` owns.
    ///
    /// An empty id list returns no rows without touching the store.
    pub async fn fetch_for_user(
        &self,
        user_id: Uuid,
        raw_ids: Option<&str>,
    ) -> Result<Vec<WorkoutMeta>, StoreError> {
        let ids = Self::parse_ids(raw_ids.unwrap_or_default());
        if ids.is_empty() {
            debug!("No workout ids requested, skipping store query");
            return Ok(Vec::new());
        }

        self.store.fetch_meta(&ids, user_id).await.map_err(|err| {
            error!("Workout metadata query failed: {}", err);
            err
        })
    }
}
