use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{WorkoutMeta, WorkoutRecord};
use crate::storage::{StoreError, WorkoutStore};

/// Process-local store, used by tests and local runs without a database
#[derive(Debug, Default)]
pub struct InMemoryWorkoutStore {
    workouts: RwLock<Vec<WorkoutRecord>>,
}

impl InMemoryWorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<WorkoutRecord>) -> Self {
        Self {
            workouts: RwLock::new(records),
        }
    }
}

#[async_trait]
impl WorkoutStore for InMemoryWorkoutStore {
    async fn fetch_meta(&self, ids: &[String], user_id: Uuid) -> Result<Vec<WorkoutMeta>, StoreError> {
        let workouts = self.workouts.read().await;

        Ok(workouts
            .iter()
            .filter(|record| record.user_id == user_id && ids.contains(&record.id))
            .map(WorkoutRecord::meta)
            .collect())
    }
}
