use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::models::WorkoutMeta;
use crate::storage::{StoreError, WorkoutStore};

#[derive(Debug, Clone)]
pub struct PgWorkoutStore {
    db: PgPool,
}

impl PgWorkoutStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WorkoutStore for PgWorkoutStore {
    #[instrument(skip(self, ids), fields(id_count = ids.len()))]
    async fn fetch_meta(&self, ids: &[String], user_id: Uuid) -> Result<Vec<WorkoutMeta>, StoreError> {
        let rows = sqlx::query_as::<_, WorkoutMeta>(
            r#"
            SELECT id, updated_at, completed_at
            FROM workouts
            WHERE id = ANY($1) AND user_id = $2
            "#,
        )
        .bind(ids)
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        debug!("Fetched {} workout metadata rows", rows.len());
        Ok(rows)
    }
}
