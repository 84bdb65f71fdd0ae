// Workout persistence behind the `WorkoutStore` capability

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::WorkoutMeta;

pub use memory::InMemoryWorkoutStore;
pub use postgres::PgWorkoutStore;

/// Storage failures; the message is surfaced to clients verbatim
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{0}")]
    Database(#[from] sqlx::Error),
    #[error("{0}")]
    Backend(String),
}

/// Read access to stored workouts
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkoutStore: Send + Sync {
    /// Metadata for the workouts in `ids` owned by `user_id`.
    ///
    /// Rows owned by other users are never returned, whatever ids are asked for.
    async fn fetch_meta(&self, ids: &[String], user_id: Uuid) -> Result<Vec<WorkoutMeta>, StoreError>;
}
