use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Coarse day type derived from a workout's name
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WorkoutType {
    Upper,
    Lower,
    Rest,
}

impl WorkoutType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Upper => "Upper",
            WorkoutType::Lower => "Lower",
            WorkoutType::Rest => "Rest",
        }
    }
}

impl std::fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Row in the `workouts` table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WorkoutRecord {
    pub id: String,
    pub user_id: Uuid,
    pub name: Option<String>,
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl WorkoutRecord {
    pub fn meta(&self) -> WorkoutMeta {
        WorkoutMeta {
            id: self.id.clone(),
            updated_at: self.updated_at,
            completed_at: self.completed_at,
        }
    }
}

/// Freshness stamps a client compares against its cached copy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct WorkoutMeta {
    pub id: String,
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetEntry {
    pub reps: u32,
    /// Kilograms; `None` for bodyweight sets
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    pub name: String,
    pub sets: Vec<SetEntry>,
}

/// A logged workout as the client records it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub name: Option<String>,
    pub exercises: Vec<ExerciseEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutSummary {
    pub workout_type: WorkoutType,
    pub exercise_count: usize,
    pub total_sets: usize,
    pub warmup_sets: usize,
    pub working_sets: usize,
    /// Reps across working sets only
    pub total_reps: u64,
    /// Sum of reps x weight across working sets
    pub volume: f64,
}
