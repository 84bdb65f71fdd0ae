// Business logic services

pub mod classification;
pub mod summary_service;
pub mod sync_service;
pub mod workout_meta_service;

pub use classification::{derive_workout_type, is_warmup};
pub use summary_service::summarize;
pub use sync_service::reconcile;
pub use workout_meta_service::WorkoutMetaService;
