// API routes and handlers

pub mod error;
pub mod health;
pub mod routes;
pub mod workouts;

use std::sync::Arc;

use crate::auth::TokenResolver;
use crate::services::WorkoutMetaService;
use crate::storage::WorkoutStore;

pub use error::ApiError;
pub use routes::create_routes;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub token_resolver: Arc<dyn TokenResolver>,
    pub workout_meta_service: WorkoutMetaService,
}

impl AppState {
    pub fn new(token_resolver: Arc<dyn TokenResolver>, workout_store: Arc<dyn WorkoutStore>) -> Self {
        Self {
            token_resolver,
            workout_meta_service: WorkoutMetaService::new(workout_store),
        }
    }
}
