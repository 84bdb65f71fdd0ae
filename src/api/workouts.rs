use axum::{
    extract::{Query, State},
    middleware,
    response::Json,
    routing::get,
    Extension, Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ApiError, AppState};
use crate::auth::{require_auth, UserSession};
use crate::models::WorkoutMeta;

#[derive(Debug, Deserialize)]
pub struct MetaQuery {
    /// Comma-separated workout ids
    pub ids: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MetaResponse {
    pub data: Vec<WorkoutMeta>,
}

pub fn workout_routes(state: AppState) -> Router {
    Router::new()
        .route("/meta", get(get_workout_meta))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .with_state(state)
}

/// GET /api/workouts/meta?ids=a,b,c
pub async fn get_workout_meta(
    State(state): State<AppState>,
    Extension(session): Extension<UserSession>,
    Query(query): Query<MetaQuery>,
) -> Result<Json<MetaResponse>, ApiError> {
    debug!(user_id = %session.user_id, "Fetching workout metadata");

    let data = state
        .workout_meta_service
        .fetch_for_user(session.user_id, query.ids.as_deref())
        .await?;

    Ok(Json(MetaResponse { data }))
}
