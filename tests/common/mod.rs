use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{DateTime, Utc};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use workout_tracker::api::{create_routes, AppState};
use workout_tracker::auth::{JwtService, JwtTokenResolver};
use workout_tracker::models::WorkoutRecord;
use workout_tracker::storage::InMemoryWorkoutStore;

pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_only";

/// Build the full router over an in-memory store
pub fn test_app(store: Arc<InMemoryWorkoutStore>) -> Router {
    let state = AppState::new(Arc::new(JwtTokenResolver::new(TEST_JWT_SECRET)), store);
    create_routes(state)
}

pub fn bearer_for(user_id: Uuid) -> String {
    let token = JwtService::new(TEST_JWT_SECRET)
        .create_access_token(user_id)
        .expect("Failed to sign test token");
    format!("Bearer {}", token)
}

pub fn workout(id: &str, user_id: Uuid, updated_at: DateTime<Utc>) -> WorkoutRecord {
    WorkoutRecord {
        id: id.to_string(),
        user_id,
        name: Some("Upper Push".to_string()),
        updated_at,
        completed_at: None,
        created_at: updated_at,
    }
}

/// Send a GET request and decode the JSON body
pub async fn get_json(app: Router, uri: &str, authorization: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(value) = authorization {
        builder = builder.header("Authorization", value);
    }

    let response = app
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, serde_json::from_slice(&body).unwrap())
}
