use axum::{extract::State, Json};

use crate::models::ActivityMap;
use crate::services::activities_service;
use crate::web::AppState;

pub async fn activities_handler(State(state): State<AppState>) -> Json<ActivityMap> {
    Json(activities_service::load_activities(&state.store).await)
}
