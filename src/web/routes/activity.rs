use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use tracing::{debug, info, warn};

use crate::services::activities_service::{self, ParticipantQuery};
use crate::web::error::{ApiError, MessageResponse};
use crate::web::AppState;

type RawQuery = Vec<(String, String)>;

// Extractor failures are taken as values so they render as `{"detail"}` too.
fn participant_request(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<RawQuery>, QueryRejection>,
) -> Result<(String, ParticipantQuery), ApiError> {
    let Path(activity_name) = path?;
    let Query(pairs) = query?;
    Ok((activity_name, ParticipantQuery::from_pairs(pairs)))
}

pub async fn activity_signup_handler(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<RawQuery>, QueryRejection>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    let (activity_name, query) = participant_request(path, query).inspect_err(|e| {
        warn!(error = %e, "Signup request rejected");
    })?;
    let email = query.email().inspect_err(|e| {
        warn!(activity = %activity_name, error = %e, "Signup rejected");
    })?;

    match activities_service::sign_up(&state.store, state.policy, &activity_name, email).await {
        Ok(message) => {
            info!(activity = %activity_name, "Signed up participant");
            debug!(activity = %activity_name, email = %email, "Signup detail");
            Ok(Json(MessageResponse { message }))
        }
        Err(e) => {
            warn!(activity = %activity_name, error = %e, "Signup failed");
            Err(e.into())
        }
    }
}

pub async fn activity_unregister_handler(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<RawQuery>, QueryRejection>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    let (activity_name, query) = participant_request(path, query).inspect_err(|e| {
        warn!(error = %e, "Unregister request rejected");
    })?;
    let email = query.email().inspect_err(|e| {
        warn!(activity = %activity_name, error = %e, "Unregister rejected");
    })?;

    match activities_service::unregister(&state.store, &activity_name, email).await {
        Ok(message) => {
            info!(activity = %activity_name, "Unregistered participant");
            debug!(activity = %activity_name, email = %email, "Unregister detail");
            Ok(Json(MessageResponse { message }))
        }
        Err(e) => {
            warn!(activity = %activity_name, error = %e, "Unregister failed");
            Err(e.into())
        }
    }
}
