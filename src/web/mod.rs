pub mod error;
pub mod routes;

use std::path::Path;

use axum::{
    response::Redirect,
    routing::{get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::database::activities_repo::ActivityStore;
use crate::services::activities_service::SignupPolicy;
use self::routes::{activities, activity};

pub const INDEX_PATH: &str = "/static/index.html";

#[derive(Debug, Clone)]
pub struct AppState {
    pub store: ActivityStore,
    pub policy: SignupPolicy,
}

impl AppState {
    pub fn new(store: ActivityStore, policy: SignupPolicy) -> Self {
        Self { store, policy }
    }
}

pub fn build_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary(INDEX_PATH) }))
        .route("/activities", get(activities::activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activity::activity_signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            post(activity::activity_unregister_handler),
        )
        .nest_service(
            "/static",
            get_service(ServeDir::new(static_dir.as_ref())),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
