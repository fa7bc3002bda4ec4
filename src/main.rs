use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{info, warn};

use activities::config::AppConfig;
use activities::database::activities_repo::{self, ActivityStore};
use activities::logging;
use activities::web::{self, AppState};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env before reading any config
    dotenv().ok();

    logging::init_logging();

    let config = AppConfig::from_env();
    info!(
        static_dir = %config.static_dir.display(),
        reject_duplicates = config.policy.reject_duplicates,
        enforce_capacity = config.policy.enforce_capacity,
        "Configuration loaded"
    );

    let store = ActivityStore::seeded();
    let seeded = activities_repo::list_activities(&store).await;
    if seeded.is_empty() {
        warn!("Activity registry is empty");
    } else {
        info!(activities = seeded.len(), "Activity registry seeded");
    }

    let app = web::build_router(AppState::new(store, config.policy), &config.static_dir);

    let listener = bind(&config).await?;
    info!("Server running on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await
}

async fn bind(config: &AppConfig) -> std::io::Result<TcpListener> {
    let addr = config.addr();
    match TcpListener::bind(addr).await {
        Ok(listener) => Ok(listener),
        Err(e) => {
            let Some(fallback) = config.fallback_addr() else {
                return Err(e);
            };
            warn!(%addr, %fallback, error = %e, "Could not bind, trying fallback port");
            TcpListener::bind(fallback).await
        }
    }
}
