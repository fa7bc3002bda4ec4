//! Test harness: runs the real router on an ephemeral port.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use activities::database::activities_repo::ActivityStore;
use activities::services::activities_service::SignupPolicy;
use activities::web::{build_router, AppState};
use serde_json::Value;
use tokio::net::TcpListener;

/// A running server with a fresh seeded registry.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    _server_handle: tokio::task::JoinHandle<()>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(SignupPolicy::default(), missing_static_dir()).await
    }

    pub async fn spawn_with_policy(policy: SignupPolicy) -> Self {
        Self::spawn_with(policy, missing_static_dir()).await
    }

    pub async fn spawn_with(policy: SignupPolicy, static_dir: impl AsRef<Path>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = build_router(AppState::new(ActivityStore::seeded(), policy), static_dir);

        let server_handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap();

        Self {
            addr,
            client,
            _server_handle: server_handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client.get(self.url(path)).send().await.unwrap()
    }

    pub async fn post(&self, path: &str) -> reqwest::Response {
        self.client.post(self.url(path)).send().await.unwrap()
    }

    pub async fn activities(&self) -> Value {
        let resp = self.get("/activities").await;
        assert_eq!(resp.status(), 200);
        resp.json().await.unwrap()
    }

    pub async fn roster(&self, activity: &str) -> Vec<String> {
        let activities = self.activities().await;
        activities[activity]["participants"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect()
    }

    /// `activity` must already be path-encoded (`Chess%20Club`).
    pub async fn signup(&self, activity: &str, email: &str) -> reqwest::Response {
        self.post(&format!("/activities/{}/signup?email={}", activity, email))
            .await
    }

    pub async fn unregister(&self, activity: &str, email: &str) -> reqwest::Response {
        self.post(&format!("/activities/{}/unregister?email={}", activity, email))
            .await
    }
}

fn missing_static_dir() -> PathBuf {
    std::env::temp_dir().join("mergington-activities-no-static")
}

/// Temporary static directory holding an `index.html`, removed on drop.
pub struct StaticDir {
    path: PathBuf,
}

impl StaticDir {
    pub fn with_index(tag: &str, body: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "mergington-activities-{}-{}",
            tag,
            std::process::id()
        ));
        std::fs::create_dir_all(&path).unwrap();
        std::fs::write(path.join("index.html"), body).unwrap();
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AsRef<Path> for StaticDir {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl Drop for StaticDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}
