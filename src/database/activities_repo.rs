use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::warn;

use crate::database::seed;
use crate::models::{ActivityMap, ActivityRow};

/// In-memory activity registry.
///
/// Cheap to clone; every clone shares the same rows. Reads share the lock,
/// mutations hold the write guard for their whole check-then-modify step.
#[derive(Debug, Clone, Default)]
pub struct ActivityStore {
    rows: Arc<RwLock<Vec<ActivityRow>>>,
}

impl ActivityStore {
    /// Builds a store from `rows`, keeping the first row for any repeated name.
    pub fn new(rows: Vec<ActivityRow>) -> Self {
        let mut unique: Vec<ActivityRow> = Vec::with_capacity(rows.len());
        for row in rows {
            if unique.iter().any(|r| r.name == row.name) {
                warn!(activity = %row.name, "Duplicate activity name in seed, skipping");
                continue;
            }
            unique.push(row);
        }
        Self {
            rows: Arc::new(RwLock::new(unique)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::seed_activities())
    }
}

pub async fn list_activities(store: &ActivityStore) -> ActivityMap {
    let rows = store.rows.read().await;
    ActivityMap(rows.clone())
}

#[cfg(test)]
pub async fn load_activity_by_name(store: &ActivityStore, name: &str) -> Option<ActivityRow> {
    let rows = store.rows.read().await;
    rows.iter().find(|r| r.name == name).cloned()
}

/// Runs `f` against the named activity while holding the write lock.
///
/// Returns `None` when no activity has that exact name.
pub async fn update_activity<T, F>(store: &ActivityStore, name: &str, f: F) -> Option<T>
where
    F: FnOnce(&mut ActivityRow) -> T,
{
    let mut rows = store.rows.write().await;
    rows.iter_mut().find(|r| r.name == name).map(f)
}

/// Removes the first occurrence of `email`. Returns whether anything was removed.
pub fn remove_participant(row: &mut ActivityRow, email: &str) -> bool {
    match row.participants.iter().position(|p| p == email) {
        Some(idx) => {
            row.participants.remove(idx);
            true
        }
        None => false,
    }
}
