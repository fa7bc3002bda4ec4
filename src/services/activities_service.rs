use crate::database::activities_repo::{self, ActivityStore};
use crate::models::ActivityMap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    NotFound,

    #[error("Student is not registered for this activity")]
    NotRegistered,

    #[error("Student is already signed up for this activity")]
    AlreadySignedUp,

    #[error("Activity is full")]
    ActivityFull,

    #[error("email query parameter is required")]
    MissingEmail,
}

/// Optional signup checks. Both are off unless configured, which keeps
/// repeated signups and over-capacity rosters permitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignupPolicy {
    pub reject_duplicates: bool,
    pub enforce_capacity: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticipantQuery {
    pub email: Option<String>,
}

impl ParticipantQuery {
    /// Builds from raw query pairs. A repeated `email` key keeps the last value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let email = pairs
            .into_iter()
            .filter(|(key, _)| key == "email")
            .map(|(_, value)| value)
            .last();
        Self { email }
    }

    /// The email exactly as sent; blank or missing is rejected.
    pub fn email(&self) -> Result<&str, ActivityError> {
        match self.email.as_deref() {
            Some(email) if !email.trim().is_empty() => Ok(email),
            _ => Err(ActivityError::MissingEmail),
        }
    }
}

pub async fn load_activities(store: &ActivityStore) -> ActivityMap {
    activities_repo::list_activities(store).await
}

pub async fn sign_up(
    store: &ActivityStore,
    policy: SignupPolicy,
    activity_name: &str,
    email: &str,
) -> Result<String, ActivityError> {
    activities_repo::update_activity(store, activity_name, |row| {
        if policy.reject_duplicates && row.has_participant(email) {
            return Err(ActivityError::AlreadySignedUp);
        }
        if policy.enforce_capacity && row.is_full() {
            return Err(ActivityError::ActivityFull);
        }
        row.participants.push(email.to_string());
        Ok(())
    })
    .await
    .ok_or(ActivityError::NotFound)??;

    Ok(format!("Signed up {} for {}", email, activity_name))
}

pub async fn unregister(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, ActivityError> {
    let removed = activities_repo::update_activity(store, activity_name, |row| {
        activities_repo::remove_participant(row, email)
    })
    .await
    .ok_or(ActivityError::NotFound)?;

    if !removed {
        return Err(ActivityError::NotRegistered);
    }
    Ok(format!("Unregistered {} from {}", email, activity_name))
}
