use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracker_core::model::{ThemePreference, TopicKey};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persisted shape for one topic's completion flag.
///
/// The key string is the storage primary key; `updated_at` records when the
/// flag last changed. Records stay in storage even when the syllabus no
/// longer references their key, so edits to the fixed table never destroy
/// prior state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressRecord {
    pub key: TopicKey,
    pub completed: bool,
    pub updated_at: DateTime<Utc>,
}

/// Repository contract for per-topic completion flags.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Persist the completion flag for a topic key.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the flag cannot be stored.
    async fn set_completed(
        &self,
        key: &TopicKey,
        completed: bool,
        at: DateTime<Utc>,
    ) -> Result<(), StorageError>;

    /// All records currently stored, including keys no syllabus references.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on connection or decoding failures.
    async fn list_records(&self) -> Result<Vec<ProgressRecord>, StorageError>;

    /// Completion flag for one key; `Ok(false)` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on connection failures.
    async fn is_completed(&self, key: &TopicKey) -> Result<bool, StorageError>;
}

/// Repository contract for app-wide settings (currently just the theme).
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Stored theme, or `None` if nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on connection failures.
    async fn get_theme(&self) -> Result<Option<ThemePreference>, StorageError>;

    /// Persist the theme preference.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the preference cannot be stored.
    async fn save_theme(&self, theme: ThemePreference) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    progress: Arc<Mutex<HashMap<TopicKey, ProgressRecord>>>,
    theme: Arc<Mutex<Option<ThemePreference>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn set_completed(
        &self,
        key: &TopicKey,
        completed: bool,
        at: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        let mut guard = self
            .progress
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(
            key.clone(),
            ProgressRecord {
                key: key.clone(),
                completed,
                updated_at: at,
            },
        );
        Ok(())
    }

    async fn list_records(&self) -> Result<Vec<ProgressRecord>, StorageError> {
        let guard = self
            .progress
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.values().cloned().collect())
    }

    async fn is_completed(&self, key: &TopicKey) -> Result<bool, StorageError> {
        let guard = self
            .progress
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).is_some_and(|record| record.completed))
    }
}

#[async_trait]
impl SettingsRepository for InMemoryRepository {
    async fn get_theme(&self) -> Result<Option<ThemePreference>, StorageError> {
        let guard = self
            .theme
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(*guard)
    }

    async fn save_theme(&self, theme: ThemePreference) -> Result<(), StorageError> {
        let mut guard = self
            .theme
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(theme);
        Ok(())
    }
}

/// Aggregates the repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub progress: Arc<dyn ProgressRepository>,
    pub settings: Arc<dyn SettingsRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let progress: Arc<dyn ProgressRepository> = Arc::new(repo.clone());
        let settings: Arc<dyn SettingsRepository> = Arc::new(repo);
        Self { progress, settings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_core::time::fixed_now;

    fn key(raw: &str) -> TopicKey {
        raw.parse().unwrap()
    }

    #[tokio::test]
    async fn round_trips_completion_flag() {
        let repo = InMemoryRepository::new();
        repo.set_completed(&key("physics_c0_t0"), true, fixed_now())
            .await
            .unwrap();

        assert!(repo.is_completed(&key("physics_c0_t0")).await.unwrap());
        assert!(!repo.is_completed(&key("physics_c0_t1")).await.unwrap());

        repo.set_completed(&key("physics_c0_t0"), false, fixed_now())
            .await
            .unwrap();
        assert!(!repo.is_completed(&key("physics_c0_t0")).await.unwrap());

        let records = repo.list_records().await.unwrap();
        assert_eq!(records.len(), 1);
        assert!(!records[0].completed);
        assert_eq!(records[0].updated_at, fixed_now());
    }

    #[tokio::test]
    async fn theme_defaults_to_unset() {
        let repo = InMemoryRepository::new();
        assert_eq!(repo.get_theme().await.unwrap(), None);

        repo.save_theme(ThemePreference::Dark).await.unwrap();
        assert_eq!(repo.get_theme().await.unwrap(), Some(ThemePreference::Dark));
    }
}
