use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Row;

use crate::repository::{ProgressRecord, ProgressRepository, StorageError};
use tracker_core::model::TopicKey;

use super::SqliteRepository;

#[async_trait]
impl ProgressRepository for SqliteRepository {
    async fn set_completed(
        &self,
        key: &TopicKey,
        completed: bool,
        at: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO topic_progress (topic_key, completed, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(topic_key) DO UPDATE SET
                completed = excluded.completed,
                updated_at = excluded.updated_at
            ",
        )
        .bind(key.to_string())
        .bind(i64::from(completed))
        .bind(at)
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }

    async fn list_records(&self) -> Result<Vec<ProgressRecord>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT topic_key, completed, updated_at
            FROM topic_progress
            ORDER BY topic_key
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let raw_key: String = row
                .try_get("topic_key")
                .map_err(|err| StorageError::Serialization(err.to_string()))?;
            let key: TopicKey = raw_key
                .parse()
                .map_err(|_| StorageError::Serialization(format!("bad topic key: {raw_key}")))?;
            let completed: i64 = row
                .try_get("completed")
                .map_err(|err| StorageError::Serialization(err.to_string()))?;
            let updated_at: DateTime<Utc> = row
                .try_get("updated_at")
                .map_err(|err| StorageError::Serialization(err.to_string()))?;

            records.push(ProgressRecord {
                key,
                completed: completed != 0,
                updated_at,
            });
        }

        Ok(records)
    }

    async fn is_completed(&self, key: &TopicKey) -> Result<bool, StorageError> {
        let row = sqlx::query(
            r"
            SELECT completed
            FROM topic_progress
            WHERE topic_key = ?1
            ",
        )
        .bind(key.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(false);
        };

        let completed: i64 = row
            .try_get("completed")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        Ok(completed != 0)
    }
}
