use async_trait::async_trait;
use sqlx::Row;

use crate::repository::{SettingsRepository, StorageError};
use tracker_core::model::ThemePreference;

use super::SqliteRepository;

#[async_trait]
impl SettingsRepository for SqliteRepository {
    async fn get_theme(&self) -> Result<Option<ThemePreference>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT theme
            FROM app_settings
            WHERE id = 1
            ",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let theme: String = row
            .try_get("theme")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        // Unknown stored values read as the light default rather than failing.
        Ok(Some(ThemePreference::from_stored(&theme)))
    }

    async fn save_theme(&self, theme: ThemePreference) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO app_settings (id, theme)
            VALUES (?1, ?2)
            ON CONFLICT(id) DO UPDATE SET
                theme = excluded.theme
            ",
        )
        .bind(1_i64)
        .bind(theme.as_str())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}
