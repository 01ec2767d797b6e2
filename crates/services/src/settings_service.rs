use std::sync::Arc;

use storage::repository::SettingsRepository;
use tracker_core::model::ThemePreference;

use crate::error::SettingsServiceError;

#[derive(Clone)]
pub struct SettingsService {
    repo: Arc<dyn SettingsRepository>,
}

impl SettingsService {
    #[must_use]
    pub fn new(repo: Arc<dyn SettingsRepository>) -> Self {
        Self { repo }
    }

    /// Load the persisted theme (or the light default if nothing is stored).
    ///
    /// # Errors
    ///
    /// Returns `SettingsServiceError` on storage failures.
    pub async fn load_theme(&self) -> Result<ThemePreference, SettingsServiceError> {
        let theme = self.repo.get_theme().await?;
        Ok(theme.unwrap_or_default())
    }

    /// Persist a theme preference.
    ///
    /// # Errors
    ///
    /// Returns `SettingsServiceError` on storage failures.
    pub async fn save_theme(&self, theme: ThemePreference) -> Result<(), SettingsServiceError> {
        self.repo.save_theme(theme).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::repository::InMemoryRepository;

    #[tokio::test]
    async fn missing_theme_defaults_to_light() {
        let service = SettingsService::new(Arc::new(InMemoryRepository::new()));
        assert_eq!(service.load_theme().await.unwrap(), ThemePreference::Light);
    }

    #[tokio::test]
    async fn saved_theme_is_returned() {
        let service = SettingsService::new(Arc::new(InMemoryRepository::new()));
        service.save_theme(ThemePreference::Dark).await.unwrap();
        assert_eq!(service.load_theme().await.unwrap(), ThemePreference::Dark);
    }
}
