use std::sync::Arc;

use storage::repository::ProgressRepository;
use tracker_core::Clock;
use tracker_core::model::{ProgressSet, ProgressSummary, Syllabus, TopicKey};

use crate::error::ProgressServiceError;

/// Result of toggling one topic: the stored flag plus the refreshed summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicToggle {
    pub completed: bool,
    pub summary: ProgressSummary,
}

/// Mirrors checkbox state into the progress repository and aggregates it.
#[derive(Clone)]
pub struct ProgressService {
    clock: Clock,
    syllabus: Arc<Syllabus>,
    repo: Arc<dyn ProgressRepository>,
}

impl ProgressService {
    #[must_use]
    pub fn new(clock: Clock, syllabus: Arc<Syllabus>, repo: Arc<dyn ProgressRepository>) -> Self {
        Self {
            clock,
            syllabus,
            repo,
        }
    }

    #[must_use]
    pub fn syllabus(&self) -> Arc<Syllabus> {
        Arc::clone(&self.syllabus)
    }

    /// Load completion state for every topic in the syllabus.
    ///
    /// Stored keys the syllabus no longer references are ignored, not
    /// deleted, so restoring the table restores their state too.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` on storage failures.
    pub async fn load(&self) -> Result<ProgressSet, ProgressServiceError> {
        let records = self.repo.list_records().await?;
        let mut progress = ProgressSet::from_keys(
            records
                .into_iter()
                .filter(|record| record.completed)
                .map(|record| record.key),
        );
        progress.retain_known(&self.syllabus);
        Ok(progress)
    }

    /// Persist a completion flag and report the refreshed overall summary.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::UnknownTopic` if the key does not
    /// address a topic in the syllabus, or a storage error.
    pub async fn set_completed(
        &self,
        key: &TopicKey,
        completed: bool,
    ) -> Result<TopicToggle, ProgressServiceError> {
        if !self.syllabus.contains_key(key) {
            return Err(ProgressServiceError::UnknownTopic(key.clone()));
        }
        self.repo
            .set_completed(key, completed, self.clock.now())
            .await?;

        let progress = self.load().await?;
        Ok(TopicToggle {
            completed,
            summary: ProgressSummary::overall(&self.syllabus, &progress),
        })
    }

    /// Overall done/total/percent across the whole syllabus.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` on storage failures.
    pub async fn summary(&self) -> Result<ProgressSummary, ProgressServiceError> {
        let progress = self.load().await?;
        Ok(ProgressSummary::overall(&self.syllabus, &progress))
    }
}
